//! Property tests for routing totality, journey monotonicity and the
//! logout reset.

use std::time::Duration;

use carepath_core::flows::{
    AnalysisState, ConsultTab, FamilyBooking, LoginStep, Portal, ScanState, SpecialistView,
    TransferStep,
};
use carepath_core::{
    Action, AppStore, ConsultationAction, DemoScene, FamilyAction, HomeAction, JourneySequencer,
    LoginAction, RecordsAction, ScannerAction, WorkbenchAction, next_step, route,
};
use carepath_model::{
    AuthMethod, AuthState, DoctorPage, DoctorType, JourneyEvent, JourneyStep, LoginRegion,
    Persona, Role, Screen, Session, Tab,
};
use proptest::prelude::*;

fn tab() -> impl Strategy<Value = Tab> {
    proptest::sample::select(Tab::ALL.to_vec())
}

fn event() -> impl Strategy<Value = JourneyEvent> {
    proptest::sample::select(JourneyEvent::ALL.to_vec())
}

fn auth() -> impl Strategy<Value = AuthState> {
    let persona = proptest::sample::select(Persona::ALL.to_vec());
    let method = proptest::sample::select(vec![
        AuthMethod::Medicare,
        AuthMethod::Wechat,
        AuthMethod::Alipay,
        AuthMethod::IdCard,
        AuthMethod::WorkId,
    ]);
    let region = proptest::sample::select(vec![LoginRegion::Shanghai, LoginRegion::NonShanghai]);
    prop_oneof![
        Just(AuthState::LoggedOut),
        (persona, method, region, any::<bool>()).prop_map(|(persona, method, region, visitor)| {
            AuthState::LoggedIn(Session::new(region, method, persona).as_visitor(visitor))
        }),
    ]
}

fn pick<T: Clone + std::fmt::Debug + 'static>(values: Vec<T>) -> impl Strategy<Value = T> {
    proptest::sample::select(values)
}

fn action() -> impl Strategy<Value = Action> {
    let ids = || pick(vec!["rec1", "rec2", "q1", "ref1", "ref2", "t2", "x"]);
    prop_oneof![
        tab().prop_map(Action::Navigate),
        pick(DemoScene::ALL.to_vec()).prop_map(Action::Tour),
        pick(vec![
            LoginAction::ToggleAgreement,
            LoginAction::Agree,
            LoginAction::SelectPortal(Portal::Public),
            LoginAction::SelectPortal(Portal::Medical),
            LoginAction::ToggleRegion,
            LoginAction::SelectRole(Role::Family),
            LoginAction::WorkId("8801".into()),
            LoginAction::Password("demo".into()),
            LoginAction::SelectDoctorType(DoctorType::Community),
            LoginAction::SubmitPublic(AuthMethod::Wechat),
            LoginAction::SubmitMedical,
            LoginAction::FileRecord,
            LoginAction::JustLook,
        ])
        .prop_map(Action::Login),
        pick(vec![
            HomeAction::BindIdentity,
            HomeAction::OpenBooking,
            HomeAction::ConfirmBooking,
            HomeAction::CompleteCheckup,
            HomeAction::Pay,
            HomeAction::AcceptCarePlan,
        ])
        .prop_map(Action::Home),
        ids().prop_map(|id| Action::Records(RecordsAction::Select(id.into()))),
        pick(vec![
            RecordsAction::RequestAnalysis,
            RecordsAction::AnalysisReady("解读".into()),
            RecordsAction::StartTransfer,
            RecordsAction::ConfirmTransfer,
        ])
        .prop_map(Action::Records),
        pick(vec![ScannerAction::Start, ScannerAction::Confirm]).prop_map(Action::Scanner),
        ids().prop_map(|id| Action::Workbench(WorkbenchAction::OpenTask(id.into()))),
        ids().prop_map(|id| Action::Workbench(WorkbenchAction::SelectPatient(id.into()))),
        Just(Action::Workbench(WorkbenchAction::AcceptReferral)),
        ids().prop_map(|id| Action::Consultation(ConsultationAction::Select(id.into()))),
        Just(Action::Consultation(ConsultationAction::SelectTab(ConsultTab::Labs))),
        Just(Action::Consultation(ConsultationAction::Sign)),
        Just(Action::Family(FamilyAction::RemoteBook)),
    ]
}

fn assert_fresh(store: &AppStore) -> Result<(), TestCaseError> {
    prop_assert_eq!(*store.auth(), AuthState::LoggedOut);
    prop_assert_eq!(store.tab(), Tab::Home);
    prop_assert_eq!(store.screen(), Screen::Login);
    prop_assert_eq!(store.journey_step(), JourneyStep::Onboarding);
    prop_assert_eq!(store.pending_timers(), 0);
    prop_assert!(!store.analysis_pending());
    prop_assert_eq!(store.login_flow().step(), LoginStep::Splash);
    prop_assert!(!store.login_flow().agreed());
    prop_assert!(!store.home_flow().booking_open());
    prop_assert!(store.records_flow().selected().is_none());
    prop_assert_eq!(store.records_flow().analysis(), &AnalysisState::Idle);
    prop_assert_eq!(store.records_flow().transfer(), TransferStep::Idle);
    prop_assert_eq!(store.scanner_flow().state(), ScanState::Idle);
    prop_assert!(store.workbench_flow().referral().is_none());
    prop_assert!(store.workbench_flow().selected_patient().is_none());
    prop_assert!(matches!(store.consultation_flow().view(), SpecialistView::List));
    prop_assert_eq!(store.family_flow().booking(), FamilyBooking::Idle);
    Ok(())
}

proptest! {
    #[test]
    fn logout_resets_the_store_from_any_state(
        steps in proptest::collection::vec((action(), 0u64..2500), 0..30),
    ) {
        let mut store = AppStore::new();
        for (action, wait) in steps {
            store.dispatch(action);
            store.advance(Duration::from_millis(wait));
        }
        store.dispatch(Action::Logout);
        assert_fresh(&store)?;

        // Nothing scheduled before the logout fires afterwards.
        prop_assert!(store.advance(Duration::from_secs(10)).is_empty());
        assert_fresh(&store)?;
    }
}

proptest! {
    #[test]
    fn every_auth_and_tab_routes_to_a_screen_for_that_role(auth in auth(), tab in tab()) {
        let screen = route(&auth, tab);
        match auth.persona() {
            None => prop_assert_eq!(screen, Screen::Login),
            Some(Persona::Doctor(kind)) => {
                let is_doctor_screen = matches!(screen, Screen::Doctor { kind: k, .. } if k == kind);
                prop_assert!(is_doctor_screen);
            }
            Some(Persona::Family) => {
                let allowed = matches!(
                    screen,
                    Screen::Family { .. } | Screen::Records | Screen::Plan
                );
                prop_assert!(allowed);
            }
            Some(Persona::Patient) => {
                let forbidden = matches!(screen, Screen::Doctor { .. } | Screen::Family { .. } | Screen::Login);
                prop_assert!(!forbidden);
            }
        }
    }

    #[test]
    fn routing_ignores_region_and_visitor(tab in tab(), visitor in any::<bool>()) {
        let base = Session::new(LoginRegion::Shanghai, AuthMethod::Medicare, Persona::Patient);
        let other = Session::new(LoginRegion::NonShanghai, AuthMethod::Alipay, Persona::Patient)
            .as_visitor(visitor);
        prop_assert_eq!(
            route(&AuthState::LoggedIn(base), tab),
            route(&AuthState::LoggedIn(other), tab)
        );
    }

    #[test]
    fn journey_never_moves_backwards(events in proptest::collection::vec(event(), 0..40)) {
        let mut journey = JourneySequencer::new();
        for event in events {
            let before = journey.step();
            match journey.fire(event) {
                Ok(after) => {
                    prop_assert_eq!(after.index(), before.index() + 1);
                    prop_assert_eq!(Some(after), next_step(before, event));
                }
                Err(err) => {
                    prop_assert_eq!(journey.step(), before);
                    prop_assert_eq!(err.from, before);
                }
            }
        }
    }

    #[test]
    fn doctor_scanner_tab_always_opens_scanner(kind in proptest::sample::select(vec![DoctorType::Community, DoctorType::Specialist])) {
        let session = Session::new(LoginRegion::Shanghai, AuthMethod::WorkId, Persona::Doctor(kind));
        prop_assert_eq!(
            route(&AuthState::LoggedIn(session), Tab::Scanner),
            Screen::Doctor { kind, page: DoctorPage::Scanner }
        );
    }
}

#[test]
fn full_pathway_reaches_treatment() {
    let mut journey = JourneySequencer::new();
    for event in JourneyEvent::ALL {
        journey.fire(event).unwrap();
    }
    assert_eq!(journey.step(), JourneyStep::TreatmentActive);
}
