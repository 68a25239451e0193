//! End-to-end walks through the store: the patient pathway, the doctor
//! workbenches and the family home.

use std::time::Duration;

use carepath_core::flows::{
    AnalysisState, ConsultTab, DiagnosisStep, FamilyBooking, HomeBanner, ReferralStep,
    SpecialistView, TicketKind, TransferStep, home_view, pass_ticket,
};
use carepath_core::{
    Action, AppStore, ConsultationAction, DemoScene, FamilyAction, HomeAction, RecordsAction,
    Timer, WorkbenchAction,
};
use carepath_model::{JourneyStep, Tab};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn home(store: &mut AppStore, action: HomeAction) {
    store.dispatch(Action::Home(action));
}

#[test]
fn patient_pathway_from_onboarding_to_treatment() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Onboarding));
    assert_eq!(store.journey_step(), JourneyStep::Onboarding);

    home(&mut store, HomeAction::BindIdentity);
    home(&mut store, HomeAction::OpenBooking);
    assert_eq!(
        home_view(store.journey_step(), store.home_flow()).banner,
        HomeBanner::BookCheckup { dialog_open: true }
    );
    home(&mut store, HomeAction::ConfirmBooking);
    assert_eq!(store.journey_step(), JourneyStep::CheckupBooked);

    store.dispatch(Action::Navigate(Tab::Pass));
    let ticket = pass_ticket(store.journey_step(), &carepath_fixtures::appointment());
    assert_eq!(ticket.kind, TicketKind::Checkup);
    store.dispatch(Action::Navigate(Tab::Home));

    home(&mut store, HomeAction::CompleteCheckup);
    home(&mut store, HomeAction::Pay);
    assert_eq!(store.journey_step(), JourneyStep::Analyzing);
    assert!(store.analysis_pending());

    assert!(store.advance(ms(1999)).is_empty());
    assert_eq!(store.journey_step(), JourneyStep::Analyzing);
    assert_eq!(store.advance(ms(1)), vec![Timer::AnalysisFinished]);
    assert_eq!(store.journey_step(), JourneyStep::ReportReady);
    assert!(!store.analysis_pending());

    assert_eq!(
        home_view(store.journey_step(), store.home_flow()).banner,
        HomeBanner::ReportOverlay
    );
    home(&mut store, HomeAction::AcceptCarePlan);
    assert_eq!(store.journey_step(), JourneyStep::TreatmentActive);
}

#[test]
fn logout_during_analysis_cancels_the_report() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Onboarding));
    for action in [
        HomeAction::BindIdentity,
        HomeAction::OpenBooking,
        HomeAction::ConfirmBooking,
        HomeAction::CompleteCheckup,
        HomeAction::Pay,
    ] {
        home(&mut store, action);
    }
    store.advance(ms(500));
    store.dispatch(Action::Logout);

    assert!(store.advance(ms(5000)).is_empty());
    assert_eq!(store.journey_step(), JourneyStep::Onboarding);
    assert!(!store.auth().is_logged_in());
    assert_eq!(store.tab(), Tab::Home);
    insta::assert_snapshot!(store.screen().to_string(), @"login");
}

#[test]
fn tour_jump_cancels_pending_analysis() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Onboarding));
    for action in [
        HomeAction::BindIdentity,
        HomeAction::OpenBooking,
        HomeAction::ConfirmBooking,
        HomeAction::CompleteCheckup,
        HomeAction::Pay,
    ] {
        home(&mut store, action);
    }
    store.dispatch(Action::Tour(DemoScene::Family));
    assert_eq!(store.pending_timers(), 0);
    assert!(store.advance(ms(2000)).is_empty());
    // Family scene leaves the journey where it was.
    assert_eq!(store.journey_step(), JourneyStep::Analyzing);
}

#[test]
fn illegal_events_leave_the_step_alone() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Onboarding));
    home(&mut store, HomeAction::Pay);
    home(&mut store, HomeAction::AcceptCarePlan);
    assert_eq!(store.journey_step(), JourneyStep::Onboarding);
    assert_eq!(store.pending_timers(), 0);
}

#[test]
fn records_transfer_accepts_plan_from_report_ready() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Report));
    store.dispatch(Action::Navigate(Tab::Records));
    for action in [
        RecordsAction::Select("rec1".into()),
        RecordsAction::StartTransfer,
        RecordsAction::ConfirmTransfer,
    ] {
        store.dispatch(Action::Records(action));
    }
    assert_eq!(store.records_flow().transfer(), TransferStep::Transferring);
    store.advance(ms(1500));
    assert_eq!(store.records_flow().transfer(), TransferStep::Done);

    let screen = store.dispatch(Action::Records(RecordsAction::AcknowledgeTransfer));
    insta::assert_snapshot!(screen.to_string(), @"patient/home");
    assert_eq!(store.journey_step(), JourneyStep::TreatmentActive);
}

#[test]
fn records_transfer_before_report_does_not_skip_ahead() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Onboarding));
    store.dispatch(Action::Navigate(Tab::Records));
    for action in [
        RecordsAction::Select("rec1".into()),
        RecordsAction::StartTransfer,
        RecordsAction::ConfirmTransfer,
    ] {
        store.dispatch(Action::Records(action));
    }
    store.advance(ms(1500));
    store.dispatch(Action::Records(RecordsAction::AcknowledgeTransfer));
    assert_eq!(store.tab(), Tab::Home);
    assert_eq!(store.journey_step(), JourneyStep::Onboarding);
}

#[test]
fn family_transfer_leaves_the_patient_journey_alone() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Report));
    store.dispatch(Action::Tour(DemoScene::Family));
    assert_eq!(store.journey_step(), JourneyStep::ReportReady);

    store.dispatch(Action::Navigate(Tab::Records));
    for action in [
        RecordsAction::Select("rec1".into()),
        RecordsAction::StartTransfer,
        RecordsAction::ConfirmTransfer,
    ] {
        store.dispatch(Action::Records(action));
    }
    store.advance(ms(1500));
    assert_eq!(store.records_flow().transfer(), TransferStep::Done);

    let screen = store.dispatch(Action::Records(RecordsAction::AcknowledgeTransfer));
    insta::assert_snapshot!(screen.to_string(), @"records");
    assert_eq!(store.tab(), Tab::Records);
    assert_eq!(store.journey_step(), JourneyStep::ReportReady);
}

#[test]
fn completed_records_cannot_be_transferred_again() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Report));
    store.dispatch(Action::Navigate(Tab::Records));
    store.dispatch(Action::Records(RecordsAction::Select("rec2".into())));
    store.dispatch(Action::Records(RecordsAction::StartTransfer));
    assert_eq!(store.records_flow().transfer(), TransferStep::Idle);
}

#[test]
fn analysis_text_is_shown_only_after_request() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Report));
    store.dispatch(Action::Navigate(Tab::Records));
    store.dispatch(Action::Records(RecordsAction::Select("rec1".into())));
    store.dispatch(Action::Records(RecordsAction::AnalysisReady("早".into())));
    assert_eq!(
        *store.records_flow().analysis(),
        AnalysisState::Idle
    );
    store.dispatch(Action::Records(RecordsAction::RequestAnalysis));
    store.dispatch(Action::Records(RecordsAction::AnalysisReady("解读".into())));
    assert_eq!(
        *store.records_flow().analysis(),
        AnalysisState::Ready("解读".into())
    );
}

#[test]
fn specialist_without_selection_sees_the_list() {
    let mut store = AppStore::new();
    let screen = store.dispatch(Action::Tour(DemoScene::Specialist));
    insta::assert_snapshot!(screen.to_string(), @"doctor/specialist/workbench");
    assert!(matches!(
        store.consultation_flow().view(),
        SpecialistView::List
    ));

    store.dispatch(Action::Consultation(ConsultationAction::Select("ref2".into())));
    store.dispatch(Action::Consultation(ConsultationAction::SelectTab(ConsultTab::Images)));
    store.dispatch(Action::Consultation(ConsultationAction::Sign));
    assert!(matches!(
        store.consultation_flow().view(),
        SpecialistView::Detail {
            tab: ConsultTab::Images,
            diagnosis: DiagnosisStep::Signed,
            ..
        }
    ));
    store.dispatch(Action::Consultation(ConsultationAction::Next));
    assert!(matches!(
        store.consultation_flow().view(),
        SpecialistView::List
    ));
}

#[test]
fn community_referral_review_from_task_list() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Community));
    let review = carepath_fixtures::doctor_tasks()
        .into_iter()
        .find(|task| task.kind == carepath_model::TaskKind::TransferReview)
        .map(|task| task.id)
        .unwrap();
    store.dispatch(Action::Workbench(WorkbenchAction::OpenTask(review)));
    assert_eq!(store.workbench_flow().referral(), Some(ReferralStep::Review));
    store.dispatch(Action::Workbench(WorkbenchAction::AcceptReferral));
    assert_eq!(store.workbench_flow().referral(), Some(ReferralStep::Accepted));

    // Leaving the workbench unmounts the sheet.
    store.dispatch(Action::Navigate(Tab::DoctorProfile));
    store.dispatch(Action::Navigate(Tab::Workbench));
    assert_eq!(store.workbench_flow().referral(), None);
}

#[test]
fn family_remote_booking_succeeds_after_delay() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Family));
    store.dispatch(Action::Family(FamilyAction::RemoteBook));
    assert_eq!(store.family_flow().booking(), FamilyBooking::Booking);
    store.advance(ms(1500));
    assert_eq!(store.family_flow().booking(), FamilyBooking::Success);
}

#[test]
fn unreachable_tab_is_kept_but_routed_to_default() {
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(DemoScene::Family));
    let screen = store.dispatch(Action::Navigate(Tab::Scanner));
    assert_eq!(store.tab(), Tab::Scanner);
    insta::assert_snapshot!(screen.to_string(), @"family/home");
}
