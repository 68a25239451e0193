//! Application store.
//!
//! One owner for the session, the selected tab, the journey step, pending
//! demo timers and the state of every screen-local flow. Screens never
//! mutate it directly: they send an [`Action`] through [`AppStore::dispatch`]
//! and the host drives the clock with [`AppStore::advance`].

use std::time::Duration;

use carepath_model::{
    AuthMethod, AuthState, DoctorPage, DoctorType, FamilyPage, JourneyEvent, JourneyStep, Persona,
    Role, Screen, Session, Tab,
};
use tracing::{debug, info};

use crate::flows::{
    ConsultTab, ConsultationFlow, FamilyFlow, HomeFlow, LoginFlow, Portal, RecordsFlow,
    ScannerFlow, WorkbenchFlow,
};
use crate::journey::JourneySequencer;
use crate::router::{landing_tab, route};
use crate::schedule::{
    FAMILY_BOOKING, LOGIN_PROCESSING, RECORD_TRANSFER, REPORT_ANALYSIS, SCAN_DETECTION, Scheduler,
    TaskId,
};
use crate::tour::DemoScene;

/// Payload of a scheduled demo delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    LoginProcessed,
    AnalysisFinished,
    TransferFinished,
    ScanDetected,
    FamilyBooked,
}

impl Timer {
    /// The screen whose flow owns this timer; `None` for journey-level
    /// timers that survive navigation.
    fn owner(&self) -> Option<Owner> {
        match self {
            Timer::LoginProcessed => Some(Owner::Login),
            Timer::AnalysisFinished => None,
            Timer::TransferFinished => Some(Owner::Records),
            Timer::ScanDetected => Some(Owner::Scanner),
            Timer::FamilyBooked => Some(Owner::FamilyHome),
        }
    }
}

/// Flow-owning screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Login,
    Home,
    Records,
    Scanner,
    Workbench,
    Consultation,
    FamilyHome,
}

impl Owner {
    fn of(screen: Screen) -> Option<Self> {
        match screen {
            Screen::Login => Some(Owner::Login),
            Screen::PatientHome => Some(Owner::Home),
            Screen::Records => Some(Owner::Records),
            Screen::Doctor {
                page: DoctorPage::Scanner,
                ..
            } => Some(Owner::Scanner),
            Screen::Doctor {
                kind: DoctorType::Community,
                page: DoctorPage::Workbench,
            } => Some(Owner::Workbench),
            Screen::Doctor {
                kind: DoctorType::Specialist,
                page: DoctorPage::Workbench,
            } => Some(Owner::Consultation),
            Screen::Family {
                page: FamilyPage::Home,
            } => Some(Owner::FamilyHome),
            Screen::Pass
            | Screen::Plan
            | Screen::Profile
            | Screen::Doctor {
                page: DoctorPage::Profile,
                ..
            }
            | Screen::Family {
                page: FamilyPage::Profile,
            } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    ToggleAgreement,
    Agree,
    SelectPortal(Portal),
    ToggleRegion,
    SelectRole(Role),
    WorkId(String),
    Password(String),
    SelectDoctorType(DoctorType),
    SubmitPublic(AuthMethod),
    SubmitMedical,
    FileRecord,
    JustLook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    BindIdentity,
    OpenBooking,
    CloseBooking,
    ConfirmBooking,
    CompleteCheckup,
    Pay,
    AcceptCarePlan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsAction {
    Select(String),
    Back,
    RequestAnalysis,
    /// Summarizer text for the pending explanation.
    AnalysisReady(String),
    StartTransfer,
    CancelTransfer,
    ConfirmTransfer,
    AcknowledgeTransfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerAction {
    Start,
    Confirm,
    Back,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchAction {
    OpenTask(String),
    AcceptReferral,
    CloseReferral,
    SelectPatient(String),
    ClosePatient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultationAction {
    Select(String),
    SelectTab(ConsultTab),
    Sign,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyAction {
    RemoteBook,
}

/// Everything a screen can ask the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Tab),
    Login(LoginAction),
    Logout,
    Home(HomeAction),
    Records(RecordsAction),
    Scanner(ScannerAction),
    Workbench(WorkbenchAction),
    Consultation(ConsultationAction),
    Family(FamilyAction),
    Tour(DemoScene),
}

impl Action {
    /// Short name for logs. Payloads such as passwords and summarizer text
    /// are left out.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::Login(_) => "login",
            Action::Logout => "logout",
            Action::Home(_) => "home",
            Action::Records(_) => "records",
            Action::Scanner(_) => "scanner",
            Action::Workbench(_) => "workbench",
            Action::Consultation(_) => "consultation",
            Action::Family(_) => "family",
            Action::Tour(_) => "tour",
        }
    }
}

#[derive(Debug, Default)]
pub struct AppStore {
    auth: AuthState,
    tab: Tab,
    journey: JourneySequencer,
    scheduler: Scheduler<Timer>,
    analysis_task: Option<TaskId>,
    login: LoginFlow,
    home: HomeFlow,
    records: RecordsFlow,
    scanner: ScannerFlow,
    workbench: WorkbenchFlow,
    consultation: ConsultationFlow,
    family: FamilyFlow,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn journey_step(&self) -> JourneyStep {
        self.journey.step()
    }

    /// Virtual time elapsed since the store was created.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Whether the joint-diagnosis report is still being prepared.
    pub fn analysis_pending(&self) -> bool {
        self.analysis_task.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// The screen currently shown.
    pub fn screen(&self) -> Screen {
        route(&self.auth, self.tab)
    }

    pub fn login_flow(&self) -> &LoginFlow {
        &self.login
    }

    pub fn home_flow(&self) -> &HomeFlow {
        &self.home
    }

    pub fn records_flow(&self) -> &RecordsFlow {
        &self.records
    }

    pub fn scanner_flow(&self) -> &ScannerFlow {
        &self.scanner
    }

    pub fn workbench_flow(&self) -> &WorkbenchFlow {
        &self.workbench
    }

    pub fn consultation_flow(&self) -> &ConsultationFlow {
        &self.consultation
    }

    pub fn family_flow(&self) -> &FamilyFlow {
        &self.family
    }

    /// Apply an action and return the screen shown afterwards.
    pub fn dispatch(&mut self, action: Action) -> Screen {
        let screen = self.screen();
        match action {
            Action::Navigate(tab) => self.navigate(tab),
            Action::Logout => self.logout(),
            Action::Tour(scene) => self.apply_scene(scene),
            Action::Login(action) if screen == Screen::Login => self.on_login(action),
            Action::Home(action) if Owner::of(screen) == Some(Owner::Home) => self.on_home(action),
            Action::Records(action) if screen == Screen::Records => self.on_records(action),
            Action::Scanner(action) if Owner::of(screen) == Some(Owner::Scanner) => {
                self.on_scanner(action);
            }
            Action::Workbench(action) if Owner::of(screen) == Some(Owner::Workbench) => {
                self.on_workbench(action);
            }
            Action::Consultation(action) if Owner::of(screen) == Some(Owner::Consultation) => {
                self.on_consultation(action);
            }
            Action::Family(FamilyAction::RemoteBook)
                if Owner::of(screen) == Some(Owner::FamilyHome) =>
            {
                if self.family.remote_book() {
                    self.scheduler.schedule(FAMILY_BOOKING, Timer::FamilyBooked);
                }
            }
            other => debug!(
                action = other.name(),
                %screen,
                "action not available on this screen"
            ),
        }
        self.screen()
    }

    /// Advance the virtual clock, firing due timers in order. Returns the
    /// timers that fired.
    pub fn advance(&mut self, by: Duration) -> Vec<Timer> {
        let deadline = self.scheduler.now() + by;
        let mut fired = Vec::new();
        // A firing timer may schedule the next one; keep going until the
        // deadline is reached.
        while let Some(timer) = self.scheduler.fire_next(deadline) {
            debug!(?timer, now = ?self.scheduler.now(), "timer fired");
            self.on_timer(timer);
            fired.push(timer);
        }
        self.scheduler.advance(deadline.saturating_sub(self.scheduler.now()));
        fired
    }

    /// Replace the session and land on the persona's default tab.
    pub fn login(&mut self, session: Session) {
        let before = self.screen();
        info!(
            persona = %session.persona,
            method = %session.method,
            region = %session.region,
            visitor = session.visitor,
            "logged in"
        );
        self.auth = AuthState::LoggedIn(session);
        self.tab = landing_tab(session.persona);
        self.leave(before);
    }

    /// Back to a fresh logged-out store: no session, Home tab, journey at
    /// onboarding, no pending timers.
    pub fn logout(&mut self) {
        if self.auth.is_logged_in() {
            info!("logged out");
        }
        self.auth = AuthState::LoggedOut;
        self.tab = Tab::Home;
        self.journey.reset();
        self.cancel_analysis();
        self.scheduler.clear();
        self.reset_flows();
    }

    fn cancel_analysis(&mut self) {
        if let Some(task) = self.analysis_task.take() {
            if self.scheduler.cancel(task) {
                debug!("report analysis cancelled");
            }
        }
    }

    fn navigate(&mut self, tab: Tab) {
        let before = self.screen();
        self.tab = tab;
        let after = self.screen();
        if before != after {
            debug!(%tab, from = %before, to = %after, "navigate");
            self.leave(before);
        }
    }

    fn apply_scene(&mut self, scene: DemoScene) {
        let plan = scene.plan();
        info!(%scene, "demo scene");
        self.cancel_analysis();
        self.scheduler.clear();
        self.reset_flows();
        self.auth = match plan.session {
            Some(session) => AuthState::LoggedIn(session),
            None => AuthState::LoggedOut,
        };
        if let Some(step) = plan.journey {
            self.journey.jump_to(step);
        }
        self.tab = plan.tab;
    }

    /// Unmount the flow of a screen that is no longer shown.
    fn leave(&mut self, screen: Screen) {
        let Some(owner) = Owner::of(screen) else {
            return;
        };
        match owner {
            Owner::Login => self.login = LoginFlow::default(),
            Owner::Home => self.home = HomeFlow::default(),
            Owner::Records => self.records = RecordsFlow::default(),
            Owner::Scanner => self.scanner = ScannerFlow::default(),
            Owner::Workbench => self.workbench = WorkbenchFlow::default(),
            Owner::Consultation => self.consultation = ConsultationFlow::default(),
            Owner::FamilyHome => self.family = FamilyFlow::default(),
        }
        let cancelled = self
            .scheduler
            .cancel_where(|timer| timer.owner() == Some(owner));
        if cancelled > 0 {
            debug!(?owner, cancelled, "cancelled screen timers");
        }
    }

    fn reset_flows(&mut self) {
        self.login = LoginFlow::default();
        self.home = HomeFlow::default();
        self.records = RecordsFlow::default();
        self.scanner = ScannerFlow::default();
        self.workbench = WorkbenchFlow::default();
        self.consultation = ConsultationFlow::default();
        self.family = FamilyFlow::default();
    }

    fn fire(&mut self, event: JourneyEvent) -> bool {
        match self.journey.fire(event) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "journey event ignored");
                false
            }
        }
    }

    fn on_timer(&mut self, timer: Timer) {
        match timer {
            Timer::LoginProcessed => {
                if let Some(session) = self.login.finish_processing() {
                    self.login(session);
                }
            }
            Timer::AnalysisFinished => {
                self.analysis_task = None;
                self.fire(JourneyEvent::AnalysisFinished);
            }
            Timer::TransferFinished => {
                self.records.finish_transfer();
            }
            Timer::ScanDetected => {
                self.scanner.detect();
            }
            Timer::FamilyBooked => {
                self.family.booking_confirmed();
            }
        }
    }

    fn on_login(&mut self, action: LoginAction) {
        let flow = &mut self.login;
        let session = match action {
            LoginAction::ToggleAgreement => {
                flow.toggle_agreement();
                None
            }
            LoginAction::Agree => {
                flow.agree();
                None
            }
            LoginAction::SelectPortal(portal) => {
                flow.select_portal(portal);
                None
            }
            LoginAction::ToggleRegion => {
                flow.toggle_region();
                None
            }
            LoginAction::SelectRole(role) => {
                flow.select_role(role);
                None
            }
            LoginAction::WorkId(work_id) => {
                flow.set_work_id(work_id);
                None
            }
            LoginAction::Password(password) => {
                flow.set_password(password);
                None
            }
            LoginAction::SelectDoctorType(kind) => {
                flow.select_doctor_type(kind);
                None
            }
            LoginAction::SubmitPublic(method) => {
                if flow.submit_public(method) {
                    self.scheduler.schedule(LOGIN_PROCESSING, Timer::LoginProcessed);
                }
                None
            }
            LoginAction::SubmitMedical => {
                if flow.submit_medical() {
                    self.scheduler.schedule(LOGIN_PROCESSING, Timer::LoginProcessed);
                }
                None
            }
            LoginAction::FileRecord => flow.file_record(),
            LoginAction::JustLook => flow.just_look(),
        };
        if let Some(session) = session {
            self.login(session);
        }
    }

    fn on_home(&mut self, action: HomeAction) {
        let step = self.journey.step();
        match action {
            HomeAction::BindIdentity => {
                self.fire(JourneyEvent::BindIdentity);
            }
            HomeAction::OpenBooking => {
                self.home.open_booking(step);
            }
            HomeAction::CloseBooking => self.home.close_booking(),
            HomeAction::ConfirmBooking => {
                if self.home.confirm_booking() {
                    self.fire(JourneyEvent::ConfirmBooking);
                }
            }
            HomeAction::CompleteCheckup => {
                self.fire(JourneyEvent::CompleteCheckup);
            }
            HomeAction::Pay => {
                if self.fire(JourneyEvent::Pay) {
                    let task = self
                        .scheduler
                        .schedule(REPORT_ANALYSIS, Timer::AnalysisFinished);
                    self.analysis_task = Some(task);
                }
            }
            HomeAction::AcceptCarePlan => {
                self.fire(JourneyEvent::AcceptCarePlan);
            }
        }
    }

    fn on_records(&mut self, action: RecordsAction) {
        match action {
            RecordsAction::Select(id) => {
                if !self.records.select(&id) {
                    debug!(%id, "unknown record");
                }
            }
            RecordsAction::Back => self.records.back(),
            RecordsAction::RequestAnalysis => {
                if let Some(record) = self.records.request_analysis() {
                    debug!(record = %record.id, "explanation requested");
                }
            }
            RecordsAction::AnalysisReady(text) => {
                self.records.analysis_ready(text);
            }
            RecordsAction::StartTransfer => {
                self.records.start_transfer();
            }
            RecordsAction::CancelTransfer => self.records.cancel_transfer(),
            RecordsAction::ConfirmTransfer => {
                if self.records.confirm_transfer() {
                    self.scheduler
                        .schedule(RECORD_TRANSFER, Timer::TransferFinished);
                }
            }
            RecordsAction::AcknowledgeTransfer => {
                // Only the patient's own records screen continues the pathway.
                if self.records.acknowledge_transfer()
                    && self.auth.persona() == Some(Persona::Patient)
                {
                    self.navigate(Tab::Home);
                    self.fire(JourneyEvent::AcceptCarePlan);
                }
            }
        }
    }

    fn on_scanner(&mut self, action: ScannerAction) {
        match action {
            ScannerAction::Start => {
                if self.scanner.start() {
                    self.scheduler.schedule(SCAN_DETECTION, Timer::ScanDetected);
                }
            }
            ScannerAction::Confirm => {
                self.scanner.confirm();
            }
            ScannerAction::Back => self.scanner.back(),
            ScannerAction::Next => self.scanner.next(),
        }
    }

    fn on_workbench(&mut self, action: WorkbenchAction) {
        match action {
            WorkbenchAction::OpenTask(id) => {
                let task = carepath_fixtures::doctor_tasks()
                    .into_iter()
                    .find(|task| task.id == id);
                match task {
                    Some(task) => {
                        self.workbench.open_task(&task);
                    }
                    None => debug!(%id, "unknown task"),
                }
            }
            WorkbenchAction::AcceptReferral => {
                self.workbench.accept_referral();
            }
            WorkbenchAction::CloseReferral => self.workbench.close_referral(),
            WorkbenchAction::SelectPatient(id) => {
                self.workbench.select_patient(&id);
            }
            WorkbenchAction::ClosePatient => self.workbench.close_patient(),
        }
    }

    fn on_consultation(&mut self, action: ConsultationAction) {
        match action {
            ConsultationAction::Select(id) => {
                self.consultation.select(&id);
            }
            ConsultationAction::SelectTab(tab) => self.consultation.select_tab(tab),
            ConsultationAction::Sign => {
                self.consultation.sign();
            }
            ConsultationAction::Next => self.consultation.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::{LoginStep, ScanState, TransferStep};
    use carepath_model::LoginRegion;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn patient_at(step: JourneyStep) -> AppStore {
        let mut store = AppStore::new();
        store.dispatch(Action::Tour(DemoScene::Onboarding));
        store.journey.jump_to(step);
        store
    }

    #[test]
    fn public_login_completes_after_processing() {
        let mut store = AppStore::new();
        store.dispatch(Action::Login(LoginAction::ToggleAgreement));
        store.dispatch(Action::Login(LoginAction::Agree));
        store.dispatch(Action::Login(LoginAction::SubmitPublic(AuthMethod::Wechat)));
        assert_eq!(store.login_flow().step(), LoginStep::Processing);
        assert_eq!(store.screen(), Screen::Login);

        store.advance(ms(1499));
        assert_eq!(store.screen(), Screen::Login);
        store.advance(ms(1));
        assert_eq!(store.screen(), Screen::PatientHome);
        assert_eq!(store.auth().auth_method(), Some(AuthMethod::Wechat));
        // The login flow was unmounted with the login screen.
        assert_eq!(store.login_flow().step(), LoginStep::Splash);
    }

    #[test]
    fn out_of_region_visitor() {
        let mut store = AppStore::new();
        for action in [
            LoginAction::ToggleAgreement,
            LoginAction::Agree,
            LoginAction::ToggleRegion,
            LoginAction::SelectRole(Role::Family),
            LoginAction::SubmitPublic(AuthMethod::Alipay),
        ] {
            store.dispatch(Action::Login(action));
        }
        store.advance(LOGIN_PROCESSING);
        assert_eq!(store.login_flow().step(), LoginStep::RegionWarning);
        let screen = store.dispatch(Action::Login(LoginAction::JustLook));
        assert_eq!(
            screen,
            Screen::Family {
                page: FamilyPage::Home
            }
        );
        assert!(store.auth().is_visitor());
        assert_eq!(store.auth().user_type(), LoginRegion::NonShanghai);
    }

    #[test]
    fn doctor_login_lands_on_workbench() {
        let mut store = AppStore::new();
        for action in [
            LoginAction::ToggleAgreement,
            LoginAction::Agree,
            LoginAction::SelectPortal(Portal::Medical),
            LoginAction::WorkId("D-1024".into()),
            LoginAction::Password("secret".into()),
            LoginAction::SelectDoctorType(DoctorType::Specialist),
            LoginAction::SubmitMedical,
        ] {
            store.dispatch(Action::Login(action));
        }
        store.advance(LOGIN_PROCESSING);
        assert_eq!(store.tab(), Tab::Workbench);
        assert_eq!(
            store.auth().persona(),
            Some(Persona::Doctor(DoctorType::Specialist))
        );
    }

    #[test]
    fn actions_for_hidden_screens_are_ignored() {
        let mut store = patient_at(JourneyStep::PaymentPending);
        store.dispatch(Action::Navigate(Tab::Plan));
        store.dispatch(Action::Home(HomeAction::Pay));
        assert_eq!(store.journey_step(), JourneyStep::PaymentPending);
        assert_eq!(store.pending_timers(), 0);
    }

    #[test]
    fn leaving_records_cancels_transfer() {
        let mut store = patient_at(JourneyStep::ReportReady);
        store.dispatch(Action::Navigate(Tab::Records));
        store.dispatch(Action::Records(RecordsAction::Select("rec1".into())));
        store.dispatch(Action::Records(RecordsAction::StartTransfer));
        store.dispatch(Action::Records(RecordsAction::ConfirmTransfer));
        assert_eq!(store.pending_timers(), 1);

        store.dispatch(Action::Navigate(Tab::Plan));
        assert_eq!(store.pending_timers(), 0);
        store.dispatch(Action::Navigate(Tab::Records));
        assert_eq!(store.records_flow().transfer(), TransferStep::Idle);
        assert!(store.records_flow().selected().is_none());
    }

    #[test]
    fn analysis_timer_survives_navigation() {
        let mut store = patient_at(JourneyStep::PaymentPending);
        store.dispatch(Action::Home(HomeAction::Pay));
        store.dispatch(Action::Navigate(Tab::Records));
        store.advance(REPORT_ANALYSIS);
        assert_eq!(store.journey_step(), JourneyStep::ReportReady);
    }

    #[test]
    fn scanner_detects_after_delay() {
        let mut store = AppStore::new();
        store.dispatch(Action::Tour(DemoScene::Community));
        store.dispatch(Action::Navigate(Tab::Scanner));
        store.dispatch(Action::Scanner(ScannerAction::Start));
        store.advance(ms(999));
        assert_eq!(store.scanner_flow().state(), ScanState::Scanning);
        store.advance(ms(1));
        assert_eq!(store.scanner_flow().state(), ScanState::Detected);
    }
}
