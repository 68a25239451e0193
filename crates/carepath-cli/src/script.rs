//! Play scripts: whitespace-separated steps applied to a fresh store.
//!
//! | step                     | effect                                     |
//! |--------------------------|--------------------------------------------|
//! | `scene:N`                | jump to demo scene N                       |
//! | `tab:NAME`               | select a tab (`records`, `doctor-profile`) |
//! | `login:WHO[:METHOD]`     | full login for patient/family/community/specialist |
//! | `agree` `region` `file` `look` | individual login screen steps        |
//! | `bind` `book` `close` `confirm` `checkup` `pay` `accept` | home screen |
//! | `record:ID` `back` `explain` `recommend` `transfer` `cancel` `ack` | records |
//! | `scan` `scan:confirm` `scan:back` `scan:next` | community scanner     |
//! | `task:ID` `patient:ID` `referral:accept` `referral:close` | community workbench |
//! | `consult:ID` `consult-tab:TAB` `sign` `next-patient` | specialist room  |
//! | `remote-book`            | family remote booking                      |
//! | `wait:MS`                | advance the virtual clock                  |
//! | `logout`                 | log out                                    |

use std::str::FromStr;
use std::time::Duration;

use carepath_ai::Summarizer;
use carepath_core::flows::{AnalysisState, ConsultTab, LoginStep, Portal, SpecialistView};
use carepath_core::schedule::LOGIN_PROCESSING;
use carepath_core::{
    Action, AppStore, ConsultationAction, DemoScene, FamilyAction, HomeAction, LoginAction,
    RecordsAction, ScannerAction, WorkbenchAction,
};
use carepath_model::{AuthMethod, DoctorType, Persona, Screen, Tab};
use thiserror::Error;
use tracing::{debug, info};

use crate::logging::redact_value;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown step '{0}'")]
    UnknownStep(String),

    #[error("step '{step}': invalid argument '{value}'")]
    BadArgument { step: String, value: String },

    #[error("step '{0}' needs an argument")]
    MissingArgument(String),
}

/// Result type alias for script parsing.
pub type Result<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Actions dispatched in order.
    Dispatch(Vec<Action>),
    /// Full login through the login screen, including the processing delay.
    Login { persona: Persona, method: AuthMethod },
    Wait(Duration),
    /// Ask the summarizer to explain the open record.
    Explain,
    /// Ask the summarizer for a community clinic for the open record.
    Recommend,
}

impl Step {
    fn one(action: Action) -> Self {
        Step::Dispatch(vec![action])
    }
}

fn bad(step: &str, value: &str) -> ScriptError {
    ScriptError::BadArgument {
        step: step.to_string(),
        value: value.to_string(),
    }
}

fn need<'a>(step: &str, arg: Option<&'a str>) -> Result<&'a str> {
    arg.filter(|value| !value.is_empty())
        .ok_or_else(|| ScriptError::MissingArgument(step.to_string()))
}

fn parse_consult_tab(value: &str) -> Option<ConsultTab> {
    match value.to_ascii_lowercase().as_str() {
        "overview" => Some(ConsultTab::Overview),
        "labs" => Some(ConsultTab::Labs),
        "images" => Some(ConsultTab::Images),
        "mdt" => Some(ConsultTab::Mdt),
        _ => None,
    }
}

fn parse_login(value: &str) -> Result<Step> {
    let (who, method) = match value.split_once(':') {
        Some((who, method)) => (who, Some(method)),
        None => (value, None),
    };
    let persona = match who.to_ascii_lowercase().as_str() {
        "patient" => Persona::Patient,
        "family" => Persona::Family,
        "community" => Persona::Doctor(DoctorType::Community),
        "specialist" => Persona::Doctor(DoctorType::Specialist),
        _ => return Err(bad("login", who)),
    };
    let method = match (persona, method) {
        (Persona::Doctor(_), None) => AuthMethod::WorkId,
        (Persona::Doctor(_), Some(other)) => return Err(bad("login", other)),
        (_, None) => AuthMethod::Medicare,
        (_, Some(raw)) => {
            let method = AuthMethod::from_str(raw).map_err(|_| bad("login", raw))?;
            if !method.is_public() {
                return Err(bad("login", raw));
            }
            method
        }
    };
    Ok(Step::Login { persona, method })
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(raw: &str) -> Result<Self> {
        let token = raw.trim();
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };
        let step = match (name, arg) {
            ("scene", arg) => {
                let value = need(name, arg)?;
                let scene = DemoScene::from_str(value).map_err(|_| bad(name, value))?;
                Step::one(Action::Tour(scene))
            }
            ("tab", arg) => {
                let value = need(name, arg)?;
                let tab = Tab::from_str(value).map_err(|_| bad(name, value))?;
                Step::one(Action::Navigate(tab))
            }
            ("login", arg) => parse_login(need(name, arg)?)?,
            ("wait", arg) => {
                let value = need(name, arg)?;
                let ms: u64 = value.parse().map_err(|_| bad(name, value))?;
                Step::Wait(Duration::from_millis(ms))
            }
            ("logout", None) => Step::one(Action::Logout),

            ("agree", None) => Step::Dispatch(vec![
                Action::Login(LoginAction::ToggleAgreement),
                Action::Login(LoginAction::Agree),
            ]),
            ("region", None) => Step::one(Action::Login(LoginAction::ToggleRegion)),
            ("file", None) => Step::one(Action::Login(LoginAction::FileRecord)),
            ("look", None) => Step::one(Action::Login(LoginAction::JustLook)),

            ("bind", None) => Step::one(Action::Home(HomeAction::BindIdentity)),
            ("book", None) => Step::one(Action::Home(HomeAction::OpenBooking)),
            ("close", None) => Step::one(Action::Home(HomeAction::CloseBooking)),
            ("confirm", None) => Step::one(Action::Home(HomeAction::ConfirmBooking)),
            ("checkup", None) => Step::one(Action::Home(HomeAction::CompleteCheckup)),
            ("pay", None) => Step::one(Action::Home(HomeAction::Pay)),
            ("accept", None) => Step::one(Action::Home(HomeAction::AcceptCarePlan)),

            ("record", arg) => Step::one(Action::Records(RecordsAction::Select(
                need(name, arg)?.to_string(),
            ))),
            ("back", None) => Step::one(Action::Records(RecordsAction::Back)),
            ("explain", None) => Step::Explain,
            ("recommend", None) => Step::Recommend,
            ("transfer", None) => Step::Dispatch(vec![
                Action::Records(RecordsAction::StartTransfer),
                Action::Records(RecordsAction::ConfirmTransfer),
            ]),
            ("cancel", None) => Step::one(Action::Records(RecordsAction::CancelTransfer)),
            ("ack", None) => Step::one(Action::Records(RecordsAction::AcknowledgeTransfer)),

            ("scan", None) => Step::one(Action::Scanner(ScannerAction::Start)),
            ("scan", Some("confirm")) => Step::one(Action::Scanner(ScannerAction::Confirm)),
            ("scan", Some("back")) => Step::one(Action::Scanner(ScannerAction::Back)),
            ("scan", Some("next")) => Step::one(Action::Scanner(ScannerAction::Next)),
            ("scan", Some(other)) => return Err(bad(name, other)),

            ("task", arg) => Step::one(Action::Workbench(WorkbenchAction::OpenTask(
                need(name, arg)?.to_string(),
            ))),
            ("patient", arg) => Step::one(Action::Workbench(WorkbenchAction::SelectPatient(
                need(name, arg)?.to_string(),
            ))),
            ("referral", Some("accept")) => {
                Step::one(Action::Workbench(WorkbenchAction::AcceptReferral))
            }
            ("referral", Some("close")) => {
                Step::one(Action::Workbench(WorkbenchAction::CloseReferral))
            }
            ("referral", Some(other)) => return Err(bad(name, other)),

            ("consult", arg) => Step::one(Action::Consultation(ConsultationAction::Select(
                need(name, arg)?.to_string(),
            ))),
            ("consult-tab", arg) => {
                let value = need(name, arg)?;
                let tab = parse_consult_tab(value).ok_or_else(|| bad(name, value))?;
                Step::one(Action::Consultation(ConsultationAction::SelectTab(tab)))
            }
            ("sign", None) => Step::one(Action::Consultation(ConsultationAction::Sign)),
            ("next-patient", None) => Step::one(Action::Consultation(ConsultationAction::Next)),

            ("remote-book", None) => Step::one(Action::Family(FamilyAction::RemoteBook)),

            _ => return Err(ScriptError::UnknownStep(token.to_string())),
        };
        Ok(step)
    }
}

/// Parse every step, stopping at the first bad one.
pub fn parse_script<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Step>> {
    steps.iter().map(|step| step.as_ref().parse()).collect()
}

/// Login-form actions for signing in as `persona`.
pub fn login_actions(persona: Persona, method: AuthMethod) -> Vec<Action> {
    match persona {
        Persona::Doctor(kind) => vec![
            Action::Login(LoginAction::SelectPortal(Portal::Medical)),
            Action::Login(LoginAction::WorkId("8801".to_string())),
            Action::Login(LoginAction::Password("demo".to_string())),
            Action::Login(LoginAction::SelectDoctorType(kind)),
            Action::Login(LoginAction::SubmitMedical),
        ],
        Persona::Patient | Persona::Family => vec![
            Action::Login(LoginAction::SelectPortal(Portal::Public)),
            Action::Login(LoginAction::SelectRole(persona.role())),
            Action::Login(LoginAction::SubmitPublic(method)),
        ],
    }
}

/// Runs steps against a store, using the summarizer for record steps.
#[derive(Debug)]
pub struct Player<'a> {
    store: AppStore,
    summarizer: &'a Summarizer,
}

impl<'a> Player<'a> {
    pub fn new(summarizer: &'a Summarizer) -> Self {
        Self {
            store: AppStore::new(),
            summarizer,
        }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Apply one step. Returns summarizer text the step produced, if any.
    pub fn apply(&mut self, step: &Step) -> Option<String> {
        match step {
            Step::Dispatch(actions) => {
                for action in actions {
                    self.store.dispatch(action.clone());
                    self.log_opened_patient(action);
                }
                None
            }
            Step::Login { persona, method } => {
                if self.store.screen() != Screen::Login {
                    debug!("already logged in, logging out first");
                    self.store.dispatch(Action::Logout);
                }
                let flow = self.store.login_flow();
                if flow.step() == LoginStep::Splash {
                    if !flow.agreed() {
                        self.store
                            .dispatch(Action::Login(LoginAction::ToggleAgreement));
                    }
                    self.store.dispatch(Action::Login(LoginAction::Agree));
                }
                for action in login_actions(*persona, *method) {
                    self.store.dispatch(action);
                }
                self.store.advance(LOGIN_PROCESSING);
                None
            }
            Step::Wait(by) => {
                let fired = self.store.advance(*by);
                debug!(?fired, "waited {}ms", by.as_millis());
                None
            }
            Step::Explain => self.explain(),
            Step::Recommend => {
                let record = self.store.records_flow().selected()?.clone();
                info!(record = %record.id, "recommending clinic");
                Some(
                    self.summarizer
                        .recommend_hospital(&record, &carepath_fixtures::hospitals()),
                )
            }
        }
    }

    fn log_opened_patient(&self, action: &Action) {
        let patient = match action {
            Action::Workbench(WorkbenchAction::SelectPatient(_)) => {
                self.store.workbench_flow().selected_patient()
            }
            Action::Consultation(ConsultationAction::Select(_)) => {
                match self.store.consultation_flow().view() {
                    SpecialistView::Detail { patient, .. } => Some(patient),
                    SpecialistView::List => None,
                }
            }
            _ => None,
        };
        if let Some(patient) = patient {
            info!(
                patient = %patient.id,
                name = redact_value(&patient.name),
                "patient opened"
            );
        }
    }

    fn explain(&mut self) -> Option<String> {
        self.store
            .dispatch(Action::Records(RecordsAction::RequestAnalysis));
        if *self.store.records_flow().analysis() != AnalysisState::Pending {
            return None;
        }
        let record = self.store.records_flow().selected()?.clone();
        info!(
            record = %record.id,
            diagnosis = redact_value(&record.diagnosis),
            "explaining record"
        );
        let text = self.summarizer.explain_record(&record);
        self.store
            .dispatch(Action::Records(RecordsAction::AnalysisReady(text.clone())));
        Some(text)
    }
}
