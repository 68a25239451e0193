//! Login screen flow.
//!
//! Splash (privacy agreement) → login form → processing → either completed
//! or, for out-of-region public logins, a region warning that still lets
//! the user in (filed, or as a visitor).

use carepath_model::{AuthMethod, DoctorType, LoginRegion, Persona, Role, Session};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStep {
    #[default]
    Splash,
    LoginForm,
    Processing,
    RegionWarning,
    Completed,
}

/// Which half of the login form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Portal {
    /// Patients and family members.
    #[default]
    Public,
    /// Doctors, with work id and password.
    Medical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Public { method: AuthMethod, role: Role },
    Medical { kind: DoctorType },
}

#[derive(Debug, Clone, Default)]
pub struct LoginFlow {
    step: LoginStep,
    portal: Portal,
    region: LoginRegion,
    role: Role,
    agreed: bool,
    work_id: String,
    password: String,
    doctor_type: Option<DoctorType>,
    pending: Option<Pending>,
}

impl LoginFlow {
    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn portal(&self) -> Portal {
        self.portal
    }

    /// Simulated insurance region used by the public portal check.
    pub fn region(&self) -> LoginRegion {
        self.region
    }

    /// Role chosen on the public portal (patient or family).
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn agreed(&self) -> bool {
        self.agreed
    }

    pub fn doctor_type(&self) -> Option<DoctorType> {
        self.doctor_type
    }

    pub fn toggle_agreement(&mut self) {
        self.agreed = !self.agreed;
    }

    /// Leave the splash screen; only possible once the agreement is ticked.
    pub fn agree(&mut self) -> bool {
        if self.step == LoginStep::Splash && self.agreed {
            self.step = LoginStep::LoginForm;
            return true;
        }
        false
    }

    pub fn select_portal(&mut self, portal: Portal) {
        self.portal = portal;
    }

    pub fn toggle_region(&mut self) {
        self.region = self.region.toggled();
    }

    /// Pick patient or family on the public portal. Doctors use the medical
    /// portal, so `Role::Doctor` is ignored here.
    pub fn select_role(&mut self, role: Role) {
        if role != Role::Doctor {
            self.role = role;
        }
    }

    pub fn set_work_id(&mut self, work_id: impl Into<String>) {
        self.work_id = work_id.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn select_doctor_type(&mut self, kind: DoctorType) {
        self.doctor_type = Some(kind);
    }

    /// Start a public-portal login. Returns true when processing started
    /// and the caller should schedule the processing delay.
    pub fn submit_public(&mut self, method: AuthMethod) -> bool {
        if self.step != LoginStep::LoginForm || !method.is_public() {
            return false;
        }
        self.portal = Portal::Public;
        self.pending = Some(Pending::Public {
            method,
            role: self.role,
        });
        self.step = LoginStep::Processing;
        true
    }

    /// Start a medical-portal login; needs work id, password and doctor type.
    pub fn submit_medical(&mut self) -> bool {
        if self.step != LoginStep::LoginForm
            || self.work_id.trim().is_empty()
            || self.password.is_empty()
        {
            return false;
        }
        let Some(kind) = self.doctor_type else {
            return false;
        };
        self.portal = Portal::Medical;
        self.pending = Some(Pending::Medical { kind });
        self.step = LoginStep::Processing;
        true
    }

    /// Processing delay elapsed. Returns the session when login completes
    /// directly; out-of-region public logins stop at the region warning.
    pub fn finish_processing(&mut self) -> Option<Session> {
        if self.step != LoginStep::Processing {
            return None;
        }
        match self.pending? {
            Pending::Medical { kind } => {
                self.step = LoginStep::Completed;
                Some(Session::new(
                    LoginRegion::Shanghai,
                    AuthMethod::WorkId,
                    Persona::Doctor(kind),
                ))
            }
            Pending::Public { method, role } => match self.region {
                LoginRegion::Shanghai => {
                    self.step = LoginStep::Completed;
                    Some(Session::new(LoginRegion::Shanghai, method, public_persona(role)))
                }
                LoginRegion::NonShanghai => {
                    debug!(%method, "out-of-region insurance, showing warning");
                    self.step = LoginStep::RegionWarning;
                    None
                }
            },
        }
    }

    /// Region warning: go file the out-of-region record, then continue.
    pub fn file_record(&mut self) -> Option<Session> {
        self.leave_region_warning(false)
    }

    /// Region warning: just look around as a visitor.
    pub fn just_look(&mut self) -> Option<Session> {
        self.leave_region_warning(true)
    }

    fn leave_region_warning(&mut self, visitor: bool) -> Option<Session> {
        if self.step != LoginStep::RegionWarning {
            return None;
        }
        let Some(Pending::Public { method, role }) = self.pending else {
            return None;
        };
        self.step = LoginStep::Completed;
        Some(
            Session::new(LoginRegion::NonShanghai, method, public_persona(role))
                .as_visitor(visitor),
        )
    }
}

fn public_persona(role: Role) -> Persona {
    match role {
        Role::Family => Persona::Family,
        Role::Patient | Role::Doctor => Persona::Patient,
    }
}
