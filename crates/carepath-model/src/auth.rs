//! Authentication state.
//!
//! The prototype kept a flat record with optional fields (`doctorType` only
//! meaningful for doctors, `authMethod` absent when logged out). Here the
//! shape is tagged instead: a doctor sub-type only exists on a doctor
//! persona, and a logged-out state carries nothing at all. Accessors give
//! back the flat view for callers that want it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{AuthMethod, DoctorType, LoginRegion, Role};

/// Who is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", content = "doctor_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Persona {
    Patient,
    Family,
    Doctor(DoctorType),
}

impl Persona {
    /// Every persona the demo can sign in as.
    pub const ALL: [Persona; 4] = [
        Persona::Patient,
        Persona::Family,
        Persona::Doctor(DoctorType::Community),
        Persona::Doctor(DoctorType::Specialist),
    ];

    pub fn role(&self) -> Role {
        match self {
            Persona::Patient => Role::Patient,
            Persona::Family => Role::Family,
            Persona::Doctor(_) => Role::Doctor,
        }
    }

    pub fn doctor_type(&self) -> Option<DoctorType> {
        match self {
            Persona::Doctor(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persona::Doctor(kind) => write!(f, "DOCTOR/{kind}"),
            other => write!(f, "{}", other.role()),
        }
    }
}

/// An established login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub region: LoginRegion,
    pub method: AuthMethod,
    pub persona: Persona,
    /// Browsing without completing the out-of-region filing.
    pub visitor: bool,
}

impl Session {
    pub fn new(region: LoginRegion, method: AuthMethod, persona: Persona) -> Self {
        Self {
            region,
            method,
            persona,
            visitor: false,
        }
    }

    #[must_use]
    pub fn as_visitor(mut self, visitor: bool) -> Self {
        self.visitor = visitor;
        self
    }
}

/// Authentication state owned by the application store.
///
/// Created on login and replaced wholesale on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthState {
    #[default]
    LoggedOut,
    LoggedIn(Session),
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthState::LoggedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::LoggedIn(session) => Some(session),
            AuthState::LoggedOut => None,
        }
    }

    pub fn persona(&self) -> Option<Persona> {
        self.session().map(|session| session.persona)
    }

    /// Insurance region; `Shanghai` when logged out.
    pub fn user_type(&self) -> LoginRegion {
        self.session()
            .map(|session| session.region)
            .unwrap_or_default()
    }

    /// Role; `Patient` when logged out.
    pub fn role(&self) -> Role {
        self.persona().map(|persona| persona.role()).unwrap_or_default()
    }

    pub fn auth_method(&self) -> Option<AuthMethod> {
        self.session().map(|session| session.method)
    }

    pub fn is_visitor(&self) -> bool {
        self.session().is_some_and(|session| session.visitor)
    }

    pub fn doctor_type(&self) -> Option<DoctorType> {
        self.persona().and_then(|persona| persona.doctor_type())
    }
}
