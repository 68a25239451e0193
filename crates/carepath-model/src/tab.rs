//! Bottom-navigation tabs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseEnumError, normalize_token};

/// A tab selection. Which tabs a user can actually reach depends on the
/// role; the router falls back to the role's default screen for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tab {
    #[default]
    Home,
    Records,
    /// Digital queue ticket.
    Pass,
    Plan,
    Profile,
    Workbench,
    Scanner,
    DoctorProfile,
    FamilyHome,
    FamilyProfile,
}

impl Tab {
    pub const ALL: [Tab; 10] = [
        Tab::Home,
        Tab::Records,
        Tab::Pass,
        Tab::Plan,
        Tab::Profile,
        Tab::Workbench,
        Tab::Scanner,
        Tab::DoctorProfile,
        Tab::FamilyHome,
        Tab::FamilyProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "HOME",
            Tab::Records => "RECORDS",
            Tab::Pass => "PASS",
            Tab::Plan => "PLAN",
            Tab::Profile => "PROFILE",
            Tab::Workbench => "WORKBENCH",
            Tab::Scanner => "SCANNER",
            Tab::DoctorProfile => "DOCTOR_PROFILE",
            Tab::FamilyHome => "FAMILY_HOME",
            Tab::FamilyProfile => "FAMILY_PROFILE",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == token)
            .ok_or_else(|| ParseEnumError::new("tab", s))
    }
}
