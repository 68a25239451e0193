//! Type-safe enumerations for the demo's user categories.
//!
//! The prototype passes these around as upper snake case strings
//! (`"PATIENT"`, `"WORK_ID"`); serde and `FromStr` keep that spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseEnumError, normalize_token};

/// Top-level user category controlling which screen set is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Patient,
    Family,
    Doctor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Family, Role::Doctor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "PATIENT",
            Role::Family => "FAMILY",
            Role::Doctor => "DOCTOR",
        }
    }

    /// Display label used on the login screen.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "患者本人",
            Role::Family => "家属代办",
            Role::Doctor => "医护人员",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "PATIENT" => Ok(Role::Patient),
            "FAMILY" => Ok(Role::Family),
            "DOCTOR" => Ok(Role::Doctor),
            _ => Err(ParseEnumError::new("role", s)),
        }
    }
}

/// Sub-classification of the doctor role.
///
/// Community doctors execute treatment plans at the neighbourhood clinic;
/// specialists at the Grade 3A hospital review referrals and sign
/// joint-diagnosis opinions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoctorType {
    Community,
    Specialist,
}

impl DoctorType {
    pub const ALL: [DoctorType; 2] = [DoctorType::Community, DoctorType::Specialist];

    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorType::Community => "COMMUNITY",
            DoctorType::Specialist => "SPECIALIST",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DoctorType::Community => "社区医生",
            DoctorType::Specialist => "三甲专家",
        }
    }
}

impl fmt::Display for DoctorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DoctorType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "COMMUNITY" => Ok(DoctorType::Community),
            "SPECIALIST" => Ok(DoctorType::Specialist),
            _ => Err(ParseEnumError::new("doctor type", s)),
        }
    }
}

/// Where the user's medical insurance is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginRegion {
    #[default]
    Shanghai,
    NonShanghai,
}

impl LoginRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginRegion::Shanghai => "SHANGHAI",
            LoginRegion::NonShanghai => "NON_SHANGHAI",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginRegion::Shanghai => "上海",
            LoginRegion::NonShanghai => "外地",
        }
    }

    /// The other region; the login form exposes a toggle between the two.
    pub fn toggled(&self) -> Self {
        match self {
            LoginRegion::Shanghai => LoginRegion::NonShanghai,
            LoginRegion::NonShanghai => LoginRegion::Shanghai,
        }
    }
}

impl fmt::Display for LoginRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LoginRegion {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "SHANGHAI" => Ok(LoginRegion::Shanghai),
            "NON_SHANGHAI" | "NONSHANGHAI" => Ok(LoginRegion::NonShanghai),
            _ => Err(ParseEnumError::new("login region", s)),
        }
    }
}

/// Credential used to sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMethod {
    Medicare,
    Wechat,
    Alipay,
    IdCard,
    WorkId,
}

impl AuthMethod {
    pub const ALL: [AuthMethod; 5] = [
        AuthMethod::Medicare,
        AuthMethod::Wechat,
        AuthMethod::Alipay,
        AuthMethod::IdCard,
        AuthMethod::WorkId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Medicare => "MEDICARE",
            AuthMethod::Wechat => "WECHAT",
            AuthMethod::Alipay => "ALIPAY",
            AuthMethod::IdCard => "ID_CARD",
            AuthMethod::WorkId => "WORK_ID",
        }
    }

    /// Methods offered on the public (patient/family) portal.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            AuthMethod::Medicare | AuthMethod::Wechat | AuthMethod::Alipay
        )
    }

    /// Payment badge shown on the profile screen, if the method carries one.
    pub fn payment_badge(&self) -> Option<&'static str> {
        match self {
            AuthMethod::Wechat => Some("微信支付已免密"),
            AuthMethod::Alipay => Some("支付宝已绑定"),
            _ => None,
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "MEDICARE" => Ok(AuthMethod::Medicare),
            "WECHAT" => Ok(AuthMethod::Wechat),
            "ALIPAY" => Ok(AuthMethod::Alipay),
            "ID_CARD" | "IDCARD" => Ok(AuthMethod::IdCard),
            "WORK_ID" | "WORKID" => Ok(AuthMethod::WorkId),
            _ => Err(ParseEnumError::new("auth method", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_accepts_dashes() {
        assert_eq!("doctor".parse::<Role>().unwrap(), Role::Doctor);
        assert_eq!(" Specialist ".parse::<DoctorType>().unwrap(), DoctorType::Specialist);
        assert_eq!("non-shanghai".parse::<LoginRegion>().unwrap(), LoginRegion::NonShanghai);
        assert_eq!("work-id".parse::<AuthMethod>().unwrap(), AuthMethod::WorkId);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "nurse".parse::<Role>().unwrap_err();
        assert_eq!(err.kind, "role");
        assert_eq!(err.to_string(), "unknown role: 'nurse'");
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for method in AuthMethod::ALL {
            assert_eq!(method.as_str().parse::<AuthMethod>().unwrap(), method);
        }
    }

    #[test]
    fn payment_badge_only_for_wallet_logins() {
        assert!(AuthMethod::Wechat.payment_badge().is_some());
        assert!(AuthMethod::Alipay.payment_badge().is_some());
        assert!(AuthMethod::Medicare.payment_badge().is_none());
        assert!(!AuthMethod::WorkId.is_public());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&AuthMethod::IdCard).unwrap();
        assert_eq!(json, "\"ID_CARD\"");
        let region: LoginRegion = serde_json::from_str("\"NON_SHANGHAI\"").unwrap();
        assert_eq!(region, LoginRegion::NonShanghai);
    }
}
