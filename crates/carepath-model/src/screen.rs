//! Screen identifiers produced by the router.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::DoctorType;

/// Sub-screens of the doctor workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorPage {
    Workbench,
    /// Injection scanner (community) or remote consultation (specialist).
    Scanner,
    Profile,
}

impl DoctorPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorPage::Workbench => "workbench",
            DoctorPage::Scanner => "scanner",
            DoctorPage::Profile => "profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyPage {
    Home,
    Profile,
}

impl FamilyPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyPage::Home => "home",
            FamilyPage::Profile => "profile",
        }
    }
}

/// The top-level screen to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Login,
    PatientHome,
    Records,
    Pass,
    Plan,
    Profile,
    Doctor { kind: DoctorType, page: DoctorPage },
    Family { page: FamilyPage },
}

impl Screen {
    /// Title shown in the screen header.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "登录",
            Screen::PatientHome => "首页",
            Screen::Records => "我的档案",
            Screen::Pass => "我的就诊凭证",
            Screen::Plan => "健康日历",
            Screen::Profile => "个人中心",
            Screen::Doctor {
                kind: DoctorType::Community,
                page: DoctorPage::Workbench,
            } => "社区工作台",
            Screen::Doctor {
                kind: DoctorType::Specialist,
                page: DoctorPage::Workbench,
            } => "专家数字诊室",
            Screen::Doctor {
                kind: DoctorType::Community,
                page: DoctorPage::Scanner,
            } => "扫码执行",
            Screen::Doctor {
                kind: DoctorType::Specialist,
                page: DoctorPage::Scanner,
            } => "远程会诊",
            Screen::Doctor {
                page: DoctorPage::Profile,
                ..
            } => "医生主页",
            Screen::Family {
                page: FamilyPage::Home,
            } => "家属关怀模式",
            Screen::Family {
                page: FamilyPage::Profile,
            } => "家属中心",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Login => write!(f, "login"),
            Screen::PatientHome => write!(f, "patient/home"),
            Screen::Records => write!(f, "records"),
            Screen::Pass => write!(f, "patient/pass"),
            Screen::Plan => write!(f, "plan"),
            Screen::Profile => write!(f, "patient/profile"),
            Screen::Doctor { kind, page } => write!(
                f,
                "doctor/{}/{}",
                kind.as_str().to_lowercase(),
                page.as_str()
            ),
            Screen::Family { page } => write!(f, "family/{}", page.as_str()),
        }
    }
}
