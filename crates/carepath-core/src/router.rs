//! Role/Tab router and bottom navigation.
//!
//! `route` is total: every (auth, tab) pair maps to exactly one screen.
//! Tabs a role cannot show fall back to that role's default screen; there
//! is no error path.

use carepath_model::{AuthState, DoctorPage, DoctorType, FamilyPage, Persona, Screen, Tab};

pub fn route(auth: &AuthState, tab: Tab) -> Screen {
    match auth.persona() {
        None => Screen::Login,
        Some(Persona::Doctor(kind)) => Screen::Doctor {
            kind,
            page: match tab {
                Tab::Scanner => DoctorPage::Scanner,
                Tab::DoctorProfile => DoctorPage::Profile,
                _ => DoctorPage::Workbench,
            },
        },
        Some(Persona::Family) => match tab {
            Tab::FamilyProfile => Screen::Family {
                page: FamilyPage::Profile,
            },
            Tab::Records => Screen::Records,
            Tab::Plan => Screen::Plan,
            _ => Screen::Family {
                page: FamilyPage::Home,
            },
        },
        Some(Persona::Patient) => match tab {
            Tab::Records => Screen::Records,
            Tab::Pass => Screen::Pass,
            Tab::Plan => Screen::Plan,
            Tab::Profile => Screen::Profile,
            _ => Screen::PatientHome,
        },
    }
}

/// Tab selected right after login.
pub fn landing_tab(persona: Persona) -> Tab {
    match persona {
        Persona::Patient => Tab::Home,
        Persona::Family => Tab::FamilyHome,
        Persona::Doctor(_) => Tab::Workbench,
    }
}

/// Colour scheme of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTheme {
    /// Patient and family: stone with lime accents.
    Lime,
    /// Community doctor.
    Orange,
    /// Specialist.
    Indigo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub tab: Tab,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub theme: NavTheme,
    pub items: Vec<NavItem>,
    /// Centre floating button, when the role has one.
    pub floating: Option<NavItem>,
}

impl NavBar {
    pub fn is_active(&self, item: &NavItem, active: Tab) -> bool {
        item.tab == active
    }
}

const fn item(tab: Tab, label: &'static str) -> NavItem {
    NavItem { tab, label }
}

/// Navigation for the signed-in persona; `None` on the login screen.
pub fn nav_bar(auth: &AuthState) -> Option<NavBar> {
    let bar = match auth.persona()? {
        Persona::Doctor(kind) => NavBar {
            theme: match kind {
                DoctorType::Community => NavTheme::Orange,
                DoctorType::Specialist => NavTheme::Indigo,
            },
            items: vec![
                item(Tab::Workbench, "工作台"),
                item(
                    Tab::Scanner,
                    match kind {
                        DoctorType::Community => "扫码执行",
                        DoctorType::Specialist => "远程会诊",
                    },
                ),
                item(Tab::DoctorProfile, "我的"),
            ],
            floating: match kind {
                DoctorType::Community => Some(item(Tab::Scanner, "扫码执行")),
                DoctorType::Specialist => None,
            },
        },
        Persona::Family => NavBar {
            theme: NavTheme::Lime,
            items: vec![
                item(Tab::FamilyHome, "关怀首页"),
                item(Tab::Records, "家人档案"),
                item(Tab::Plan, "日历"),
                item(Tab::FamilyProfile, "我的"),
            ],
            floating: None,
        },
        Persona::Patient => NavBar {
            theme: NavTheme::Lime,
            items: vec![
                item(Tab::Home, "首页"),
                item(Tab::Records, "档案"),
                item(Tab::Plan, "计划"),
                item(Tab::Profile, "我的"),
            ],
            floating: Some(item(Tab::Pass, "就诊凭证")),
        },
    };
    Some(bar)
}
