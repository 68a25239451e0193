//! Demo tour: six numbered scenes that jump straight to a point in the
//! story, skipping every guard on the way.

use std::fmt;
use std::str::FromStr;

use carepath_model::{AuthMethod, DoctorType, JourneyStep, LoginRegion, Persona, Session, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoScene {
    Login,
    Onboarding,
    Report,
    Specialist,
    Community,
    Family,
}

impl DemoScene {
    pub const ALL: [DemoScene; 6] = [
        DemoScene::Login,
        DemoScene::Onboarding,
        DemoScene::Report,
        DemoScene::Specialist,
        DemoScene::Community,
        DemoScene::Family,
    ];

    /// 1-based scene number shown on the tour buttons.
    pub fn number(&self) -> u8 {
        match self {
            DemoScene::Login => 1,
            DemoScene::Onboarding => 2,
            DemoScene::Report => 3,
            DemoScene::Specialist => 4,
            DemoScene::Community => 5,
            DemoScene::Family => 6,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|scene| scene.number() == number)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemoScene::Login => "登录",
            DemoScene::Onboarding => "引导",
            DemoScene::Report => "报告",
            DemoScene::Specialist => "专家",
            DemoScene::Community => "社区",
            DemoScene::Family => "家属",
        }
    }

    /// State the store takes on when the scene is applied.
    pub fn plan(&self) -> ScenePlan {
        let patient = || {
            Session::new(
                LoginRegion::Shanghai,
                AuthMethod::Medicare,
                Persona::Patient,
            )
        };
        let doctor = |kind| {
            Session::new(
                LoginRegion::Shanghai,
                AuthMethod::WorkId,
                Persona::Doctor(kind),
            )
        };
        match self {
            DemoScene::Login => ScenePlan {
                session: None,
                journey: Some(JourneyStep::Onboarding),
                tab: Tab::Home,
            },
            DemoScene::Onboarding => ScenePlan {
                session: Some(patient()),
                journey: Some(JourneyStep::Onboarding),
                tab: Tab::Home,
            },
            DemoScene::Report => ScenePlan {
                session: Some(patient()),
                journey: Some(JourneyStep::ReportReady),
                tab: Tab::Home,
            },
            DemoScene::Specialist => ScenePlan {
                session: Some(doctor(DoctorType::Specialist)),
                journey: None,
                tab: Tab::Workbench,
            },
            DemoScene::Community => ScenePlan {
                session: Some(doctor(DoctorType::Community)),
                journey: None,
                tab: Tab::Workbench,
            },
            DemoScene::Family => ScenePlan {
                session: Some(Session::new(
                    LoginRegion::Shanghai,
                    AuthMethod::Wechat,
                    Persona::Family,
                )),
                journey: None,
                tab: Tab::FamilyHome,
            },
        }
    }
}

impl fmt::Display for DemoScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown demo scene '{0}' (expected 1-6)")]
pub struct UnknownScene(pub String);

impl FromStr for DemoScene {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(scene) = trimmed.parse::<u8>().ok().and_then(Self::from_number) {
            return Ok(scene);
        }
        Self::ALL
            .into_iter()
            .find(|scene| {
                scene.label() == trimmed || format!("{scene:?}").eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}

/// Session, journey step and tab a scene forces. A `None` session means
/// logged out; a `None` journey leaves the step as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePlan {
    pub session: Option<Session>,
    pub journey: Option<JourneyStep>,
    pub tab: Tab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for scene in DemoScene::ALL {
            assert_eq!(DemoScene::from_number(scene.number()), Some(scene));
        }
        assert_eq!(DemoScene::from_number(0), None);
        assert_eq!(DemoScene::from_number(7), None);
    }

    #[test]
    fn parses_number_label_and_name() {
        assert_eq!("3".parse::<DemoScene>().unwrap(), DemoScene::Report);
        assert_eq!("家属".parse::<DemoScene>().unwrap(), DemoScene::Family);
        assert_eq!("specialist".parse::<DemoScene>().unwrap(), DemoScene::Specialist);
        assert!("9".parse::<DemoScene>().is_err());
    }

    #[test]
    fn report_scene_is_patient_at_report_ready() {
        let plan = DemoScene::Report.plan();
        let session = plan.session.unwrap();
        assert_eq!(session.persona, Persona::Patient);
        assert_eq!(session.method, AuthMethod::Medicare);
        assert_eq!(plan.journey, Some(JourneyStep::ReportReady));
        assert_eq!(plan.tab, Tab::Home);
    }

    #[test]
    fn doctor_scenes_use_work_id() {
        for (scene, kind) in [
            (DemoScene::Specialist, DoctorType::Specialist),
            (DemoScene::Community, DoctorType::Community),
        ] {
            let plan = scene.plan();
            let session = plan.session.unwrap();
            assert_eq!(session.persona, Persona::Doctor(kind));
            assert_eq!(session.method, AuthMethod::WorkId);
            assert_eq!(plan.tab, Tab::Workbench);
        }
    }
}
