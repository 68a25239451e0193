//! Carepath core: role router, journey sequencer, virtual-time scheduler,
//! screen flows and the application store that ties them together.

pub mod flows;
pub mod journey;
pub mod router;
pub mod schedule;
pub mod store;
pub mod tour;

pub use journey::{JourneySequencer, next_step, transitions};
pub use router::{NavBar, NavItem, NavTheme, landing_tab, nav_bar, route};
pub use schedule::{Scheduler, TaskId};
pub use store::{
    Action, AppStore, ConsultationAction, FamilyAction, HomeAction, LoginAction, RecordsAction,
    ScannerAction, Timer, WorkbenchAction,
};
pub use tour::{DemoScene, ScenePlan, UnknownScene};
