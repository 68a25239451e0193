//! Screen-local state machines.
//!
//! Each flow is owned by the store and only lives while its screen is
//! mounted: leaving the screen resets it. Flows never touch the journey or
//! the scheduler themselves; operations that need a delay or a journey
//! event report it back to the store through their return value.

pub mod consultation;
pub mod family;
pub mod home;
pub mod login;
pub mod pass;
pub mod plan;
pub mod profile;
pub mod records;
pub mod scanner;
pub mod workbench;

pub use consultation::{ConsultTab, ConsultationFlow, DiagnosisStep, SpecialistView};
pub use family::{FamilyBooking, FamilyFlow};
pub use home::{HomeBanner, HomeFlow, HomeView, home_view};
pub use login::{LoginFlow, LoginStep, Portal};
pub use pass::{PassTicket, TicketKind, pass_ticket};
pub use plan::{PlanDay, week_strip};
pub use profile::{ProfileView, profile_view};
pub use records::{AnalysisState, RecordsFlow, TransferStep};
pub use scanner::{ScanState, ScannerFlow};
pub use workbench::{ReferralStep, WorkbenchFlow};
