//! Data model for the carepath demo tour.
//!
//! Value types only: who is signed in, which tab is selected, how far the
//! demo patient has progressed, which screen to mount, and the shapes of
//! the mock clinical records shown on those screens.

pub mod auth;
pub mod clinic;
pub mod enums;
pub mod error;
pub mod journey;
pub mod records;
pub mod screen;
pub mod tab;

pub use auth::{AuthState, Persona, Session};
pub use clinic::{
    DoctorProfile, DoctorStats, DoctorTask, Gender, ImageModality, LabResult, LabStatus,
    MedicalImage, QueueKind, QueuePatient, QueueStatus, ReferralCase, RiskLevel, TaskKind,
    TaskStatus, UploadedData,
};
pub use enums::{AuthMethod, DoctorType, LoginRegion, Role};
pub use error::{IllegalTransition, ModelError, ParseEnumError, Result};
pub use journey::{JourneyEvent, JourneyStep};
pub use records::{
    Appointment, HealthArticle, Hospital, HospitalType, MedicalRecord, RecordStatus, Reminder,
    ReminderKind, ReminderStatus, TransferStatus, Trend, UserProfile, VitalKind, VitalSign,
    VitalStatus,
};
pub use screen::{DoctorPage, FamilyPage, Screen};
pub use tab::Tab;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_transition_message() {
        let err = IllegalTransition {
            from: JourneyStep::Onboarding,
            event: JourneyEvent::Pay,
        };
        assert_eq!(
            err.to_string(),
            "journey event PAY is not allowed from step ONBOARDING"
        );
        let wrapped: ModelError = err.into();
        assert!(matches!(wrapped, ModelError::Transition(_)));
    }

    #[test]
    fn auth_state_serializes() {
        let auth = AuthState::LoggedIn(Session::new(
            LoginRegion::Shanghai,
            AuthMethod::WorkId,
            Persona::Doctor(DoctorType::Community),
        ));
        let json = serde_json::to_string(&auth).expect("serialize auth");
        let round: AuthState = serde_json::from_str(&json).expect("deserialize auth");
        assert_eq!(round, auth);
    }
}
