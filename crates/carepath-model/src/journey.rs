//! Journey steps of the scripted care pathway.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseEnumError, normalize_token};

/// How far the demo patient has progressed through the care pathway.
///
/// Declaration order is pathway order, so `Ord` compares progress.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JourneyStep {
    /// New user, needs to bind a medical record.
    #[default]
    Onboarding,
    /// Fresh home screen, no tasks yet.
    HomeDefault,
    /// Initial checkup booked.
    CheckupBooked,
    /// Checkup done, waiting for payment.
    PaymentPending,
    /// Paid, waiting for the Grade 3A hospital result.
    Analyzing,
    /// Joint-diagnosis report arrived.
    ReportReady,
    /// Care plan accepted; regular treatment reminders.
    TreatmentActive,
}

impl JourneyStep {
    pub const ALL: [JourneyStep; 7] = [
        JourneyStep::Onboarding,
        JourneyStep::HomeDefault,
        JourneyStep::CheckupBooked,
        JourneyStep::PaymentPending,
        JourneyStep::Analyzing,
        JourneyStep::ReportReady,
        JourneyStep::TreatmentActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyStep::Onboarding => "ONBOARDING",
            JourneyStep::HomeDefault => "HOME_DEFAULT",
            JourneyStep::CheckupBooked => "CHECKUP_BOOKED",
            JourneyStep::PaymentPending => "PAYMENT_PENDING",
            JourneyStep::Analyzing => "ANALYZING",
            JourneyStep::ReportReady => "REPORT_READY",
            JourneyStep::TreatmentActive => "TREATMENT_ACTIVE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JourneyStep::Onboarding => "绑定档案",
            JourneyStep::HomeDefault => "首页",
            JourneyStep::CheckupBooked => "已预约检查",
            JourneyStep::PaymentPending => "待支付",
            JourneyStep::Analyzing => "专家分析中",
            JourneyStep::ReportReady => "报告已出",
            JourneyStep::TreatmentActive => "治疗进行中",
        }
    }

    /// 0-based position in the pathway.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether the patient has had a first visit; unlocks the
    /// prescription-renewal and follow-up shortcuts on the home screen.
    pub fn has_first_visit(&self) -> bool {
        !matches!(self, JourneyStep::Onboarding | JourneyStep::HomeDefault)
    }
}

impl fmt::Display for JourneyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JourneyStep {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        JourneyStep::ALL
            .into_iter()
            .find(|step| step.as_str() == token)
            .ok_or_else(|| ParseEnumError::new("journey step", s))
    }
}

/// A user-triggered request to move the journey forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JourneyEvent {
    /// Simulated identity binding completed.
    BindIdentity,
    /// Booking dialog confirmed.
    ConfirmBooking,
    /// Checkup performed; the bill is issued.
    CompleteCheckup,
    /// Simulated payment.
    Pay,
    /// Scripted analysis delay elapsed.
    AnalysisFinished,
    /// Proposed care plan accepted.
    AcceptCarePlan,
}

impl JourneyEvent {
    pub const ALL: [JourneyEvent; 6] = [
        JourneyEvent::BindIdentity,
        JourneyEvent::ConfirmBooking,
        JourneyEvent::CompleteCheckup,
        JourneyEvent::Pay,
        JourneyEvent::AnalysisFinished,
        JourneyEvent::AcceptCarePlan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyEvent::BindIdentity => "BIND_IDENTITY",
            JourneyEvent::ConfirmBooking => "CONFIRM_BOOKING",
            JourneyEvent::CompleteCheckup => "COMPLETE_CHECKUP",
            JourneyEvent::Pay => "PAY",
            JourneyEvent::AnalysisFinished => "ANALYSIS_FINISHED",
            JourneyEvent::AcceptCarePlan => "ACCEPT_CARE_PLAN",
        }
    }
}

impl fmt::Display for JourneyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_ordered_by_pathway() {
        let mut sorted = JourneyStep::ALL;
        sorted.sort();
        assert_eq!(sorted, JourneyStep::ALL);
        assert!(JourneyStep::Onboarding < JourneyStep::TreatmentActive);
        assert_eq!(JourneyStep::ReportReady.index(), 5);
    }

    #[test]
    fn first_visit_starts_at_checkup_booked() {
        assert!(!JourneyStep::Onboarding.has_first_visit());
        assert!(!JourneyStep::HomeDefault.has_first_visit());
        assert!(JourneyStep::CheckupBooked.has_first_visit());
        assert!(JourneyStep::TreatmentActive.has_first_visit());
    }

    #[test]
    fn parse_step_names() {
        assert_eq!(
            "report-ready".parse::<JourneyStep>().unwrap(),
            JourneyStep::ReportReady
        );
        assert!("discharged".parse::<JourneyStep>().is_err());
    }
}
