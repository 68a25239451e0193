//! Journey sequencer.
//!
//! A single shared step value read by several screens. It only moves
//! forward through the transition table below, except for `reset` (logout)
//! and `jump_to` (demo tour), which bypass every guard.

use carepath_model::{IllegalTransition, JourneyEvent, JourneyStep};
use tracing::debug;

/// The legal forward moves as (from, event, to).
const TRANSITIONS: [(JourneyStep, JourneyEvent, JourneyStep); 6] = [
    (
        JourneyStep::Onboarding,
        JourneyEvent::BindIdentity,
        JourneyStep::HomeDefault,
    ),
    (
        JourneyStep::HomeDefault,
        JourneyEvent::ConfirmBooking,
        JourneyStep::CheckupBooked,
    ),
    (
        JourneyStep::CheckupBooked,
        JourneyEvent::CompleteCheckup,
        JourneyStep::PaymentPending,
    ),
    (
        JourneyStep::PaymentPending,
        JourneyEvent::Pay,
        JourneyStep::Analyzing,
    ),
    (
        JourneyStep::Analyzing,
        JourneyEvent::AnalysisFinished,
        JourneyStep::ReportReady,
    ),
    (
        JourneyStep::ReportReady,
        JourneyEvent::AcceptCarePlan,
        JourneyStep::TreatmentActive,
    ),
];

/// All legal transitions, in pathway order.
pub fn transitions() -> &'static [(JourneyStep, JourneyEvent, JourneyStep)] {
    &TRANSITIONS
}

/// Where `event` leads from `from`, if anywhere.
pub fn next_step(from: JourneyStep, event: JourneyEvent) -> Option<JourneyStep> {
    TRANSITIONS
        .iter()
        .find(|(source, trigger, _)| *source == from && *trigger == event)
        .map(|(_, _, target)| *target)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneySequencer {
    step: JourneyStep,
}

impl JourneySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> JourneyStep {
        self.step
    }

    /// Apply a user-triggered event. On rejection the step is unchanged.
    pub fn fire(&mut self, event: JourneyEvent) -> Result<JourneyStep, IllegalTransition> {
        let from = self.step;
        let to = next_step(from, event).ok_or(IllegalTransition { from, event })?;
        debug!(%from, %event, %to, "journey transition");
        self.step = to;
        Ok(to)
    }

    /// Demo-tour escape hatch: set the step directly.
    pub fn jump_to(&mut self, step: JourneyStep) {
        debug!(from = %self.step, to = %step, "journey jump");
        self.step = step;
    }

    /// Back to `Onboarding`.
    pub fn reset(&mut self) {
        self.step = JourneyStep::Onboarding;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_treatment() {
        let mut journey = JourneySequencer::new();
        for event in JourneyEvent::ALL {
            journey.fire(event).expect("scripted path is legal");
        }
        assert_eq!(journey.step(), JourneyStep::TreatmentActive);
    }

    #[test]
    fn out_of_order_event_is_rejected_without_change() {
        let mut journey = JourneySequencer::new();
        let err = journey.fire(JourneyEvent::Pay).unwrap_err();
        assert_eq!(err.from, JourneyStep::Onboarding);
        assert_eq!(err.event, JourneyEvent::Pay);
        assert_eq!(journey.step(), JourneyStep::Onboarding);
    }

    #[test]
    fn terminal_step_accepts_nothing() {
        let mut journey = JourneySequencer::new();
        journey.jump_to(JourneyStep::TreatmentActive);
        for event in JourneyEvent::ALL {
            assert!(journey.fire(event).is_err());
        }
    }

    #[test]
    fn jump_and_reset_bypass_the_table() {
        let mut journey = JourneySequencer::new();
        journey.jump_to(JourneyStep::ReportReady);
        assert_eq!(journey.step(), JourneyStep::ReportReady);
        journey.jump_to(JourneyStep::HomeDefault);
        assert_eq!(journey.step(), JourneyStep::HomeDefault);
        journey.reset();
        assert_eq!(journey.step(), JourneyStep::Onboarding);
    }

    #[test]
    fn table_moves_exactly_one_step_forward() {
        for (from, _, to) in transitions() {
            assert_eq!(to.index(), from.index() + 1);
        }
    }
}
