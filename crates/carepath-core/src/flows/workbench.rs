//! Community doctor workbench: patient 360 view and the referral review
//! sheet for records handed down from the specialist hospital.

use carepath_model::{DoctorTask, QueuePatient, TaskKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralStep {
    /// Reviewing the down-referral plan.
    Review,
    /// Accepted and filed at the community clinic.
    Accepted,
}

#[derive(Debug, Clone, Default)]
pub struct WorkbenchFlow {
    referral: Option<ReferralStep>,
    selected_patient: Option<QueuePatient>,
}

impl WorkbenchFlow {
    /// Current step of the referral sheet; `None` when it is closed.
    pub fn referral(&self) -> Option<ReferralStep> {
        self.referral
    }

    pub fn selected_patient(&self) -> Option<&QueuePatient> {
        self.selected_patient.as_ref()
    }

    /// Open a task. Transfer reviews open the referral sheet.
    pub fn open_task(&mut self, task: &DoctorTask) -> bool {
        if task.kind == TaskKind::TransferReview {
            self.referral = Some(ReferralStep::Review);
            return true;
        }
        false
    }

    pub fn accept_referral(&mut self) -> bool {
        if self.referral == Some(ReferralStep::Review) {
            self.referral = Some(ReferralStep::Accepted);
            return true;
        }
        false
    }

    pub fn close_referral(&mut self) {
        self.referral = None;
    }

    /// Show the 360 view of a queued patient.
    pub fn select_patient(&mut self, id: &str) -> bool {
        self.selected_patient = carepath_fixtures::waiting_queue()
            .into_iter()
            .find(|patient| patient.id == id);
        self.selected_patient.is_some()
    }

    pub fn close_patient(&mut self) {
        self.selected_patient = None;
    }
}
