//! Records screen: record detail, AI explanation and the one-click
//! hand-down to the community clinic.

use carepath_model::{MedicalRecord, TransferStatus};

/// AI explanation of the selected record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    #[default]
    Idle,
    Pending,
    Ready(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferStep {
    #[default]
    Idle,
    /// Confirmation sheet naming the receiving clinic.
    Confirming,
    Transferring,
    Done,
}

#[derive(Debug, Clone, Default)]
pub struct RecordsFlow {
    selected: Option<MedicalRecord>,
    analysis: AnalysisState,
    transfer: TransferStep,
}

impl RecordsFlow {
    pub fn selected(&self) -> Option<&MedicalRecord> {
        self.selected.as_ref()
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn transfer(&self) -> TransferStep {
        self.transfer
    }

    /// Open a record's detail view. Unknown ids leave the list showing.
    pub fn select(&mut self, id: &str) -> bool {
        match carepath_fixtures::medical_record(id) {
            Some(record) => {
                *self = Self {
                    selected: Some(record),
                    ..Self::default()
                };
                true
            }
            None => false,
        }
    }

    /// Back to the list; drops analysis and transfer progress.
    pub fn back(&mut self) {
        *self = Self::default();
    }

    /// Start an explanation request for the selected record. Returns the
    /// record the caller should send to the summarizer.
    ///
    /// A second request while one is pending is not refused.
    pub fn request_analysis(&mut self) -> Option<MedicalRecord> {
        let record = self.selected.clone()?;
        self.analysis = AnalysisState::Pending;
        Some(record)
    }

    /// Deliver summarizer text; ignored unless a request is pending.
    pub fn analysis_ready(&mut self, text: String) -> bool {
        if self.analysis == AnalysisState::Pending {
            self.analysis = AnalysisState::Ready(text);
            return true;
        }
        false
    }

    /// The hand-down action is offered for records not yet transferred.
    pub fn can_transfer(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|record| record.transfer_status != TransferStatus::Completed)
            && self.transfer == TransferStep::Idle
    }

    pub fn start_transfer(&mut self) -> bool {
        if self.can_transfer() {
            self.transfer = TransferStep::Confirming;
            return true;
        }
        false
    }

    pub fn cancel_transfer(&mut self) {
        if self.transfer == TransferStep::Confirming {
            self.transfer = TransferStep::Idle;
        }
    }

    /// Confirm the hand-down. Returns true when the caller should schedule
    /// the transfer delay.
    pub fn confirm_transfer(&mut self) -> bool {
        if self.transfer == TransferStep::Confirming {
            self.transfer = TransferStep::Transferring;
            return true;
        }
        false
    }

    pub fn finish_transfer(&mut self) -> bool {
        if self.transfer == TransferStep::Transferring {
            self.transfer = TransferStep::Done;
            return true;
        }
        false
    }

    /// Close the success sheet. Returns true when the transfer had
    /// completed, so the caller can move the patient on.
    pub fn acknowledge_transfer(&mut self) -> bool {
        if self.transfer == TransferStep::Done {
            self.back();
            return true;
        }
        false
    }
}
