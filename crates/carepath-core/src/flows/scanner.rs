//! Community doctor's injection scanner.

use carepath_model::QueuePatient;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Detected,
    Confirmed,
}

#[derive(Debug, Clone, Default)]
pub struct ScannerFlow {
    state: ScanState,
}

impl ScannerFlow {
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Patient whose code was read: the injection appointment in today's queue.
    pub fn detected_patient(&self) -> Option<QueuePatient> {
        if !matches!(self.state, ScanState::Detected | ScanState::Confirmed) {
            return None;
        }
        carepath_fixtures::waiting_queue()
            .into_iter()
            .find(|patient| patient.id == "q2")
    }

    /// Start scanning; returns true when the caller should schedule detection.
    pub fn start(&mut self) -> bool {
        if self.state == ScanState::Idle {
            self.state = ScanState::Scanning;
            return true;
        }
        false
    }

    pub fn detect(&mut self) -> bool {
        if self.state == ScanState::Scanning {
            self.state = ScanState::Detected;
            return true;
        }
        false
    }

    pub fn confirm(&mut self) -> bool {
        if self.state == ScanState::Detected {
            self.state = ScanState::Confirmed;
            return true;
        }
        false
    }

    /// Back out of a detected code.
    pub fn back(&mut self) {
        if self.state == ScanState::Detected {
            self.state = ScanState::Idle;
        }
    }

    /// "Next patient" after a confirmed injection.
    pub fn next(&mut self) {
        if self.state == ScanState::Confirmed {
            self.state = ScanState::Idle;
        }
    }
}
