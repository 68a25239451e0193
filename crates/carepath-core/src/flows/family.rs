//! Family caregiver home: remote booking on the patient's behalf.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FamilyBooking {
    #[default]
    Idle,
    Booking,
    Success,
}

#[derive(Debug, Clone, Default)]
pub struct FamilyFlow {
    booking: FamilyBooking,
}

impl FamilyFlow {
    pub fn booking(&self) -> FamilyBooking {
        self.booking
    }

    /// Book the injection for the patient; returns true when the caller
    /// should schedule the booking delay.
    pub fn remote_book(&mut self) -> bool {
        if self.booking == FamilyBooking::Idle {
            self.booking = FamilyBooking::Booking;
            return true;
        }
        false
    }

    pub fn booking_confirmed(&mut self) -> bool {
        if self.booking == FamilyBooking::Booking {
            self.booking = FamilyBooking::Success;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_runs_once() {
        let mut flow = FamilyFlow::default();
        assert!(!flow.booking_confirmed());
        assert!(flow.remote_book());
        assert!(!flow.remote_book());
        assert!(flow.booking_confirmed());
        assert_eq!(flow.booking(), FamilyBooking::Success);
    }
}
