//! Digital queue ticket.

use carepath_model::{Appointment, JourneyStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    /// General checkup with record upload, before the report arrives.
    Checkup,
    /// Injection appointment from the care plan.
    Treatment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassTicket {
    pub kind: TicketKind,
    pub title: String,
    pub department: String,
    pub hospital: String,
    pub location: String,
    pub date: String,
    pub time_slot: String,
    pub queue_number: String,
}

pub fn pass_ticket(step: JourneyStep, appointment: &Appointment) -> PassTicket {
    let checkup = matches!(
        step,
        JourneyStep::CheckupBooked | JourneyStep::PaymentPending | JourneyStep::Analyzing
    );
    let (kind, title, department) = if checkup {
        (TicketKind::Checkup, "常规检查 + 档案上传", "全科门诊")
    } else {
        (
            TicketKind::Treatment,
            appointment.project.as_str(),
            appointment.department.as_str(),
        )
    };
    PassTicket {
        kind,
        title: title.to_string(),
        department: department.to_string(),
        hospital: appointment.hospital_name.clone(),
        location: format!("{} {}", appointment.floor, appointment.room),
        date: appointment.date.clone(),
        time_slot: appointment.time_slot.clone(),
        queue_number: appointment.queue_number.clone(),
    }
}
