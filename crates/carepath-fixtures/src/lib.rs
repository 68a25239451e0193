//! Demo reference data.
//!
//! Every function builds a fresh copy of the fixture; nothing here is
//! shared mutable state. Values mirror the scripted Pujiang scenario: a
//! 70-year-old diabetes patient handed down from Ruijin Hospital to the
//! Pujiang community health centre.

mod clinicians;
mod patients;

pub use clinicians::{
    community_doctor, doctor_profile, doctor_tasks, specialist_doctor, specialist_referral,
    specialist_referrals, waiting_queue,
};
pub use patients::{
    appointment, articles, community_hospitals, family_profile, hospitals, medical_record,
    medical_records, patient_profile, reminders, vitals,
};

pub(crate) fn text(value: &str) -> String {
    value.to_string()
}

pub(crate) fn texts(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
