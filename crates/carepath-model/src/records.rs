//! Patient-facing demo records.
//!
//! These are fixtures, not system state: read-only reference data with no
//! uniqueness or referential constraints checked at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub location: String,
    pub linked_family_members: Vec<String>,
    pub medicare_balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card_last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Active,
    Archived,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "治疗中",
            RecordStatus::Archived => "已归档",
        }
    }
}

/// Progress of handing a record down to a community clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    #[default]
    None,
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub diagnosis: String,
    pub diagnosis_date: String,
    /// Originating Grade 3A hospital.
    pub hospital_name: String,
    pub doctor_name: String,
    pub prescription: Vec<String>,
    pub treatment_plan: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub transfer_status: TransferStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HospitalType {
    Community,
    #[serde(rename = "GRADE_3A")]
    Grade3A,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub kind: HospitalType,
    pub distance: String,
    pub address: String,
    pub tags: Vec<String>,
    pub rating: f32,
    pub available_services: Vec<String>,
    pub waiting_time: String,
    #[serde(default)]
    pub is_recommended: bool,
}

impl Hospital {
    pub fn is_community(&self) -> bool {
        self.kind == HospitalType::Community
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub hospital_name: String,
    pub department: String,
    pub floor: String,
    pub room: String,
    pub date: String,
    pub time_slot: String,
    pub project: String,
    pub status: String,
    pub queue_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderKind {
    Medication,
    Appointment,
    Treatment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderStatus {
    Pending,
    Booked,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub kind: ReminderKind,
    pub title: String,
    pub time: String,
    pub detail: String,
    pub status: ReminderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VitalKind {
    Sugar,
    Pressure,
    HeartRate,
}

impl VitalKind {
    pub fn label(&self) -> &'static str {
        match self {
            VitalKind::Sugar => "血糖",
            VitalKind::Pressure => "血压",
            VitalKind::HeartRate => "心率",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VitalStatus {
    Normal,
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSign {
    pub kind: VitalKind,
    pub value: String,
    pub unit: String,
    pub status: VitalStatus,
    pub trend: Trend,
    pub last_measured: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthArticle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub read_count: u32,
}
