//! Doctor-facing demo records: profiles, task lists and patient queues.

use serde::{Deserialize, Serialize};

use crate::enums::DoctorType;

/// Headline numbers on a doctor's profile; the two doctor types track
/// different things.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoctorStats {
    Community {
        total_patients: u32,
        referral_rate: String,
        consultation_time: String,
        mdt_joined: u32,
    },
    Specialist {
        total_consults: u32,
        success_rate: String,
        student_count: u32,
        mdt_led: u32,
    },
}

impl DoctorStats {
    pub fn doctor_type(&self) -> DoctorType {
        match self {
            DoctorStats::Community { .. } => DoctorType::Community,
            DoctorStats::Specialist { .. } => DoctorType::Specialist,
        }
    }

    /// (label, value) pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        match self {
            DoctorStats::Community {
                total_patients,
                referral_rate,
                consultation_time,
                mdt_joined,
            } => vec![
                ("签约患者", total_patients.to_string()),
                ("转诊率", referral_rate.clone()),
                ("平均接诊", consultation_time.clone()),
                ("参与MDT", mdt_joined.to_string()),
            ],
            DoctorStats::Specialist {
                total_consults,
                success_rate,
                student_count,
                mdt_led,
            } => vec![
                ("远程会诊", total_consults.to_string()),
                ("确诊率", success_rate.clone()),
                ("带教学生", student_count.to_string()),
                ("主持MDT", mdt_led.to_string()),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub hospital: String,
    pub department: String,
    pub rating: f32,
    pub stats: DoctorStats,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    Appointment,
    TransferReview,
    Message,
    Consultation,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Appointment => "预约",
            TaskKind::TransferReview => "转诊审核",
            TaskKind::Message => "咨询",
            TaskKind::Consultation => "会诊",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorTask {
    pub id: String,
    pub kind: TaskKind,
    pub patient_name: String,
    pub description: String,
    pub time: String,
    pub urgent: bool,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "男")]
    Male,
    #[serde(rename = "女")]
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    Waiting,
    InProgress,
    Completed,
}

impl QueueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "候诊中",
            QueueStatus::InProgress => "就诊中",
            QueueStatus::Completed => "已完成",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "高危预警",
            RiskLevel::Medium | RiskLevel::Low => "待诊断",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabStatus {
    Normal,
    High,
    Low,
    Critical,
}

impl LabStatus {
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, LabStatus::Normal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabResult {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub range: String,
    pub status: LabStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageModality {
    Ct,
    #[serde(rename = "X-RAY")]
    XRay,
    Mri,
    Ultrasound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalImage {
    pub id: String,
    pub modality: ImageModality,
    pub url: String,
    pub date: String,
    pub description: String,
}

/// Data a community clinic uploaded with an up-referral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedData {
    pub blood_sugar: String,
    pub symptoms: Vec<String>,
    pub preliminary_check: String,
    pub lab_results: Vec<LabResult>,
    pub images: Vec<MedicalImage>,
    pub history_trend: Vec<f64>,
}

/// Specialist-side details of a referred patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralCase {
    pub diagnosis_pending: bool,
    pub risk_level: RiskLevel,
    pub community_hospital: String,
    pub uploaded: UploadedData,
}

/// How a patient ended up in a doctor's queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueueKind {
    WalkIn,
    Referral(ReferralCase),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuePatient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub status: QueueStatus,
    pub wait_time: String,
    pub visit_type: String,
    pub chief_complaint: String,
    pub allergies: Vec<String>,
    pub last_visit: String,
    pub queue: QueueKind,
}

impl QueuePatient {
    pub fn referral(&self) -> Option<&ReferralCase> {
        match &self.queue {
            QueueKind::Referral(case) => Some(case),
            QueueKind::WalkIn => None,
        }
    }
}
