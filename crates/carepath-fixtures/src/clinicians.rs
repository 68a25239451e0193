use carepath_model::{
    DoctorProfile, DoctorStats, DoctorTask, DoctorType, Gender, ImageModality, LabResult,
    LabStatus, MedicalImage, QueueKind, QueuePatient, QueueStatus, ReferralCase, RiskLevel,
    TaskKind, TaskStatus, UploadedData,
};

use crate::{text, texts};

pub fn community_doctor() -> DoctorProfile {
    DoctorProfile {
        id: text("DOC_202488"),
        name: text("李清泉"),
        title: text("全科主任医师"),
        hospital: text("浦江社区卫生服务中心"),
        department: text("全科门诊"),
        rating: 4.9,
        stats: DoctorStats::Community {
            total_patients: 1240,
            referral_rate: text("92%"),
            consultation_time: text("8.5min"),
            mdt_joined: 12,
        },
        tags: texts(&["上海市优秀全科医生", "糖尿病管理专家"]),
    }
}

pub fn specialist_doctor() -> DoctorProfile {
    DoctorProfile {
        id: text("SP_99201"),
        name: text("刘晓静"),
        title: text("内分泌科 主任医师"),
        hospital: text("上海交通大学医学院附属瑞金医院"),
        department: text("内分泌与代谢科"),
        rating: 5.0,
        stats: DoctorStats::Specialist {
            total_consults: 856,
            success_rate: text("98.5%"),
            student_count: 15,
            mdt_led: 42,
        },
        tags: texts(&["长江学者", "国家重点实验室成员", "博士生导师"]),
    }
}

pub fn doctor_profile(kind: DoctorType) -> DoctorProfile {
    match kind {
        DoctorType::Community => community_doctor(),
        DoctorType::Specialist => specialist_doctor(),
    }
}

/// Today's walk-in queue at the community clinic.
pub fn waiting_queue() -> Vec<QueuePatient> {
    vec![
        QueuePatient {
            id: text("q1"),
            name: text("王建国"),
            age: 68,
            gender: Gender::Male,
            status: QueueStatus::Waiting,
            wait_time: text("5min"),
            visit_type: text("慢病续方"),
            chief_complaint: text("降压药已用完，需续开苯磺酸氨氯地平。"),
            allergies: texts(&["青霉素"]),
            last_visit: text("2024-10-10"),
            queue: QueueKind::WalkIn,
        },
        QueuePatient {
            id: text("q2"),
            name: text("张秀英"),
            age: 72,
            gender: Gender::Female,
            status: QueueStatus::InProgress,
            wait_time: text("12min"),
            visit_type: text("注射治疗"),
            chief_complaint: text("预约甲钴胺注射，自述今日左脚微麻。"),
            allergies: Vec::new(),
            last_visit: text("2024-10-22"),
            queue: QueueKind::WalkIn,
        },
        QueuePatient {
            id: text("q3"),
            name: text("李大爷"),
            age: 80,
            gender: Gender::Male,
            status: QueueStatus::Waiting,
            wait_time: text("1min"),
            visit_type: text("全科问诊"),
            chief_complaint: text("近期夜间咳嗽，无发热。"),
            allergies: texts(&["磺胺类"]),
            last_visit: text("2024-09-15"),
            queue: QueueKind::WalkIn,
        },
    ]
}

fn lab(name: &str, value: &str, unit: &str, range: &str, status: LabStatus) -> LabResult {
    LabResult {
        name: text(name),
        value: text(value),
        unit: text(unit),
        range: text(range),
        status,
    }
}

/// Up-referrals waiting in the specialist's remote consultation room.
pub fn specialist_referrals() -> Vec<QueuePatient> {
    vec![
        QueuePatient {
            id: text("ref1"),
            name: text("陈桂芳"),
            age: 70,
            gender: Gender::Female,
            status: QueueStatus::Waiting,
            wait_time: text("1天"),
            visit_type: text("上转会诊"),
            chief_complaint: text("空腹血糖波动，社区初筛异常，申请专家制定治疗方案。"),
            allergies: Vec::new(),
            last_visit: text("2024-10-22"),
            queue: QueueKind::Referral(ReferralCase {
                diagnosis_pending: true,
                risk_level: RiskLevel::High,
                community_hospital: text("浦江社区卫生服务中心"),
                uploaded: UploadedData {
                    blood_sugar: text("11.5 mmol/L"),
                    symptoms: texts(&["多饮", "手脚麻木", "视力模糊"]),
                    preliminary_check: text("社区初诊疑似2型糖尿病复发，建议调整用药。"),
                    lab_results: vec![
                        lab("HbA1c", "8.9", "%", "4.0-6.0", LabStatus::Critical),
                        lab("空腹血糖", "11.5", "mmol/L", "3.9-6.1", LabStatus::High),
                        lab("总胆固醇", "5.2", "mmol/L", "<5.2", LabStatus::Normal),
                        lab("尿酮体", "+", "", "-", LabStatus::High),
                    ],
                    images: vec![
                        MedicalImage {
                            id: text("img1"),
                            modality: ImageModality::Ct,
                            url: text("chest_ct"),
                            date: text("2024-10-22"),
                            description: text("胸部CT平扫"),
                        },
                        MedicalImage {
                            id: text("img2"),
                            modality: ImageModality::Ultrasound,
                            url: text("doppler"),
                            date: text("2024-10-22"),
                            description: text("下肢血管多普勒"),
                        },
                    ],
                    history_trend: vec![6.2, 6.5, 7.1, 8.4, 9.2, 11.5],
                },
            }),
        },
        QueuePatient {
            id: text("ref2"),
            name: text("刘建平"),
            age: 65,
            gender: Gender::Male,
            status: QueueStatus::Waiting,
            wait_time: text("2小时"),
            visit_type: text("远程阅片"),
            chief_complaint: text("胸闷气短一周，社区心电图提示ST段改变。"),
            allergies: texts(&["头孢"]),
            last_visit: text("2024-10-23"),
            queue: QueueKind::Referral(ReferralCase {
                diagnosis_pending: true,
                risk_level: RiskLevel::Medium,
                community_hospital: text("古美社区卫生服务中心"),
                uploaded: UploadedData {
                    blood_sugar: text("5.6 mmol/L"),
                    symptoms: texts(&["胸闷", "心悸"]),
                    preliminary_check: text("疑似冠心病，请专家阅片确诊。"),
                    lab_results: vec![
                        lab("肌钙蛋白", "0.08", "ng/ml", "<0.04", LabStatus::High),
                        lab("CK-MB", "22", "U/L", "0-24", LabStatus::Normal),
                    ],
                    images: Vec::new(),
                    history_trend: vec![130.0, 135.0, 142.0, 138.0, 145.0, 140.0],
                },
            }),
        },
    ]
}

pub fn specialist_referral(id: &str) -> Option<QueuePatient> {
    specialist_referrals()
        .into_iter()
        .find(|patient| patient.id == id)
}

pub fn doctor_tasks() -> Vec<DoctorTask> {
    vec![
        DoctorTask {
            id: text("t2"),
            kind: TaskKind::TransferReview,
            patient_name: text("陈桂芳"),
            description: text("申请从【瑞金医院】转入：II型糖尿病慢病管理方案"),
            time: text("10:30"),
            urgent: true,
            status: TaskStatus::Pending,
        },
        DoctorTask {
            id: text("t1"),
            kind: TaskKind::Appointment,
            patient_name: text("王建国"),
            description: text("预约：甲钴胺注射 (09:00)"),
            time: text("09:00"),
            urgent: false,
            status: TaskStatus::Pending,
        },
        DoctorTask {
            id: text("t3"),
            kind: TaskKind::Message,
            patient_name: text("张阿姨"),
            description: text("咨询：胰岛素针头是否可以重复使用？"),
            time: text("08:45"),
            urgent: false,
            status: TaskStatus::Done,
        },
    ]
}
