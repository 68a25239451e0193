use carepath_model::{
    Appointment, HealthArticle, Hospital, HospitalType, MedicalRecord, RecordStatus, Reminder,
    ReminderKind, ReminderStatus, TransferStatus, Trend, UserProfile, VitalKind, VitalSign,
    VitalStatus,
};

use crate::{text, texts};

pub fn patient_profile() -> UserProfile {
    UserProfile {
        name: text("陈桂芳"),
        age: 70,
        location: text("上海市闵行区浦江镇"),
        linked_family_members: texts(&["李敏 (女儿 - 徐汇区)"]),
        medicare_balance: text("1,245.50"),
        id_card_last4: Some(text("4521")),
        avatar: None,
    }
}

pub fn family_profile() -> UserProfile {
    UserProfile {
        name: text("李敏"),
        age: 42,
        location: text("上海市徐汇区"),
        linked_family_members: texts(&["陈桂芳 (母亲)"]),
        medicare_balance: text("0.00"),
        id_card_last4: None,
        avatar: Some(text("LM")),
    }
}

/// The active injection appointment shown on the pass screen.
pub fn appointment() -> Appointment {
    Appointment {
        id: text("APT_9982"),
        hospital_name: text("浦江社区卫生服务中心"),
        department: text("注射室"),
        floor: text("1F"),
        room: text("103室"),
        date: text("2024-10-24 (周四)"),
        time_slot: text("09:00 - 09:30"),
        project: text("营养神经注射 (甲钴胺)"),
        status: text("UPCOMING"),
        queue_number: text("A-005"),
    }
}

pub fn reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: text("r1"),
            kind: ReminderKind::Treatment,
            title: text("营养神经注射治疗"),
            time: text("本周四 (后天)"),
            detail: text("甲钴胺注射液 1支 • 需提前预约"),
            status: ReminderStatus::Pending,
            action_label: Some(text("一键预约")),
            location: Some(text("推荐: 浦江社区卫生服务中心")),
        },
        Reminder {
            id: text("r2"),
            kind: ReminderKind::Medication,
            title: text("口服降糖药"),
            time: text("每日 08:00"),
            detail: text("二甲双胍 0.5g, 早餐后服用"),
            status: ReminderStatus::Completed,
            action_label: None,
            location: None,
        },
    ]
}

pub fn medical_records() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: text("rec1"),
            diagnosis: text("II型糖尿病 (伴周围神经病变)"),
            diagnosis_date: text("2019-05-10"),
            hospital_name: text("瑞金医院 (总院)"),
            doctor_name: text("刘晓静 主任医师"),
            prescription: texts(&["甲钴胺注射液", "盐酸二甲双胍片"]),
            treatment_plan: text(
                "长期医嘱：每两周进行一次甲钴胺肌注，改善手脚麻木症状。建议转至社区医院执行。",
            ),
            status: RecordStatus::Active,
            transfer_status: TransferStatus::None,
        },
        MedicalRecord {
            id: text("rec2"),
            diagnosis: text("老年性白内障 (初期)"),
            diagnosis_date: text("2022-11-20"),
            hospital_name: text("五官科医院"),
            doctor_name: text("张明 医师"),
            prescription: texts(&["莎普爱思滴眼液"]),
            treatment_plan: text("定期复查眼底。"),
            status: RecordStatus::Active,
            transfer_status: TransferStatus::Completed,
        },
    ]
}

pub fn medical_record(id: &str) -> Option<MedicalRecord> {
    medical_records().into_iter().find(|record| record.id == id)
}

pub fn hospitals() -> Vec<Hospital> {
    vec![
        Hospital {
            id: text("h1"),
            name: text("浦江社区卫生服务中心"),
            kind: HospitalType::Community,
            distance: text("800米"),
            address: text("江月路1200号"),
            tags: texts(&["注射执行", "医保定点", "慢病管理"]),
            rating: 4.9,
            available_services: texts(&["简易门诊", "注射室", "家庭医生"]),
            waiting_time: text("无需排队"),
            is_recommended: true,
        },
        Hospital {
            id: text("h2"),
            name: text("瑞金医院 (总院)"),
            kind: HospitalType::Grade3A,
            distance: text("18.5公里"),
            address: text("瑞金二路197号"),
            tags: texts(&["三甲", "内分泌科强项"]),
            rating: 5.0,
            available_services: texts(&["专家门诊", "疑难杂症"]),
            waiting_time: text("2小时+"),
            is_recommended: false,
        },
        Hospital {
            id: text("h3"),
            name: text("仁济医院 (南院)"),
            kind: HospitalType::Grade3A,
            distance: text("15公里"),
            address: text("江月路2000号"),
            tags: texts(&["三甲", "综合"]),
            rating: 4.7,
            available_services: texts(&["专家门诊", "住院服务"]),
            waiting_time: text("1小时"),
            is_recommended: false,
        },
    ]
}

pub fn community_hospitals() -> Vec<Hospital> {
    hospitals()
        .into_iter()
        .filter(Hospital::is_community)
        .collect()
}

pub fn vitals() -> Vec<VitalSign> {
    vec![
        VitalSign {
            kind: VitalKind::Sugar,
            value: text("6.4"),
            unit: text("mmol/L"),
            status: VitalStatus::Normal,
            trend: Trend::Stable,
            last_measured: text("今日 07:00"),
        },
        VitalSign {
            kind: VitalKind::Pressure,
            value: text("135/88"),
            unit: text("mmHg"),
            status: VitalStatus::High,
            trend: Trend::Up,
            last_measured: text("昨日 19:30"),
        },
    ]
}

pub fn articles() -> Vec<HealthArticle> {
    vec![
        HealthArticle {
            id: text("a1"),
            title: text("秋冬季节糖尿病足的预防与护理"),
            category: text("慢病护理"),
            read_count: 2340,
        },
        HealthArticle {
            id: text("a2"),
            title: text("甲钴胺注射后的注意事项"),
            category: text("用药指南"),
            read_count: 1502,
        },
        HealthArticle {
            id: text("a3"),
            title: text("老年人流感疫苗接种通知"),
            category: text("社区公告"),
            read_count: 5600,
        },
    ]
}
