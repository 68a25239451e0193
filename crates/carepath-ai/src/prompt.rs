//! Prompt text sent to the generation backend.

use std::fmt::Write as _;

use carepath_model::{Hospital, MedicalRecord};

/// Lay explanation of a record for an elderly patient.
pub fn explain_prompt(record: &MedicalRecord) -> String {
    format!(
        "请作为一名专业的全科医生助手，用通俗易懂的语言（适合老年人阅读）为患者解读以下病历摘要。\n\
         重点解释：\n\
         1. 诊断结果是什么意思？\n\
         2. 这种治疗方案的目的是什么？\n\
         3. 日常生活需要注意什么？\n\
         \n\
         病历信息：\n\
         诊断：{diagnosis}\n\
         医院：{hospital}\n\
         处方：{prescription}\n\
         治疗计划：{plan}\n",
        diagnosis = record.diagnosis,
        hospital = record.hospital_name,
        prescription = record.prescription.join(", "),
        plan = record.treatment_plan,
    )
}

/// Ask which community clinic should take over the follow-up treatment.
/// Only community hospitals are offered as candidates.
pub fn recommend_prompt(record: &MedicalRecord, hospitals: &[Hospital]) -> String {
    let mut prompt = format!(
        "患者需要进行以下治疗：{plan} (处方: {prescription})。\n\
         请在以下社区医院列表中，推荐最适合承接该患者后续治疗（如注射、取药）的机构，并说明理由。\n\
         \n\
         候选医院：\n",
        plan = record.treatment_plan,
        prescription = record.prescription.join(", "),
    );
    for hospital in hospitals.iter().filter(|h| h.is_community()) {
        let _ = writeln!(prompt, "- {} (标签: {})", hospital.name, hospital.tags.join(", "));
    }
    prompt
}
