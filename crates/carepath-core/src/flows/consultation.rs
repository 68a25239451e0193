//! Specialist digital consultation room.
//!
//! With no patient selected the workbench is the referral list; selecting
//! one opens the consultation detail with its tabs and the joint-diagnosis
//! form.

use carepath_model::{QueuePatient, ReferralCase};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsultTab {
    #[default]
    Overview,
    Labs,
    Images,
    Mdt,
}

impl ConsultTab {
    pub const ALL: [ConsultTab; 4] = [
        ConsultTab::Overview,
        ConsultTab::Labs,
        ConsultTab::Images,
        ConsultTab::Mdt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConsultTab::Overview => "全息概览",
            ConsultTab::Labs => "检验报告",
            ConsultTab::Images => "影像资料",
            ConsultTab::Mdt => "协作记录",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagnosisStep {
    #[default]
    Drafting,
    /// Opinion signed and sent back to the patient and community clinic.
    Signed,
}

/// What the specialist workbench shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialistView<'a> {
    List,
    Detail {
        patient: &'a QueuePatient,
        case: &'a ReferralCase,
        tab: ConsultTab,
        diagnosis: DiagnosisStep,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ConsultationFlow {
    patient: Option<QueuePatient>,
    tab: ConsultTab,
    diagnosis: DiagnosisStep,
}

impl ConsultationFlow {
    pub fn view(&self) -> SpecialistView<'_> {
        match self.patient.as_ref() {
            Some(patient) => match patient.referral() {
                Some(case) => SpecialistView::Detail {
                    patient,
                    case,
                    tab: self.tab,
                    diagnosis: self.diagnosis,
                },
                None => SpecialistView::List,
            },
            None => SpecialistView::List,
        }
    }

    /// Open a referral from the list. Unknown ids keep the list.
    pub fn select(&mut self, id: &str) -> bool {
        match carepath_fixtures::specialist_referral(id) {
            Some(patient) => {
                *self = Self {
                    patient: Some(patient),
                    ..Self::default()
                };
                true
            }
            None => false,
        }
    }

    pub fn select_tab(&mut self, tab: ConsultTab) {
        if self.patient.is_some() {
            self.tab = tab;
        }
    }

    pub fn sign(&mut self) -> bool {
        if self.patient.is_some() && self.diagnosis == DiagnosisStep::Drafting {
            self.diagnosis = DiagnosisStep::Signed;
            return true;
        }
        false
    }

    /// Close the detail ("next patient" or back).
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_is_list_view() {
        let flow = ConsultationFlow::default();
        assert!(matches!(flow.view(), SpecialistView::List));
    }

    #[test]
    fn sign_then_next_returns_to_list() {
        let mut flow = ConsultationFlow::default();
        assert!(flow.select("ref1"));
        flow.select_tab(ConsultTab::Labs);
        assert!(flow.sign());
        match flow.view() {
            SpecialistView::Detail {
                patient,
                case,
                tab,
                diagnosis,
            } => {
                assert_eq!(patient.name, "陈桂芳");
                assert_eq!(case.uploaded.lab_results.len(), 4);
                assert_eq!(tab, ConsultTab::Labs);
                assert_eq!(diagnosis, DiagnosisStep::Signed);
            }
            SpecialistView::List => panic!("expected detail view"),
        }
        flow.close();
        assert!(matches!(flow.view(), SpecialistView::List));
    }

    #[test]
    fn reselecting_resets_tab_and_diagnosis() {
        let mut flow = ConsultationFlow::default();
        flow.select("ref1");
        flow.select_tab(ConsultTab::Mdt);
        flow.sign();
        flow.select("ref2");
        assert!(matches!(
            flow.view(),
            SpecialistView::Detail {
                tab: ConsultTab::Overview,
                diagnosis: DiagnosisStep::Drafting,
                ..
            }
        ));
    }

    #[test]
    fn tab_ignored_without_patient() {
        let mut flow = ConsultationFlow::default();
        flow.select_tab(ConsultTab::Images);
        assert!(!flow.sign());
        assert!(!flow.select("q1"));
    }
}
