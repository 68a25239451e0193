//! Patient home screen.
//!
//! The journey step decides which call-to-action the home screen shows;
//! the flow itself only remembers whether the booking dialog is open.

use carepath_model::JourneyStep;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeFlow {
    booking_open: bool,
}

impl HomeFlow {
    pub fn booking_open(&self) -> bool {
        self.booking_open
    }

    /// Open the booking dialog. Only offered before the first checkup.
    pub fn open_booking(&mut self, step: JourneyStep) -> bool {
        if step == JourneyStep::HomeDefault {
            self.booking_open = true;
        }
        self.booking_open
    }

    pub fn close_booking(&mut self) {
        self.booking_open = false;
    }

    /// Confirm the open dialog. Returns true if the booking should be
    /// reported to the journey.
    pub fn confirm_booking(&mut self) -> bool {
        std::mem::take(&mut self.booking_open)
    }
}

/// The journey-dependent panel on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeBanner {
    /// Bind the insurance card to pull in existing records.
    BindIdentity,
    /// Book the first checkup; carries whether the dialog is open.
    BookCheckup { dialog_open: bool },
    /// Checkup booked; show the ticket shortcut.
    CheckupTicket,
    /// Checkup done; pay the bill.
    Payment,
    /// Waiting for the specialist's joint diagnosis.
    Analyzing,
    /// Joint-diagnosis report overlay, open until the plan is accepted.
    ReportOverlay,
    /// Ongoing injection plan reminder.
    TreatmentReminder,
}

impl HomeBanner {
    pub fn title(&self) -> &'static str {
        match self {
            HomeBanner::BindIdentity => "绑定医保，一键调取历史档案",
            HomeBanner::BookCheckup { .. } => "预约首次社区检查",
            HomeBanner::CheckupTicket => "已预约：常规检查 + 档案上传",
            HomeBanner::Payment => "检查已完成，请支付费用",
            HomeBanner::Analyzing => "三甲专家正在联合诊断...",
            HomeBanner::ReportOverlay => "联合诊疗报告已出",
            HomeBanner::TreatmentReminder => "甲钴胺注射治疗",
        }
    }

    /// Action label, if the panel has a button.
    pub fn action(&self) -> Option<&'static str> {
        match self {
            HomeBanner::BindIdentity => Some("立即绑定"),
            HomeBanner::BookCheckup { dialog_open: false } => Some("一键预约"),
            HomeBanner::BookCheckup { dialog_open: true } => Some("确认预约"),
            HomeBanner::CheckupTicket => Some("完成检查"),
            HomeBanner::Payment => Some("医保支付"),
            HomeBanner::Analyzing => None,
            HomeBanner::ReportOverlay => Some("接受治疗方案"),
            HomeBanner::TreatmentReminder => Some("查看凭证"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub greeting: &'static str,
    pub location: &'static str,
    pub banner: HomeBanner,
    pub quick_actions: Vec<&'static str>,
}

pub fn home_view(step: JourneyStep, flow: &HomeFlow) -> HomeView {
    let banner = match step {
        JourneyStep::Onboarding => HomeBanner::BindIdentity,
        JourneyStep::HomeDefault => HomeBanner::BookCheckup {
            dialog_open: flow.booking_open(),
        },
        JourneyStep::CheckupBooked => HomeBanner::CheckupTicket,
        JourneyStep::PaymentPending => HomeBanner::Payment,
        JourneyStep::Analyzing => HomeBanner::Analyzing,
        JourneyStep::ReportReady => HomeBanner::ReportOverlay,
        JourneyStep::TreatmentActive => HomeBanner::TreatmentReminder,
    };
    let mut quick_actions = vec!["预约挂号", "一键转档"];
    if step.has_first_visit() {
        quick_actions.extend(["用药续方", "下次预约"]);
    }
    HomeView {
        greeting: "早上好，陈奶奶!",
        location: "闵行 · 浦江镇",
        banner,
        quick_actions,
    }
}
