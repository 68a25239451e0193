//! Text rendering of screens and reference tables.

use std::fmt::Write as _;

use chrono::Weekday;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use carepath_core::flows::{
    AnalysisState, ConsultTab, DiagnosisStep, FamilyBooking, LoginStep, Portal, ReferralStep,
    ScanState, SpecialistView, TransferStep, home_view, pass_ticket, profile_view, week_strip,
};
use carepath_core::{AppStore, DemoScene, nav_bar, route, transitions};
use carepath_model::{
    AuthMethod, AuthState, DoctorPage, DoctorType, FamilyPage, JourneyStep, LoginRegion, Persona,
    QueuePatient, RiskLevel, Screen, Session, Tab,
};

/// Everything shown for the store's current screen.
pub fn render_screen(store: &AppStore, today: Weekday) -> String {
    let screen = store.screen();
    let mut out = String::new();
    let _ = writeln!(out, "== {} [{}] ==", screen.title(), screen);
    if store.auth().is_logged_in() {
        let _ = writeln!(
            out,
            "journey: {} ({})",
            store.journey_step().label(),
            store.journey_step()
        );
    }
    match screen {
        Screen::Login => render_login(store, &mut out),
        Screen::PatientHome => render_home(store, &mut out),
        Screen::Records => render_records(store, &mut out),
        Screen::Pass => render_pass(store, &mut out),
        Screen::Plan => render_plan(today, &mut out),
        Screen::Profile
        | Screen::Family {
            page: FamilyPage::Profile,
        } => render_profile(store.auth(), &mut out),
        Screen::Doctor {
            kind: DoctorType::Community,
            page: DoctorPage::Workbench,
        } => render_community(store, &mut out),
        Screen::Doctor {
            kind: DoctorType::Specialist,
            page: DoctorPage::Workbench,
        } => render_specialist(store, &mut out),
        Screen::Doctor {
            page: DoctorPage::Scanner,
            ..
        } => render_scanner(store, &mut out),
        Screen::Doctor {
            kind,
            page: DoctorPage::Profile,
        } => render_doctor_profile(kind, &mut out),
        Screen::Family {
            page: FamilyPage::Home,
        } => render_family(store, &mut out),
    }
    if let Some(bar) = nav_bar(store.auth()) {
        let items: Vec<String> = bar
            .items
            .iter()
            .map(|item| {
                if bar.is_active(item, store.tab()) {
                    format!("[{}]", item.label)
                } else {
                    item.label.to_string()
                }
            })
            .collect();
        let _ = write!(out, "nav: {}", items.join(" | "));
        if let Some(floating) = bar.floating {
            let _ = write!(out, "  (+ {})", floating.label);
        }
        out.push('\n');
    }
    out
}

fn render_login(store: &AppStore, out: &mut String) {
    let flow = store.login_flow();
    let step = match flow.step() {
        LoginStep::Splash => {
            if flow.agreed() {
                "splash (agreement ticked)"
            } else {
                "splash"
            }
        }
        LoginStep::LoginForm => "login form",
        LoginStep::Processing => "connecting to insurance platform...",
        LoginStep::RegionWarning => "out-of-region insurance: file record or just look",
        LoginStep::Completed => "completed",
    };
    let _ = writeln!(out, "step: {step}");
    if flow.step() == LoginStep::LoginForm {
        let portal = match flow.portal() {
            Portal::Public => "public",
            Portal::Medical => "medical",
        };
        let _ = writeln!(
            out,
            "portal: {portal}  role: {}  region: {}",
            flow.role().label(),
            flow.region()
        );
    }
}

fn render_home(store: &AppStore, out: &mut String) {
    let view = home_view(store.journey_step(), store.home_flow());
    let _ = writeln!(out, "{} ({})", view.greeting, view.location);
    let _ = write!(out, "> {}", view.banner.title());
    if let Some(action) = view.banner.action() {
        let _ = write!(out, "  [{action}]");
    }
    out.push('\n');
    let _ = writeln!(out, "shortcuts: {}", view.quick_actions.join(", "));
    if store.journey_step() == JourneyStep::TreatmentActive {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Reminder"),
            header_cell("Time"),
            header_cell("Detail"),
        ]);
        apply_table_style(&mut table);
        for reminder in carepath_fixtures::reminders() {
            table.add_row(vec![
                Cell::new(&reminder.title),
                Cell::new(&reminder.time),
                dim_cell(&reminder.detail),
            ]);
        }
        let _ = writeln!(out, "{table}");
    }
}

fn render_records(store: &AppStore, out: &mut String) {
    let flow = store.records_flow();
    let Some(record) = flow.selected() else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Id"),
            header_cell("Diagnosis"),
            header_cell("Hospital"),
            header_cell("Status"),
        ]);
        apply_table_style(&mut table);
        for record in carepath_fixtures::medical_records() {
            table.add_row(vec![
                Cell::new(&record.id),
                Cell::new(&record.diagnosis),
                Cell::new(&record.hospital_name),
                Cell::new(record.status.label()),
            ]);
        }
        let _ = writeln!(out, "{table}");
        return;
    };
    let _ = writeln!(out, "{} ({})", record.diagnosis, record.diagnosis_date);
    let _ = writeln!(out, "{} · {}", record.hospital_name, record.doctor_name);
    let _ = writeln!(out, "处方: {}", record.prescription.join(", "));
    let _ = writeln!(out, "治疗计划: {}", record.treatment_plan);
    match flow.analysis() {
        AnalysisState::Idle => {}
        AnalysisState::Pending => out.push_str("AI 解读: ...\n"),
        AnalysisState::Ready(text) => {
            let _ = writeln!(out, "AI 解读:\n{text}");
        }
    }
    let transfer = match flow.transfer() {
        TransferStep::Idle if flow.can_transfer() => Some("一键转档 available"),
        TransferStep::Idle => None,
        TransferStep::Confirming => Some("confirm hand-down to 浦江社区卫生服务中心"),
        TransferStep::Transferring => Some("transferring..."),
        TransferStep::Done => Some("transfer complete"),
    };
    if let Some(line) = transfer {
        let _ = writeln!(out, "transfer: {line}");
    }
}

fn render_pass(store: &AppStore, out: &mut String) {
    let ticket = pass_ticket(store.journey_step(), &carepath_fixtures::appointment());
    let _ = writeln!(out, "{} · {}", ticket.title, ticket.department);
    let _ = writeln!(out, "{} {}", ticket.hospital, ticket.location);
    let _ = writeln!(out, "{} {}", ticket.date, ticket.time_slot);
    let _ = writeln!(out, "queue number: {}", ticket.queue_number);
}

fn render_plan(today: Weekday, out: &mut String) {
    let days: Vec<String> = week_strip(today)
        .into_iter()
        .map(|day| {
            let mut cell = format!("{} {}", day.label, day.date);
            if day.is_today {
                cell = format!("[{cell}]");
            }
            if day.has_appointment {
                cell.push('*');
            }
            cell
        })
        .collect();
    let _ = writeln!(out, "{}", days.join("  "));
    for reminder in carepath_fixtures::reminders() {
        let _ = writeln!(out, "- {} {}", reminder.time, reminder.title);
    }
}

fn render_profile(auth: &AuthState, out: &mut String) {
    let view = profile_view(auth);
    let _ = writeln!(
        out,
        "{} · {}岁 · {}",
        view.profile.name, view.profile.age, view.profile.location
    );
    let _ = writeln!(out, "医保余额: {}", view.profile.medicare_balance);
    if let Some(badge) = view.payment_badge {
        let _ = writeln!(out, "{badge}");
    }
    if view.visitor {
        out.push_str("访客模式\n");
    }
}

fn render_community(store: &AppStore, out: &mut String) {
    let flow = store.workbench_flow();
    let mut tasks = Table::new();
    tasks.set_header(vec![
        header_cell("Task"),
        header_cell("Kind"),
        header_cell("Patient"),
        header_cell("Description"),
        header_cell("Time"),
    ]);
    apply_table_style(&mut tasks);
    for task in carepath_fixtures::doctor_tasks() {
        let id = if task.urgent {
            Cell::new(&task.id).fg(Color::Red)
        } else {
            Cell::new(&task.id)
        };
        tasks.add_row(vec![
            id,
            Cell::new(task.kind.label()),
            Cell::new(&task.patient_name),
            Cell::new(&task.description),
            dim_cell(&task.time),
        ]);
    }
    let _ = writeln!(out, "{tasks}");
    let _ = writeln!(out, "{}", queue_table(&carepath_fixtures::waiting_queue()));
    match flow.referral() {
        Some(ReferralStep::Review) => out.push_str("referral: reviewing down-referral plan\n"),
        Some(ReferralStep::Accepted) => out.push_str("referral: accepted and filed\n"),
        None => {}
    }
    if let Some(patient) = flow.selected_patient() {
        let _ = writeln!(
            out,
            "360: {} {}岁 · {} · 过敏: {}",
            patient.name,
            patient.age,
            patient.chief_complaint,
            patient.allergies.join(", ")
        );
    }
}

fn render_specialist(store: &AppStore, out: &mut String) {
    match store.consultation_flow().view() {
        SpecialistView::List => {
            let _ = writeln!(
                out,
                "{}",
                queue_table(&carepath_fixtures::specialist_referrals())
            );
        }
        SpecialistView::Detail {
            patient,
            case,
            tab,
            diagnosis,
        } => {
            let _ = writeln!(
                out,
                "{} {}岁 · {} · from {}",
                patient.name,
                patient.age,
                case.risk_level.label(),
                case.community_hospital
            );
            let tabs: Vec<String> = ConsultTab::ALL
                .into_iter()
                .map(|item| {
                    if item == tab {
                        format!("[{}]", item.label())
                    } else {
                        item.label().to_string()
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", tabs.join(" | "));
            render_consult_tab(tab, case, out);
            let _ = writeln!(
                out,
                "diagnosis: {}",
                match diagnosis {
                    DiagnosisStep::Drafting => "drafting",
                    DiagnosisStep::Signed => "signed and sent",
                }
            );
        }
    }
}

fn render_consult_tab(tab: ConsultTab, case: &carepath_model::ReferralCase, out: &mut String) {
    let uploaded = &case.uploaded;
    match tab {
        ConsultTab::Overview => {
            let _ = writeln!(out, "血糖: {}", uploaded.blood_sugar);
            let _ = writeln!(out, "症状: {}", uploaded.symptoms.join(", "));
            let _ = writeln!(out, "初检: {}", uploaded.preliminary_check);
        }
        ConsultTab::Labs => {
            let mut table = Table::new();
            table.set_header(vec![
                header_cell("Test"),
                header_cell("Value"),
                header_cell("Unit"),
                header_cell("Range"),
            ]);
            apply_table_style(&mut table);
            align_column(&mut table, 1, CellAlignment::Right);
            for lab in &uploaded.lab_results {
                let value = if lab.status.is_abnormal() {
                    Cell::new(&lab.value)
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold)
                } else {
                    Cell::new(&lab.value)
                };
                table.add_row(vec![
                    Cell::new(&lab.name),
                    value,
                    dim_cell(&lab.unit),
                    dim_cell(&lab.range),
                ]);
            }
            let _ = writeln!(out, "{table}");
        }
        ConsultTab::Images => {
            for image in &uploaded.images {
                let _ = writeln!(
                    out,
                    "- {:?} {} {}",
                    image.modality, image.date, image.description
                );
            }
        }
        ConsultTab::Mdt => {
            let trend: Vec<String> = uploaded
                .history_trend
                .iter()
                .map(ToString::to_string)
                .collect();
            let _ = writeln!(out, "trend: {}", trend.join(" → "));
        }
    }
}

fn render_scanner(store: &AppStore, out: &mut String) {
    let flow = store.scanner_flow();
    let state = match flow.state() {
        ScanState::Idle => "ready to scan",
        ScanState::Scanning => "scanning...",
        ScanState::Detected => "code detected",
        ScanState::Confirmed => "injection recorded",
    };
    let _ = writeln!(out, "scanner: {state}");
    if let Some(patient) = flow.detected_patient() {
        let _ = writeln!(out, "patient: {} · {}", patient.name, patient.visit_type);
    }
}

fn render_doctor_profile(kind: DoctorType, out: &mut String) {
    let profile = carepath_fixtures::doctor_profile(kind);
    let _ = writeln!(
        out,
        "{} {} · {} {}",
        profile.name, profile.title, profile.hospital, profile.department
    );
    for (label, value) in profile.stats.entries() {
        let _ = writeln!(out, "{label}: {value}");
    }
}

fn render_family(store: &AppStore, out: &mut String) {
    let patient = carepath_fixtures::patient_profile();
    let _ = writeln!(out, "关怀对象: {} ({}岁)", patient.name, patient.age);
    for vital in carepath_fixtures::vitals() {
        let _ = writeln!(
            out,
            "{}: {} {} ({})",
            vital.kind.label(),
            vital.value,
            vital.unit,
            vital.last_measured
        );
    }
    let booking = match store.family_flow().booking() {
        FamilyBooking::Idle => "远程代约 available",
        FamilyBooking::Booking => "booking...",
        FamilyBooking::Success => "injection booked for 周四",
    };
    let _ = writeln!(out, "{booking}");
}

fn queue_table(patients: &[QueuePatient]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Patient"),
        header_cell("Age"),
        header_cell("Visit"),
        header_cell("Status"),
        header_cell("Risk"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for patient in patients {
        let risk = match patient.referral().map(|case| case.risk_level) {
            Some(RiskLevel::High) => Cell::new(RiskLevel::High.label()).fg(Color::Red),
            Some(level) => Cell::new(level.label()).fg(Color::Yellow),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&patient.id),
            Cell::new(&patient.name),
            Cell::new(patient.age),
            Cell::new(&patient.visit_type),
            Cell::new(patient.status.label()),
            risk,
        ]);
    }
    table
}

/// Screen for every persona and tab.
pub fn routes_table() -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Tab")];
    let personas: Vec<Option<Persona>> = std::iter::once(None)
        .chain(Persona::ALL.into_iter().map(Some))
        .collect();
    for persona in &personas {
        header.push(header_cell(&match persona {
            Some(persona) => persona.to_string(),
            None => "LOGGED_OUT".to_string(),
        }));
    }
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for tab in Tab::ALL {
        let mut row = vec![Cell::new(tab.as_str()).add_attribute(Attribute::Bold)];
        for persona in &personas {
            let auth = match persona {
                Some(persona) => AuthState::LoggedIn(Session::new(
                    LoginRegion::Shanghai,
                    AuthMethod::Medicare,
                    *persona,
                )),
                None => AuthState::LoggedOut,
            };
            row.push(Cell::new(route(&auth, tab)));
        }
        table.add_row(row);
    }
    table
}

/// The legal journey transitions.
pub fn journey_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("From"),
        header_cell("Event"),
        header_cell("To"),
        header_cell("Meaning"),
    ]);
    apply_summary_table_style(&mut table);
    for (from, event, to) in transitions() {
        table.add_row(vec![
            Cell::new(from),
            Cell::new(event).fg(Color::Cyan),
            Cell::new(to),
            dim_cell(to.label()),
        ]);
    }
    table
}

/// Demo scenes with what each one sets up.
pub fn scenes_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Scene"),
        header_cell("Session"),
        header_cell("Journey"),
        header_cell("Tab"),
    ]);
    apply_table_style(&mut table);
    for scene in DemoScene::ALL {
        let plan = scene.plan();
        table.add_row(vec![
            Cell::new(scene.number()),
            Cell::new(scene.label()),
            match plan.session {
                Some(session) => Cell::new(format!("{} / {}", session.persona, session.method)),
                None => dim_cell("logged out"),
            },
            match plan.journey {
                Some(step) => Cell::new(step),
                None => dim_cell("unchanged"),
            },
            Cell::new(plan.tab),
        ]);
    }
    table
}

/// Reference data tables, titled.
pub fn fixture_tables() -> Vec<(&'static str, Table)> {
    let mut hospitals = Table::new();
    hospitals.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Distance"),
        header_cell("Tags"),
    ]);
    apply_table_style(&mut hospitals);
    for hospital in carepath_fixtures::hospitals() {
        hospitals.add_row(vec![
            Cell::new(&hospital.id),
            Cell::new(&hospital.name),
            Cell::new(if hospital.is_community() {
                "community"
            } else {
                "grade 3A"
            }),
            Cell::new(&hospital.distance),
            dim_cell(hospital.tags.join(", ")),
        ]);
    }

    let mut records = Table::new();
    records.set_header(vec![
        header_cell("Id"),
        header_cell("Diagnosis"),
        header_cell("Hospital"),
        header_cell("Prescription"),
    ]);
    apply_table_style(&mut records);
    for record in carepath_fixtures::medical_records() {
        records.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.diagnosis),
            Cell::new(&record.hospital_name),
            dim_cell(record.prescription.join(", ")),
        ]);
    }

    vec![
        ("Medical records", records),
        ("Hospitals", hospitals),
        ("Waiting queue", queue_table(&carepath_fixtures::waiting_queue())),
        (
            "Specialist referrals",
            queue_table(&carepath_fixtures::specialist_referrals()),
        ),
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
