//! Play scripts driven end to end through the library API.

use chrono::Weekday;

use carepath_ai::{EXPLAIN_NOT_CONFIGURED, Summarizer};
use carepath_cli::render::{journey_table, render_screen, routes_table};
use carepath_cli::script::{Player, parse_script};
use carepath_model::JourneyStep;

fn play<'a>(summarizer: &'a Summarizer, steps: &[&str]) -> (Player<'a>, Vec<Option<String>>) {
    let steps = parse_script(steps).unwrap();
    let mut player = Player::new(summarizer);
    let notes = steps.iter().map(|step| player.apply(step)).collect();
    (player, notes)
}

#[test]
fn patient_pathway_script() {
    let summarizer = Summarizer::unconfigured();
    let (player, _) = play(
        &summarizer,
        &[
            "login:patient",
            "bind",
            "book",
            "confirm",
            "checkup",
            "pay",
            "wait:1999",
        ],
    );
    assert_eq!(player.store().journey_step(), JourneyStep::Analyzing);

    let (player, _) = play(
        &summarizer,
        &[
            "scene:2", "bind", "book", "confirm", "checkup", "pay", "wait:2000", "accept",
        ],
    );
    assert_eq!(player.store().journey_step(), JourneyStep::TreatmentActive);
    let screen = render_screen(player.store(), Weekday::Mon);
    assert!(screen.contains("甲钴胺注射治疗"));
    assert!(screen.contains("nav: [首页]"));
}

#[test]
fn explain_without_key_shows_fixed_text() {
    let summarizer = Summarizer::unconfigured();
    let (player, notes) = play(&summarizer, &["scene:3", "tab:records", "record:rec1", "explain"]);
    assert_eq!(notes[3].as_deref(), Some(EXPLAIN_NOT_CONFIGURED));
    let screen = render_screen(player.store(), Weekday::Mon);
    assert!(screen.contains(EXPLAIN_NOT_CONFIGURED));
}

#[test]
fn explain_without_open_record_does_nothing() {
    let summarizer = Summarizer::unconfigured();
    let (_, notes) = play(&summarizer, &["scene:3", "tab:records", "explain"]);
    assert_eq!(notes[2], None);
}

#[test]
fn out_of_region_visitor_script() {
    let summarizer = Summarizer::unconfigured();
    let (player, _) = play(&summarizer, &["region", "login:family:alipay"]);
    assert!(!player.store().auth().is_logged_in());
    let screen = render_screen(player.store(), Weekday::Mon);
    insta::assert_snapshot!(screen.lines().next().unwrap(), @"== 登录 [login] ==");
    assert!(screen.contains("out-of-region"));

    let (player, _) = play(&summarizer, &["region", "login:family:alipay", "look"]);
    assert!(player.store().auth().is_visitor());
    let screen = render_screen(player.store(), Weekday::Mon);
    insta::assert_snapshot!(screen.lines().next().unwrap(), @"== 家属关怀模式 [family/home] ==");
}

#[test]
fn specialist_consultation_script() {
    let summarizer = Summarizer::unconfigured();
    let (player, _) = play(
        &summarizer,
        &["scene:4", "consult:ref1", "consult-tab:labs", "sign"],
    );
    let screen = render_screen(player.store(), Weekday::Wed);
    assert!(screen.contains("陈桂芳"));
    assert!(screen.contains("[检验报告]"));
    assert!(screen.contains("signed and sent"));
}

#[test]
fn community_scanner_script() {
    let summarizer = Summarizer::unconfigured();
    let (player, _) = play(
        &summarizer,
        &["scene:5", "tab:scanner", "scan", "wait:1000", "scan:confirm"],
    );
    let screen = render_screen(player.store(), Weekday::Thu);
    assert!(screen.contains("injection recorded"));
    assert!(screen.contains("张秀英"));
}

#[test]
fn routing_and_journey_tables_render() {
    let routes = routes_table().to_string();
    assert!(routes.contains("doctor/specialist/workbench"));
    assert!(routes.contains("family/home"));
    let journey = journey_table().to_string();
    assert!(journey.contains("ACCEPT_CARE_PLAN"));
}
