//! Subcommand implementations.

use anyhow::{Context, Result, anyhow};
use chrono::Datelike;
use tracing::{debug, info_span};

use carepath_ai::Summarizer;
use carepath_core::{Action, AppStore, DemoScene};
use carepath_model::MedicalRecord;

use carepath_cli::config::AppConfig;
use carepath_cli::render::{fixture_tables, journey_table, render_screen, routes_table, scenes_table};
use carepath_cli::script::{Player, Step, parse_script};

use crate::cli::{PlayArgs, RecordArgs, TourArgs};

fn today() -> chrono::Weekday {
    chrono::Local::now().weekday()
}

pub fn run_tour(args: &TourArgs) -> Result<()> {
    let scene: DemoScene = args.scene.parse().context("parse scene")?;
    let mut store = AppStore::new();
    store.dispatch(Action::Tour(scene));
    println!("scene {scene}");
    print!("{}", render_screen(&store, today()));
    Ok(())
}

pub fn run_play(args: &PlayArgs, config: &AppConfig) -> Result<()> {
    let steps = parse_script(&args.steps).context("parse script")?;
    let summarizer = Summarizer::from_settings(&config.ai);
    let mut player = Player::new(&summarizer);
    if let Some(scene) = config.tour.start_scene().context("tour settings")? {
        debug!(%scene, "applying configured start scene");
        player.apply(&Step::Dispatch(vec![Action::Tour(scene)]));
    }
    let day = today();
    for (index, (raw, step)) in args.steps.iter().zip(&steps).enumerate() {
        let span = info_span!("step", index, step = %raw);
        let _guard = span.enter();
        let note = player.apply(step);
        if !args.quiet_steps {
            println!("$ {raw}");
            if let Some(note) = &note {
                println!("{note}");
            }
            print!("{}", render_screen(player.store(), day));
            println!();
        }
    }
    if args.quiet_steps {
        print!("{}", render_screen(player.store(), day));
    }
    Ok(())
}

pub fn run_routes() -> Result<()> {
    println!("{}", routes_table());
    Ok(())
}

pub fn run_journey() -> Result<()> {
    println!("{}", journey_table());
    println!("{}", scenes_table());
    Ok(())
}

fn find_record(id: &str) -> Result<MedicalRecord> {
    carepath_fixtures::medical_record(id).ok_or_else(|| {
        let known: Vec<String> = carepath_fixtures::medical_records()
            .into_iter()
            .map(|record| record.id)
            .collect();
        anyhow!("unknown record '{id}' (known: {})", known.join(", "))
    })
}

pub fn run_explain(args: &RecordArgs, config: &AppConfig) -> Result<()> {
    let record = find_record(&args.record_id)?;
    let summarizer = Summarizer::from_settings(&config.ai);
    println!("{}", summarizer.explain_record(&record));
    Ok(())
}

pub fn run_recommend(args: &RecordArgs, config: &AppConfig) -> Result<()> {
    let record = find_record(&args.record_id)?;
    let summarizer = Summarizer::from_settings(&config.ai);
    println!(
        "{}",
        summarizer.recommend_hospital(&record, &carepath_fixtures::hospitals())
    );
    Ok(())
}

pub fn run_fixtures() -> Result<()> {
    for (title, table) in fixture_tables() {
        println!("{title}");
        println!("{table}");
    }
    Ok(())
}
