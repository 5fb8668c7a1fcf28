//! Avasa - course seating and rooming for residential retreats
//!
//! Reads a pasted roster text file, hands it to the extraction service,
//! then prints the seat assignments, participant lists, and room chart.
//!
//! Usage: avasa-app <roster.txt> [config.toml]

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use avasa_core::Database;
use avasa_extract::ExtractClient;

mod config;
mod ingest;
mod report;
mod session;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let input_path = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("Usage: avasa-app <roster.txt> [config.toml]");
            return ExitCode::FAILURE;
        }
    };
    let config = match args.next() {
        Some(path) => match config::AppConfig::load(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => config::AppConfig::load_or_default("avasa.toml"),
    };

    let raw_text = match std::fs::read_to_string(&input_path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(path = %input_path, "Failed to read roster text: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let db = match open_database() {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = ExtractClient::new(config.extractor.addr.clone())
        .with_timeout(Duration::from_secs(config.extractor.timeout_secs));

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Single request/response; a failure here leaves nothing half-ingested.
    let batch = match runtime.block_on(client.extract(&raw_text)) {
        Ok(batch) => batch,
        Err(e) => {
            tracing::error!("Extraction failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = session::Session::new(db, config.hall.policy(), config.hall.fixed_layout());
    if let Err(e) = session.ingest(batch) {
        tracing::error!("Ingestion failed: {}", e);
        return ExitCode::FAILURE;
    }

    print_reports(&session);
    ExitCode::SUCCESS
}

fn open_database() -> avasa_core::Result<Database> {
    let dir = config::data_path()?;
    std::fs::create_dir_all(&dir)?;
    Database::open(dir.join("avasa.db"))
}

fn print_reports(session: &session::Session) {
    let roster = session.roster();
    let stats = roster.stats();

    let header = report::course_header(session.course());
    if !header.is_empty() {
        println!("{header}");
    }
    println!(
        "{} participants: {} new, {} old, {} servers\n",
        stats.total, stats.new, stats.old, stats.servers
    );

    println!("Hall grid ({}x{}):", roster.layout().rows, roster.layout().cols);
    println!("{}", report::hall_grid(roster));

    println!("Seating list:");
    println!("{}", report::seating_list(roster));

    println!("New participants:");
    println!("{}", report::new_participant_list(roster));

    println!("Old participants:");
    println!("{}", report::old_participant_list(roster));

    println!("Room chart:");
    println!("{}", report::room_chart(roster));

    let waiting = roster.participants().iter().filter(|p| p.is_waiting()).count();
    if waiting > 0 {
        tracing::warn!(waiting, "Not enough seats for every participant");
    }
}
