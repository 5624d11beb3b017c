// src/main.rs
//
// Inspection tool: reads a JSON server-list reply from a file, builds the
// records, and prints a one-line summary per server. Entries whose hostname
// cannot be resolved are logged and skipped, the rest of the list survives.

use env_logger::Env;
use log::{error, info, warn};
use std::process::ExitCode;

use prspy_core::{RawServer, ServerRecord};

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: prspy-inspect <server-list.json>");
            return ExitCode::from(2);
        }
    };

    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let entries: Vec<RawServer> = match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to parse {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Parsed {} server entries from {}", entries.len(), path);

    let mut records = Vec::new();
    for entry in &entries {
        match ServerRecord::from_payload(entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping entry: {}", e),
        }
    }
    info!("Built {} records", records.len());

    for record in &records {
        println!(
            "{:<22} [{}] {:<40} {} {:?}/{:?} {}/{}{}{}",
            record.id(),
            record.country().code(),
            record.server_name(),
            record.map_name(),
            record.game_mode(),
            record.game_layer(),
            record.num_players(),
            record.max_players(),
            if record.has_password() { " [pw]" } else { "" },
            if record.has_friends() { " [friends]" } else { "" },
        );
    }

    ExitCode::SUCCESS
}
