use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use fairway_core::round::Round;
use fairway_engine::{EngineConfig, aggregate};
use fairway_handicap::calculate_handicap_index;

const USAGE: &str = "usage: fairway <round.json> | fairway handicap <differential>...";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.first().map(String::as_str) {
        Some("handicap") => handicap(&args[1..]),
        Some(path) => score_round(path),
        None => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        },
    };

    match output {
        Some(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        None => ExitCode::FAILURE,
    }
}

fn score_round(path: &str) -> Option<String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| tracing::error!(path, error = %e, "Failed to read round"))
        .ok()?;
    let round: Round = serde_json::from_str(&contents)
        .map_err(|e| tracing::error!(path, error = %e, "Failed to parse round"))
        .ok()?;

    let config = EngineConfig::load();
    tracing::info!(
        round_id = %round.id,
        players = round.players().len(),
        modes = round.modes().len(),
        "Scoring round"
    );
    let results = aggregate(&round, &config);
    serde_json::to_string_pretty(&results)
        .map_err(|e| tracing::error!(error = %e, "Failed to serialize results"))
        .ok()
}

fn handicap(args: &[String]) -> Option<String> {
    let mut differentials = Vec::with_capacity(args.len());
    for arg in args {
        match arg.parse::<f64>() {
            Ok(d) if d.is_finite() => differentials.push(d),
            _ => {
                tracing::error!(value = %arg, "Not a differential");
                return None;
            },
        }
    }
    let result = calculate_handicap_index(&differentials);
    tracing::info!(rounds = differentials.len(), index = ?result.index, "Calculated handicap index");
    serde_json::to_string_pretty(&result)
        .map_err(|e| tracing::error!(error = %e, "Failed to serialize handicap"))
        .ok()
}
