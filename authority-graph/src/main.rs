use std::fs;

use authority_graph::{AnalysisError, Settings};
use authority_graph_builder::GraphBuilder;
use dotenv::dotenv;
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Main entry point for the Authority Graph application.
///
/// Loads configuration from the environment, reads the raw authority event
/// file, builds the per-wallet graph, and writes it to the configured
/// destination (or stdout when none is set). Every failure path is logged
/// here before the error propagates out.
///
/// # Returns
///
/// A `Result` indicating success or an `AnalysisError` if configuration,
/// ingestion, the build itself, or output emission fails.
fn main() -> Result<(), AnalysisError> {
    dotenv().ok();
    init_tracing();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("failed to load configuration: {e}");
            return Err(e);
        }
    };

    if let Err(e) = run(&settings) {
        error!(events_path = %settings.events_path, "authority graph run failed: {e}");
        return Err(e);
    }

    Ok(())
}

/// Reads the event file, builds the graph, and emits it.
fn run(settings: &Settings) -> Result<(), AnalysisError> {
    let raw = fs::read_to_string(&settings.events_path)?;
    let input: Value = serde_json::from_str(&raw)?;

    let graph = GraphBuilder::new().build_authority_graph_from_value(&input)?;

    info!(
        events_path = %settings.events_path,
        wallets = graph.len(),
        "built authority graph"
    );

    let rendered = serde_json::to_string_pretty(&graph)?;
    match &settings.output_path {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output = %path, "authority graph written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "authority_graph=info,authority_graph_builder=info".into()
        }))
        .init();
}
