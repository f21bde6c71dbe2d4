use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use structured_logger::Builder;
use structured_logger::json::new_writer;

use roadtrace_core::diagnostics::LogSink;
use roadtrace_core::geodesic;
use roadtrace_core::loading::{IngestConfig, create_ingest_model};
use roadtrace_core::model::TraceLog;

/// Road network and GPS trace ingestion for map matching
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the run configuration (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// Abort when the extract contains unresolvable node references
    #[arg(long)]
    strict: bool,
}

/// On-disk run configuration
#[derive(Debug, Deserialize)]
struct RunConfig {
    /// Path to the map extract document
    osm: PathBuf,
    /// Directory the trace file names are resolved against
    trace_dir: PathBuf,
    /// Trace file names, reported in this order
    traces: Vec<String>,
    #[serde(default)]
    strict_refs: bool,
}

fn setup_logging() {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    Builder::with_level(&level)
        .with_target_writer("*", new_writer(std::io::stdout()))
        .init();
}

fn load_run_config(path: &Path) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    let run = match load_run_config(&cli.config) {
        Ok(run) => run,
        Err(err) => {
            log::error!(
                "Cannot load run configuration {}: {err}",
                cli.config.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let config = IngestConfig {
        osm_path: run.osm,
        trace_dir: run.trace_dir,
        trace_files: run.traces,
        strict_refs: run.strict_refs || cli.strict,
    };

    let model = match create_ingest_model(&config, &LogSink) {
        Ok(model) => model,
        Err(err) => {
            log::error!("Ingestion failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    for trace in &model.traces {
        report_trace(trace);
    }

    ExitCode::SUCCESS
}

/// One summary line per trace, in batch order.
fn report_trace(trace: &TraceLog) {
    if trace.is_empty() {
        log::warn!("{}: no GPS fixes detected", trace.source);
        return;
    }

    let km: f64 = trace
        .fixes
        .windows(2)
        .map(|pair| {
            geodesic::distance(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum();
    log::info!(
        "{}: {} fixes, {km:.3} km along the recorded path",
        trace.source,
        trace.len()
    );
}
