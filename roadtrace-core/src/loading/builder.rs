use std::fs::File;
use std::io::BufReader;

use super::config::IngestConfig;
use super::gps::TraceReader;
use super::osm::RoadGraphBuilder;
use super::resource::DirProvider;
use crate::diagnostics::DiagnosticSink;
use crate::error::Error;
use crate::model::{RoadGraph, TraceLog};

/// Everything one ingestion run produces
#[derive(Debug, Clone)]
pub struct IngestModel {
    pub road_graph: RoadGraph,
    /// One log per configured trace resource, in configuration order
    pub traces: Vec<TraceLog>,
}

/// Creates an ingestion model based on the provided configuration.
///
/// The road graph is built on a worker thread while trace resources are
/// read on the calling thread. Trace problems shrink individual logs
/// and never fail the run, a road graph failure fails the whole call.
///
/// # Errors
///
/// Returns an error if the map extract is missing, unreadable,
/// malformed, or, in strict mode, references missing nodes.
pub fn create_ingest_model(
    config: &IngestConfig,
    sink: &dyn DiagnosticSink,
) -> Result<IngestModel, Error> {
    validate_config(config)?;

    sink.info(&format!(
        "Processing map extract: {}",
        config.osm_path.display()
    ));
    if config.trace_files.is_empty() {
        sink.warn("No trace resources configured");
    }

    let (graph_result, traces) = std::thread::scope(|scope| {
        // Graph construction is CPU-bound, run it off the calling thread
        let graph_handle = scope.spawn(|| build_road_graph(config, sink));

        sink.info(&format!(
            "Reading {} trace resources from {}",
            config.trace_files.len(),
            config.trace_dir.display()
        ));
        let provider = DirProvider::new(&config.trace_dir);
        let traces = TraceReader::new(sink).read_all(&provider, &config.trace_files);

        let graph_result = match graph_handle.join() {
            Ok(result) => result,
            Err(_) => Err(Error::UnrecoverableError("Map extract thread panicked")),
        };
        (graph_result, traces)
    });
    let road_graph = graph_result?;

    let total_fixes: usize = traces.iter().map(TraceLog::len).sum();
    sink.info(&format!(
        "Ingestion model created: {} nodes, {} ways, {total_fixes} fixes in {} traces",
        road_graph.node_count(),
        road_graph.way_count(),
        traces.len()
    ));

    Ok(IngestModel { road_graph, traces })
}

fn build_road_graph(config: &IngestConfig, sink: &dyn DiagnosticSink) -> Result<RoadGraph, Error> {
    let file = File::open(&config.osm_path)?;
    RoadGraphBuilder::new(sink)
        .strict_refs(config.strict_refs)
        .build(BufReader::new(file))
}

fn validate_config(config: &IngestConfig) -> Result<(), Error> {
    if !config.osm_path.exists() {
        return Err(Error::ResourceMissing(
            config.osm_path.display().to_string(),
        ));
    }

    Ok(())
}
