//! Configuration of one ingestion run

use std::path::PathBuf;

/// Describes the inputs for building an ingestion model
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Path to the map extract document (OSM XML)
    pub osm_path: PathBuf,
    /// Directory trace resource names are resolved against
    pub trace_dir: PathBuf,
    /// Trace resources to read, in reporting order
    pub trace_files: Vec<String>,
    /// Abort the graph build when a way references a missing node
    /// instead of dropping the reference
    pub strict_refs: bool,
}
