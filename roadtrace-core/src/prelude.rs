pub use crate::EARTH_RADIUS_KM;

// Re-export key components
pub use crate::diagnostics::{CaptureSink, Diagnostic, DiagnosticSink, Level, LogSink};
pub use crate::geodesic::distance;
pub use crate::loading::gps::TraceReader;
pub use crate::loading::osm::RoadGraphBuilder;
pub use crate::loading::{
    DirProvider, IngestConfig, IngestModel, MemoryProvider, ResourceProvider, create_ingest_model,
};
pub use crate::model::{GpsFix, Node, RoadGraph, TraceLog, Way};

// Core identifier types for the road network
pub use crate::NodeId;
pub use crate::WayId;
