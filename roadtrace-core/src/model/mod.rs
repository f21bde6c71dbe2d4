//! Data model for the map-matching ingestion layer
//!
//! Contains types for the road network and recorded GPS traces.

pub mod road;
pub mod trace;

// Re-export of basic types for convenience
pub use road::{Node, NodeId, RoadGraph, Way, WayId};
pub use trace::{GpsFix, TraceLog};
