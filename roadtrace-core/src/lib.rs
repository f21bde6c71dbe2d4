//! Ingestion core for a GPS map-matching pipeline.
//!
//! Builds an immutable road network graph from an OSM XML extract,
//! reads per-vehicle GPS trace files into ordered fix sequences, and
//! provides the spherical distance primitive downstream matching
//! stages share. Matching itself lives elsewhere, nothing in this
//! crate snaps fixes to roads.

pub mod diagnostics;
pub mod error;
pub mod geodesic;
pub mod loading;
pub mod model;
pub mod prelude;

pub use error::Error;
pub use geodesic::EARTH_RADIUS_KM;
pub use loading::IngestModel;

// Core identifier types for the road network
pub use model::NodeId;
pub use model::WayId;
