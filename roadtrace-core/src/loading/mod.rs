//! This module is responsible for loading the two geospatial inputs
//! (map extract, GPS traces) and assembling the in-memory model.

mod builder;
mod config;
pub mod gps;
pub mod osm;
mod resource;

pub use builder::{IngestModel, create_ingest_model};
pub use config::IngestConfig;
pub use resource::{DirProvider, MemoryProvider, ResourceProvider};
