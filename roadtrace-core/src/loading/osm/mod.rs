//! Map extract (OSM XML) processing

mod parser;
mod processor;

pub use processor::RoadGraphBuilder;
