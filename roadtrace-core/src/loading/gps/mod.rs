//! GPS trace (CSV) processing

mod reader;

pub use reader::TraceReader;
