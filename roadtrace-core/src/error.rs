use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Resource not found: {0}")]
    ResourceMissing(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] xml::reader::Error),
    #[error("Invalid attribute: {0}")]
    AttributeFormat(String),
    #[error("Way {way_id} references missing node {node_id}")]
    DanglingNodeRef { way_id: i64, node_id: i64 },
    #[error("Unrecoverable error: {0}")]
    UnrecoverableError(&'static str),
}
