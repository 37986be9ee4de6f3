use thiserror::Error;

use crate::graph::VInt;

/// Errors surfaced by graph construction and community extraction.
#[derive(Error, Debug)]
pub enum SlpaError {
    #[error("malformed edge at line {line}: {content:?}")]
    MalformedEdge { line: usize, content: String },

    #[error("vertex {0} not found in the graph")]
    NotFound(VInt),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
