//! Error type for the fallible edges of the library (parsing, persistence, interactive play)

use thiserror::Error;

use crate::board::Vertex;

/// Errors raised outside the rules/search core.
///
/// Rule checks and search never fail; they answer with `bool`/`Option`.
#[derive(Debug, Error)]
pub enum TaratiError {
    #[error("unknown vertex '{0}'")]
    InvalidVertex(String),

    #[error("malformed move '{0}' (expected e.g. C1-B1)")]
    InvalidMove(String),

    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Vertex, to: Vertex },

    #[error("position JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
