use std::io;

use thiserror::Error;

/// Failures at the loading edge. The outlook pipeline itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read forecast document: {0}")]
    Io(#[from] io::Error),

    #[error("malformed forecast document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp '{0}' (expected YYYY-MM-DDTHH:MM)")]
    InvalidTimestamp(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
