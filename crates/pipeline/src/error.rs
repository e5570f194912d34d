use std::path::PathBuf;

use checkers_core::BoardError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::sink::SinkError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("root board for worker {worker} is invalid")]
    InvalidRoot {
        worker: usize,
        #[source]
        source: BoardError,
    },

    #[error("worker {worker} panicked: {message}")]
    Panicked { worker: usize, message: String },

    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed run summary")]
    Json(#[from] serde_json::Error),
}

/// The error and all of its sources on one line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
