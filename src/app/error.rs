use std::io;
use thiserror::Error;

/// Top-level errors of the demo binary
///
/// Load failures never show up here; the pipeline turns them into
/// `Resource::Failure` values.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Observer task failed: {0}")]
    Observer(#[from] tokio::task::JoinError),
}
