use std::io;
use std::sync::Arc;

use thiserror::Error;

use super::api_error::{ApiError, ErrorCode};

/// Message attached to every failure that did not come from the API
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong, please try again later";

/// Raw failure yielded by a source stream
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Unable to resolve host: {0}")]
    UnknownHost(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Wrap any other error type
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SourceError::Other(Box::new(error))
    }

    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            SourceError::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        self.as_api_error().is_some_and(ApiError::is_session_expired)
    }

    pub fn is_unknown_host(&self) -> bool {
        matches!(self, SourceError::UnknownHost(_))
    }
}

/// UI-safe failure taxonomy carried by every `Resource::Failure`
#[derive(Error, Debug, Clone)]
pub enum ClassifiedError {
    #[error(transparent)]
    Api(ApiError),

    #[error("No network connection")]
    NoConnection,

    #[error("Unable to reach service: {cause}")]
    UnreachableService {
        #[source]
        cause: Arc<SourceError>,
    },
}

impl ClassifiedError {
    pub fn unreachable(cause: SourceError) -> Self {
        ClassifiedError::UnreachableService {
            cause: Arc::new(cause),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ClassifiedError::Api(err) => err.code.clone(),
            ClassifiedError::NoConnection => ErrorCode::NoConnection,
            ClassifiedError::UnreachableService { .. } => ErrorCode::UnableToReachService,
        }
    }
}
