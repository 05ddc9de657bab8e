use tracing::warn;

use crate::domain::{ApiError, ClassifiedError, DEFAULT_ERROR_MESSAGE, ErrorCode, Resource, SourceError};
use crate::platform::{NetworkState, StringKey, StringProvider};

/// Map a raw failure onto the UI taxonomy
///
/// API errors pass through with their own message. A failed host lookup
/// means "no connection" only when the network is actually down; every
/// other failure becomes an unreachable-service error with the default
/// message.
pub fn classify(error: SourceError, network: NetworkState) -> (ClassifiedError, String) {
    match error {
        SourceError::Api(api) => {
            let message = api.message.clone();
            (ClassifiedError::Api(api), message)
        }
        SourceError::UnknownHost(_) if !network.is_connected_or_connecting() => (
            ClassifiedError::NoConnection,
            DEFAULT_ERROR_MESSAGE.to_string(),
        ),
        other => (
            ClassifiedError::unreachable(other),
            DEFAULT_ERROR_MESSAGE.to_string(),
        ),
    }
}

/// Classify straight into a failed `Resource`
pub fn classify_failure<T>(error: SourceError, network: NetworkState) -> Resource<T> {
    let (error, message) = classify(error, network);
    Resource::fail(error, message)
}

impl ClassifiedError {
    /// Display form of a stored failure, with localized text for the
    /// connection errors
    pub fn to_api_error<S>(&self, strings: &S) -> ApiError
    where
        S: StringProvider + ?Sized,
    {
        match self {
            ClassifiedError::Api(api) => api.clone(),
            ClassifiedError::NoConnection => ApiError::new(
                ErrorCode::NoConnection,
                strings.get(StringKey::ErrorNoConnection),
                false,
            ),
            ClassifiedError::UnreachableService { cause } => {
                warn!(error = %cause, "service unreachable");
                ApiError::new(
                    ErrorCode::UnableToReachService,
                    strings.get(StringKey::ErrorUnableToConnect),
                    false,
                )
            }
        }
    }
}
