pub mod api_error;
pub mod error;
pub mod resource;

// Re-export commonly used types
pub use api_error::{ApiError, ErrorCode};
pub use error::{ClassifiedError, DEFAULT_ERROR_MESSAGE, SourceError};
pub use resource::Resource;
