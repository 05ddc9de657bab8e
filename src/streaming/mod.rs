pub mod pipeline;
pub mod policy;
pub mod retry;

// Re-export commonly used types
pub use pipeline::{PipelineReport, ResultPipeline};
pub use policy::{NeverRetry, RetryOnSessionExpired, RetryPolicy};
pub use retry::{MAX_RETRIES, RetryStream};
