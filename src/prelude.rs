//! Prelude module for convenient imports
//!
//! Import everything you need with: `use loadstate::prelude::*;`

// Domain types
pub use crate::domain::{
    ApiError, ClassifiedError, DEFAULT_ERROR_MESSAGE, ErrorCode, Resource, SourceError,
};

// Classification
pub use crate::engine::{classify, classify_failure};

// Platform collaborators
pub use crate::platform::{
    ChannelToaster, ConnectivityProvider, DefaultStrings, NetworkState, TcpConnectivity,
    SharedConnectivity, StringKey, StringProvider, StringTable, Toast, ToastDuration, Toaster,
    TracingToaster, show_toast,
};

// Sink types
pub use crate::sink::{ResourceReceiver, ResourceSink, WatchSink};

// Streaming types
pub use crate::streaming::{
    MAX_RETRIES, NeverRetry, PipelineReport, ResultPipeline, RetryOnSessionExpired, RetryPolicy,
    RetryStream,
};

// Presentation
pub use crate::presentation::{ResourceView, observe, render};

// App types
pub use crate::app::{AppError, CliApp, Scenario};
