use std::pin::pin;

use futures::{Stream, StreamExt};
use tracing::{debug, warn};

use super::policy::{RetryOnSessionExpired, RetryPolicy};
use super::retry::RetryStream;
use crate::domain::{Resource, SourceError};
use crate::engine::classify_failure;
use crate::platform::{ConnectivityProvider, NetworkState};
use crate::sink::ResourceSink;

/// Adapter that drains a source stream into a `ResourceSink`
///
/// Every item becomes a `Resource::Success`. The first terminal failure is
/// classified into a single
/// `Resource::Failure`, after which consumption stops. The connectivity
/// provider is queried, fresh, only when that failure is a failed host
/// lookup. Failures are never returned to the caller.
pub struct ResultPipeline<C, P = RetryOnSessionExpired>
where
    C: ConnectivityProvider,
    P: RetryPolicy,
{
    connectivity: C,
    retry_policy: P,
    emit_loading: bool,
}

impl<C> ResultPipeline<C, RetryOnSessionExpired>
where
    C: ConnectivityProvider,
{
    /// Create a pipeline with the default session-expiry retry policy
    ///
    /// # Example
    /// ```rust,ignore
    /// let pipeline = ResultPipeline::new(SharedConnectivity::default());
    /// let sink = WatchSink::new();
    ///
    /// pipeline.proceed(&sink, || client.fetch_articles()).await;
    /// ```
    pub fn new(connectivity: C) -> Self {
        Self {
            connectivity,
            retry_policy: RetryOnSessionExpired,
            emit_loading: false,
        }
    }
}

impl<C, P> ResultPipeline<C, P>
where
    C: ConnectivityProvider,
    P: RetryPolicy,
{
    /// Swap the retry policy (defaults to `RetryOnSessionExpired`)
    ///
    /// Whatever the policy, a run restarts its source at most once.
    pub fn with_retry_policy<Q: RetryPolicy>(self, retry_policy: Q) -> ResultPipeline<C, Q> {
        ResultPipeline {
            connectivity: self.connectivity,
            retry_policy,
            emit_loading: self.emit_loading,
        }
    }

    /// Publish `Resource::Loading` before the first attempt (defaults to false)
    pub fn with_loading(mut self, enabled: bool) -> Self {
        self.emit_loading = enabled;
        self
    }

    /// Run one load: consume the producer's stream and publish each outcome
    ///
    /// The producer must hand out a fresh stream on every call, since a
    /// retry starts over from scratch.
    pub async fn proceed<T, K, F, S, E>(&self, sink: &K, producer: F) -> PipelineReport
    where
        K: ResourceSink<T> + ?Sized,
        F: FnMut() -> S,
        S: Stream<Item = Result<T, E>>,
        E: Into<SourceError>,
    {
        if self.emit_loading {
            sink.publish(Resource::Loading);
        }

        let mut stream = pin!(RetryStream::new(producer, &self.retry_policy));
        let mut items = 0;
        let mut failed = false;

        while let Some(next) = stream.next().await {
            match next {
                Ok(value) => {
                    items += 1;
                    sink.publish(Resource::Success(value));
                }
                Err(error) => {
                    warn!(error = %error, "load failed");
                    // Only a failed host lookup depends on the network state
                    let network = if error.is_unknown_host() {
                        self.connectivity.network_state().await
                    } else {
                        NetworkState::Connected
                    };
                    sink.publish(classify_failure(error, network));
                    failed = true;
                    break;
                }
            }
        }

        let report = PipelineReport {
            attempts: stream.attempts(),
            items,
            failed,
        };
        debug!(?report, "load finished");
        report
    }
}

/// Summary of one `proceed` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    /// Times the producer was invoked (1 or 2)
    pub attempts: u32,
    /// Success values published
    pub items: usize,
    /// Whether the run ended with a published failure
    pub failed: bool,
}

impl PipelineReport {
    pub fn retried(&self) -> bool {
        self.attempts > 1
    }

    pub fn succeeded(&self) -> bool {
        !self.failed
    }
}
