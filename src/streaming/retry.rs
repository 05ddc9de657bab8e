use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, ready};
use pin_project_lite::pin_project;
use tracing::debug;

use super::policy::RetryPolicy;
use crate::domain::SourceError;

/// Upper bound on restarts per run, whatever the policy says
pub const MAX_RETRIES: u32 = 1;

pin_project! {
    /// Stream that restarts its source from scratch on a retryable failure
    ///
    /// The producer is invoked once on construction and once more per
    /// accepted retry. Items already yielded before a restart are not
    /// taken back.
    #[must_use = "streams do nothing unless polled"]
    pub struct RetryStream<F, S, P> {
        #[pin]
        current: S,
        producer: F,
        policy: P,
        retries: u32,
    }
}

impl<F, S, P> RetryStream<F, S, P>
where
    F: FnMut() -> S,
{
    pub fn new(mut producer: F, policy: P) -> Self {
        let current = producer();
        Self {
            current,
            producer,
            policy,
            retries: 0,
        }
    }

    /// Retries made so far
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Number of times the producer has been invoked
    pub fn attempts(&self) -> u32 {
        self.retries + 1
    }
}

impl<F, S, P, T, E> Stream for RetryStream<F, S, P>
where
    F: FnMut() -> S,
    S: Stream<Item = Result<T, E>>,
    E: Into<SourceError>,
    P: RetryPolicy,
{
    type Item = Result<T, SourceError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.current.as_mut().poll_next(cx)) {
                Some(Ok(value)) => return Poll::Ready(Some(Ok(value))),
                Some(Err(error)) => {
                    let error = error.into();
                    if *this.retries < MAX_RETRIES && this.policy.should_retry(&error, *this.retries) {
                        *this.retries += 1;
                        debug!(retry = *this.retries, error = %error, "restarting source");
                        this.current.set((this.producer)());
                        continue;
                    }
                    return Poll::Ready(Some(Err(error)));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}
