use crate::domain::SourceError;

/// Decides whether a failed source may be restarted
pub trait RetryPolicy: Send + Sync {
    /// `attempt` is the number of retries already made in this run
    fn should_retry(&self, error: &SourceError, attempt: u32) -> bool;
}

impl<P: RetryPolicy + ?Sized> RetryPolicy for &P {
    fn should_retry(&self, error: &SourceError, attempt: u32) -> bool {
        (**self).should_retry(error, attempt)
    }
}

/// Restart once when the API reports an expired session (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct RetryOnSessionExpired;

impl RetryPolicy for RetryOnSessionExpired {
    fn should_retry(&self, error: &SourceError, attempt: u32) -> bool {
        attempt == 0 && error.is_session_expired()
    }
}

/// Never restart; the first failure is terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn should_retry(&self, _error: &SourceError, _attempt: u32) -> bool {
        false
    }
}
