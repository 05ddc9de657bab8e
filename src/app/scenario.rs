use std::str::FromStr;
use std::time::Duration;

use futures::{Stream, StreamExt, stream};

use super::error::AppError;
use crate::domain::{ApiError, SourceError};
use crate::platform::NetworkState;

/// Scripted load used by the demo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Three articles, no failure
    Ok,
    /// Session expires once, the retry succeeds
    SessionExpired,
    /// Session expires on both attempts
    SessionExpiredTwice,
    /// Host lookup fails with the network down
    Offline,
    /// Host lookup fails although the network is up
    Unreachable,
    /// The API rejects the request
    ApiError,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Ok,
        Scenario::SessionExpired,
        Scenario::SessionExpiredTwice,
        Scenario::Offline,
        Scenario::Unreachable,
        Scenario::ApiError,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Ok => "ok",
            Scenario::SessionExpired => "session-expired",
            Scenario::SessionExpiredTwice => "session-expired-twice",
            Scenario::Offline => "offline",
            Scenario::Unreachable => "unreachable",
            Scenario::ApiError => "api-error",
        }
    }

    /// Network state the host reports while this scenario runs
    pub fn network(&self) -> NetworkState {
        match self {
            Scenario::Offline => NetworkState::Disconnected,
            _ => NetworkState::Connected,
        }
    }

    /// Items the source yields on the given attempt (1-based)
    pub fn script(&self, attempt: u32) -> Vec<Result<String, SourceError>> {
        let articles = || (1..=3).map(|i| Ok(format!("article {i}"))).collect::<Vec<_>>();
        let expired = || Err(SourceError::Api(ApiError::session_expired("Session expired")));
        let unknown_host = || Err(SourceError::UnknownHost("api.example.com".to_string()));

        match (self, attempt) {
            (Scenario::Ok, _) => articles(),
            (Scenario::SessionExpired, 1) => vec![expired()],
            (Scenario::SessionExpired, _) => articles(),
            (Scenario::SessionExpiredTwice, _) => vec![expired()],
            (Scenario::Offline | Scenario::Unreachable, _) => vec![unknown_host()],
            (Scenario::ApiError, _) => vec![
                Ok("article 1".to_string()),
                Err(SourceError::Api(ApiError::new(
                    "ERROR_FORBIDDEN",
                    "You are not allowed to read this feed",
                    false,
                ))),
            ],
        }
    }

    /// Source stream for one attempt, pacing items so observers see each one
    pub fn source(self, attempt: u32, pace: Duration) -> impl Stream<Item = Result<String, SourceError>> {
        stream::iter(self.script(attempt)).then(move |item| async move {
            tokio::time::sleep(pace).await;
            item
        })
    }
}

impl FromStr for Scenario {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| AppError::UnknownScenario(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse::<Scenario>().unwrap(), scenario);
        }
    }

    #[test]
    fn rejects_unknown_name() {
        match "flaky".parse::<Scenario>() {
            Err(AppError::UnknownScenario(name)) => assert_eq!(name, "flaky"),
            _ => panic!("Expected UnknownScenario error"),
        }
    }

    #[test]
    fn session_expired_recovers_on_second_attempt() {
        let first = Scenario::SessionExpired.script(1);
        assert!(matches!(first.as_slice(), [Err(e)] if e.is_session_expired()));

        let second = Scenario::SessionExpired.script(2);
        assert!(second.iter().all(Result::is_ok));
    }

    #[tokio::test]
    async fn source_yields_script() {
        let items: Vec<_> = Scenario::Ok.source(1, Duration::ZERO).collect().await;
        assert_eq!(items.len(), 3);
    }
}
