use std::future::Future;

use tracing::warn;

use super::error::AppError;
use crate::logging;

/// Argument parser used until `with_args` installs one: hands the raw
/// arguments through unchanged
pub type RawArgs = fn(Vec<String>) -> Result<Vec<String>, AppError>;

/// Reusable CLI application runner that handles:
/// - Logging setup (`RUST_LOG` or the configured default level)
/// - Argument parsing through the `with_args` hook
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp<P = RawArgs> {
    name: String,
    log_level: String,
    parse_args: P,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            log_level: "warn".to_string(),
            parse_args: Ok,
        }
    }
}

impl<P> CliApp<P> {
    /// Default log level when `RUST_LOG` is unset (defaults to "warn")
    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    /// Parse and validate the command line before the main function runs
    ///
    /// The parser receives every argument, program name included. A parse
    /// error is reported on stderr and exits with code 1.
    pub fn with_args<Q>(self, parse_args: Q) -> CliApp<Q> {
        CliApp {
            name: self.name,
            log_level: self.log_level,
            parse_args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the application and exit the process with the matching code
    ///
    /// `main_fn` receives the parsed arguments and a buffered stdout
    /// writer; it is responsible for flushing the writer.
    pub async fn run<A, F, Fut>(self, main_fn: F) -> !
    where
        P: FnOnce(Vec<String>) -> Result<A, AppError>,
        F: FnOnce(A, tokio::io::BufWriter<tokio::io::Stdout>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        logging::init(&self.log_level);

        let args = match (self.parse_args)(std::env::args().collect()) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}: {}", self.name, e);
                std::process::exit(1);
            }
        };
        let writer = tokio::io::BufWriter::new(tokio::io::stdout());

        tokio::select! {
            result = main_fn(args, writer) => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("{}: {}", self.name, e);
                        std::process::exit(1);
                    }
                }
            }
            signal_code = wait_for_signal() => {
                std::process::exit(signal_code);
            }
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) else {
            warn!("signal handlers unavailable");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => 143, // 128 + 15
            _ = sigint.recv() => 130,  // 128 + 2
            _ = sighup.recv() => 129,  // 128 + 1
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl+C handler unavailable");
            return std::future::pending().await;
        }
        130
    }
}
