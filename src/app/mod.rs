pub mod cli;
pub mod error;
pub mod scenario;

// Re-export commonly used types
pub use cli::{CliApp, RawArgs};
pub use error::AppError;
pub use scenario::Scenario;
