pub mod classifier;

// Re-export commonly used types
pub use classifier::{classify, classify_failure};
