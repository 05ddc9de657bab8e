pub mod traits;
pub mod watch;

// Re-export commonly used types
pub use traits::ResourceSink;
pub use watch::{ResourceReceiver, WatchSink};
