use tokio::sync::watch;

use super::traits::ResourceSink;
use crate::domain::Resource;

/// Receiving side of a `WatchSink`
pub type ResourceReceiver<T> = watch::Receiver<Option<Resource<T>>>;

/// Observable single-slot sink backed by a tokio watch channel
///
/// The slot starts empty and holds the most recent `Resource` after the
/// first publish. Subscribers only ever see the latest value.
#[derive(Debug)]
pub struct WatchSink<T> {
    tx: watch::Sender<Option<Resource<T>>>,
}

impl<T> WatchSink<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Create a receiver that observes every subsequent write
    pub fn subscribe(&self) -> ResourceReceiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> WatchSink<T> {
    /// Snapshot of the value currently held
    pub fn current(&self) -> Option<Resource<T>> {
        self.tx.borrow().clone()
    }
}

impl<T> Default for WatchSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> ResourceSink<T> for WatchSink<T> {
    fn publish(&self, resource: Resource<T>) {
        // send_replace stores the value even when nobody is subscribed
        self.tx.send_replace(Some(resource));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClassifiedError;

    #[test]
    fn starts_empty() {
        let sink = WatchSink::<u32>::new();
        assert!(sink.current().is_none());
    }

    #[test]
    fn publish_without_subscribers_is_kept() {
        let sink = WatchSink::new();
        sink.publish(Resource::success(5u32));
        assert_eq!(sink.current().and_then(Resource::into_success), Some(5));
    }

    #[test]
    fn last_write_wins() {
        let sink = WatchSink::new();
        sink.publish(Resource::success(1u32));
        sink.publish(Resource::success(2u32));
        sink.publish(Resource::fail(ClassifiedError::NoConnection, "offline"));

        let current = sink.current().unwrap();
        assert!(current.is_failure());
    }

    #[tokio::test]
    async fn subscriber_sees_latest_value() {
        let sink = WatchSink::new();
        let mut rx = sink.subscribe();

        sink.publish(Resource::success("a".to_string()));
        sink.publish(Resource::success("b".to_string()));

        rx.changed().await.unwrap();
        let value = rx.borrow_and_update().clone();
        assert_eq!(value.and_then(Resource::into_success).as_deref(), Some("b"));
    }

    #[test]
    fn shared_through_arc() {
        let sink = std::sync::Arc::new(WatchSink::new());
        let writer: &dyn ResourceSink<u8> = &sink;
        writer.publish(Resource::success(9));
        assert_eq!(sink.current().and_then(Resource::into_success), Some(9));
    }
}
