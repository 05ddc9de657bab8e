use std::sync::Arc;

use crate::domain::Resource;

/// Externally observed single-slot holder for the latest pipeline result
///
/// Publishing replaces whatever the slot held before (last write wins).
pub trait ResourceSink<T>: Send + Sync {
    fn publish(&self, resource: Resource<T>);
}

impl<T, S> ResourceSink<T> for &S
where
    S: ResourceSink<T> + ?Sized,
{
    fn publish(&self, resource: Resource<T>) {
        (**self).publish(resource)
    }
}

impl<T, S> ResourceSink<T> for Arc<S>
where
    S: ResourceSink<T> + ?Sized,
{
    fn publish(&self, resource: Resource<T>) {
        (**self).publish(resource)
    }
}
