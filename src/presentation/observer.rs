use crate::domain::{ApiError, Resource};
use crate::platform::StringProvider;
use crate::sink::ResourceReceiver;

/// Callbacks for each state a `Resource` can be in
pub trait ResourceView<T> {
    fn on_loading(&mut self);

    fn on_success(&mut self, value: &T);

    /// Receives the display form of the failure
    fn on_failure(&mut self, error: ApiError);
}

/// Dispatch one sink value to the matching callback; an empty slot is ignored
pub fn render<T, S, V>(state: Option<&Resource<T>>, strings: &S, view: &mut V)
where
    S: StringProvider + ?Sized,
    V: ResourceView<T> + ?Sized,
{
    match state {
        Some(Resource::Loading) => view.on_loading(),
        Some(Resource::Success(value)) => view.on_success(value),
        Some(Resource::Failure { error, .. }) => view.on_failure(error.to_api_error(strings)),
        None => {}
    }
}

/// Render the current value and every later change until the sink is dropped
///
/// Intermediate values published faster than the view renders are skipped;
/// only the latest state is guaranteed to be seen.
pub async fn observe<T, S, V>(mut receiver: ResourceReceiver<T>, strings: &S, view: &mut V)
where
    S: StringProvider + ?Sized,
    V: ResourceView<T> + ?Sized,
{
    loop {
        {
            let state = receiver.borrow_and_update();
            render((*state).as_ref(), strings, view);
        }
        if receiver.changed().await.is_err() {
            break;
        }
    }
}
