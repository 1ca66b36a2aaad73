// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use eventide_core::{Collection, CollectionError, Result};
use eventide_runtime::Scheduler;

/// Creates a collection fed by `future`, driven on the current tokio runtime.
///
/// `Ok(value)` is accepted as a success and then completes the collection
/// with `vec![value]`; `Err(error)` is accepted as an error and then completes
/// it with an empty payload. Dissolving the collection before the future
/// resolves aborts it.
///
/// # Errors
///
/// Returns [`CollectionError::Runtime`] when called outside a tokio runtime.
///
/// # Example
///
/// ```
/// use eventide_core::Event;
/// use eventide_source::from_future;
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> eventide_core::Result<()> {
/// let answer = from_future(async { Ok::<_, eventide_core::CollectionError>(42) })?;
/// let mut events = answer.to_stream();
///
/// assert_eq!(events.next().await, Some(Event::Success(42)));
/// assert_eq!(events.next().await, Some(Event::Complete(vec![42])));
/// # Ok(())
/// # }
/// ```
pub fn from_future<T, E, F>(future: F) -> Result<Collection<T>>
where
    T: Clone + Send + Sync + 'static,
    E: Into<CollectionError> + Send + 'static,
    F: Future<Output = core::result::Result<T, E>> + Send + 'static,
{
    let scheduler = Scheduler::current()?;
    let collection = Collection::<T>::new();

    let sink = collection.clone();
    let task = scheduler.spawn(async move {
        match future.await {
            Ok(value) => {
                sink.accept_event_success(value.clone());
                sink.accept_event_complete(vec![value]);
            }
            Err(error) => {
                sink.accept_event_error(error.into());
                sink.accept_event_complete(Vec::new());
            }
        }
    });

    collection.set_deconstructor(move || {
        trace!("releasing future task, finished: {}", task.is_finished());
        task.cancel();
    });
    Ok(collection)
}
