// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::Collection;
use std::sync::Arc;

/// Callback attached to an [`EventTarget`].
pub type Listener<E> = Arc<dyn Fn(E) + Send + Sync>;

/// Something listeners can be attached to by event name.
///
/// `selector` restricts the listener to events originating from matching
/// descendants (event delegation); `None` listens on the target itself.
/// The returned registration identifies exactly one attachment and is
/// handed back to [`off`](Self::off) to detach it.
pub trait EventTarget: Clone + Send + Sync + 'static {
    /// Payload handed to listeners.
    type Event: Clone + Send + Sync + 'static;
    /// Token for one attachment.
    type Registration: Send + 'static;

    fn on(
        &self,
        event_name: &str,
        selector: Option<&str>,
        listener: Listener<Self::Event>,
    ) -> Self::Registration;

    fn off(&self, registration: Self::Registration);
}

/// Creates a collection that receives every `event_name` occurrence on
/// `target` as a success.
///
/// The collection's teardown detaches the listener, so it runs on
/// [`dissolve`](Collection::dissolve) or on completion. Until then the target
/// keeps the collection alive.
///
/// # Example
///
/// ```
/// use eventide_core::{NoCompleteHandler, NoErrorHandler};
/// use eventide_source::from_dom_event;
/// use eventide_test_utils::FakeElement;
/// use std::sync::{Arc, Mutex};
///
/// let button = FakeElement::<u32>::new();
/// let clicks = from_dom_event(&button, "click", None);
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// clicks.for_each(
///     move |x| sink.lock().unwrap().push(x),
///     None::<NoErrorHandler>,
///     None::<NoCompleteHandler<u32>>,
/// );
///
/// button.trigger("click", None, 3);
/// clicks.dissolve();
/// button.trigger("click", None, 4);
///
/// assert_eq!(*seen.lock().unwrap(), vec![3]);
/// ```
pub fn from_dom_event<D>(target: &D, event_name: &str, selector: Option<&str>) -> Collection<D::Event>
where
    D: EventTarget,
{
    let collection = Collection::<D::Event>::new();

    let sink = collection.clone();
    let registration = target.on(
        event_name,
        selector,
        Arc::new(move |event: D::Event| sink.accept_event_success(event)),
    );

    let target = target.clone();
    let _name = event_name.to_owned();
    collection.set_deconstructor(move || {
        debug!("detaching '{}' listener", _name);
        target.off(registration);
    });
    collection
}
