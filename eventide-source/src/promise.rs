// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::{Collection, CollectionError};

/// Outcome handed to [`Promise::always`].
pub type Settlement<T> = Result<T, CollectionError>;

/// A one-shot asynchronous call.
///
/// Each hook fires at most once. Hooks registered after the call settled
/// fire immediately. For a given outcome, `done`/`fail` hooks fire before
/// `always` hooks.
pub trait Promise {
    type Output: Clone + Send + Sync + 'static;

    fn done(&self, callback: Box<dyn FnOnce(Self::Output) + Send>);

    fn fail(&self, callback: Box<dyn FnOnce(CollectionError) + Send>);

    fn always(&self, callback: Box<dyn FnOnce(Settlement<Self::Output>) + Send>);
}

/// Creates a collection mirroring a promise.
///
/// Fulfilment is accepted as a success and rejection as an error. Settlement
/// then completes the collection, with the fulfilled value as payload or with
/// an empty payload after a rejection.
pub fn from_promise<P>(promise: &P) -> Collection<P::Output>
where
    P: Promise,
{
    let collection = Collection::<P::Output>::new();

    let sink = collection.clone();
    promise.done(Box::new(move |value: P::Output| sink.accept_event_success(value)));

    let sink = collection.clone();
    promise.fail(Box::new(move |error: CollectionError| sink.accept_event_error(error)));

    let sink = collection.clone();
    promise.always(Box::new(move |settlement: Settlement<P::Output>| {
        let payload = match settlement {
            Ok(value) => vec![value],
            Err(_) => Vec::new(),
        };
        trace!("promise settled");
        sink.accept_event_complete(payload);
    }));

    collection
}
