// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::collection::Collection;
use crate::collection_error::CollectionError;

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    /// Returns a new collection carrying `on_success(value)` for every success.
    ///
    /// Errors are forwarded through `on_error` and completions through
    /// `on_complete`; a channel whose transform is `None` is not forwarded.
    /// Each transform runs once per source event.
    ///
    /// # Example
    ///
    /// ```
    /// use eventide_core::{Collection, NoCompleteHandler, NoErrorHandler, NoErrorMap};
    /// use std::sync::{Arc, Mutex};
    ///
    /// let numbers = Collection::<i32>::new();
    /// let labels = numbers.map(
    ///     |n| format!("#{n}"),
    ///     None::<NoErrorMap>,
    ///     Some(|done: Vec<i32>| done.into_iter().map(|n| n.to_string()).collect::<Vec<_>>()),
    /// );
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    /// labels.for_each(
    ///     move |label| sink.lock().unwrap().push(label),
    ///     None::<NoErrorHandler>,
    ///     None::<NoCompleteHandler<String>>,
    /// );
    ///
    /// numbers.accept_event_success(7);
    /// assert_eq!(*seen.lock().unwrap(), vec!["#7".to_string()]);
    /// ```
    pub fn map<U, F, FE, FC>(
        &self,
        on_success: F,
        on_error: Option<FE>,
        on_complete: Option<FC>,
    ) -> Collection<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
        FE: Fn(CollectionError) -> CollectionError + Send + Sync + 'static,
        FC: Fn(Vec<T>) -> Vec<U> + Send + Sync + 'static,
    {
        let downstream = Collection::new();

        let on_next = {
            let downstream = downstream.clone();
            move |value| downstream.accept_event_success(on_success(value))
        };
        let on_error = on_error.map(|transform| {
            let downstream = downstream.clone();
            move |error| downstream.accept_event_error(transform(error))
        });
        let on_complete = on_complete.map(|transform| {
            let downstream = downstream.clone();
            move |payload| downstream.accept_event_complete(transform(payload))
        });

        self.for_each(on_next, on_error, on_complete);
        downstream
    }
}
