// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::collection::Collection;
use crate::collection_error::CollectionError;

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    /// Returns a new collection carrying the successes for which `predicate`
    /// holds. Rejected values vanish without any signal.
    ///
    /// Errors and completions follow [`map`](Self::map): forwarded through the
    /// given transform, dropped when it is `None`.
    pub fn filter<P, FE, FC>(
        &self,
        predicate: P,
        on_error: Option<FE>,
        on_complete: Option<FC>,
    ) -> Collection<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        FE: Fn(CollectionError) -> CollectionError + Send + Sync + 'static,
        FC: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        let downstream = Collection::new();

        let on_next = {
            let downstream = downstream.clone();
            move |value| {
                if predicate(&value) {
                    downstream.accept_event_success(value);
                }
            }
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
