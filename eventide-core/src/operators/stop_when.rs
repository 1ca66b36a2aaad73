// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::collection::{Collection, NoCompleteHandler, NoErrorHandler};

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    /// Completes this collection, with an empty payload, on the first success
    /// of `stop`.
    ///
    /// Returns a handle to this same collection. `stop` only holds a weak
    /// reference to it.
    pub fn stop_when<S>(&self, stop: &Collection<S>) -> Self
    where
        S: Clone + Send + Sync + 'static,
    {
        let node = self.downgrade();
        stop.for_each(
            move |_| {
                if let Some(collection) = node.upgrade() {
                    trace!("stop signal received");
                    collection.accept_event_complete(Vec::new());
                }
            },
            None::<NoErrorHandler>,
            None::<NoCompleteHandler<S>>,
        );
        self.clone()
    }
}
