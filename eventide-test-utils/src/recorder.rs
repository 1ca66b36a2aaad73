// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::{Collection, CollectionError, Event};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures everything a collection delivers, in delivery order.
///
/// Clones share the same log.
pub struct Recorder<T> {
    events: Arc<Mutex<Vec<Event<T>>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Recorder<T> {
    /// Subscribes to all three channels of `collection`.
    #[must_use]
    pub fn attach(collection: &Collection<T>) -> Self {
        let recorder = Self {
            events: Arc::new(Mutex::new(Vec::new())),
        };

        let on_success = recorder.clone();
        let on_error = recorder.clone();
        let on_complete = recorder.clone();
        collection.for_each(
            move |value| on_success.push(Event::Success(value)),
            Some(move |error: CollectionError| on_error.push(Event::Error(error))),
            Some(move |payload: Vec<T>| on_complete.push(Event::Complete(payload))),
        );
        recorder
    }

    fn push(&self, event: Event<T>) {
        self.events.lock().push(event);
    }

    /// Every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<Event<T>> {
        self.events.lock().clone()
    }

    #[must_use]
    pub fn successes(&self) -> Vec<T> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Success(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<CollectionError> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }

    /// Completion payloads; more than one entry means a node completed twice.
    #[must_use]
    pub fn completions(&self) -> Vec<Vec<T>> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Complete(payload) => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}
