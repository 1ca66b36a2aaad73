// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! In-memory event target with event delegation.

use eventide_source::{EventTarget, Listener};
use parking_lot::Mutex;
use std::sync::Arc;

/// Identifies one listener attached to a [`FakeElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Entry<E> {
    id: ListenerId,
    event_name: String,
    selector: Option<String>,
    listener: Listener<E>,
}

struct Listeners<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

/// An element whose events are fired by hand with [`trigger`](Self::trigger).
///
/// Clones share the same listener list.
pub struct FakeElement<E> {
    listeners: Arc<Mutex<Listeners<E>>>,
}

impl<E> Clone for FakeElement<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl<E: Clone + Send + Sync + 'static> Default for FakeElement<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Send + Sync + 'static> FakeElement<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Listeners {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Fires `event_name` as if it originated from a descendant matching
    /// `origin` (`None` for the element itself).
    ///
    /// Delegated listeners only see events whose origin equals their
    /// selector; direct listeners see every origin. Listeners run in
    /// attachment order, outside the internal lock. Returns how many ran.
    pub fn trigger(&self, event_name: &str, origin: Option<&str>, event: E) -> usize {
        let matching: Vec<Listener<E>> = self
            .listeners
            .lock()
            .entries
            .iter()
            .filter(|entry| entry.event_name == event_name)
            .filter(|entry| match entry.selector.as_deref() {
                None => true,
                Some(selector) => origin == Some(selector),
            })
            .map(|entry| entry.listener.clone())
            .collect();

        for listener in &matching {
            listener(event.clone());
        }
        matching.len()
    }

    /// Number of attached listeners, across all event names.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }
}

impl<E: Clone + Send + Sync + 'static> EventTarget for FakeElement<E> {
    type Event = E;
    type Registration = ListenerId;

    fn on(&self, event_name: &str, selector: Option<&str>, listener: Listener<E>) -> ListenerId {
        let mut listeners = self.listeners.lock();
        let id = ListenerId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push(Entry {
            id,
            event_name: event_name.to_owned(),
            selector: selector.map(str::to_owned),
            listener,
        });
        id
    }

    fn off(&self, registration: ListenerId) {
        self.listeners
            .lock()
            .entries
            .retain(|entry| entry.id != registration);
    }
}
