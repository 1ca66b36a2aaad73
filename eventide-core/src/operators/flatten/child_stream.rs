// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::collection::Collection;
use crate::event::Event;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub(super) type ChildSink<T> = Arc<dyn Fn(Event<T>) + Send + Sync>;

static NEXT_CHILD_ID: AtomicU64 = AtomicU64::new(0);

/// Lifecycle of a child collection observed by flatten.
///
/// `Buffering` until the queue reaches the child, then `Replaying` while the
/// backlog is handed to the sink (events arriving meanwhile join the
/// backlog), then `Live` pass-through. The first error or completion relayed
/// to the sink moves it to `Finished`, which ignores everything.
enum ChildState<T> {
    Buffering(VecDeque<Event<T>>),
    Replaying {
        backlog: VecDeque<Event<T>>,
        sink: ChildSink<T>,
    },
    Live(ChildSink<T>),
    Finished,
}

/// Buffering handle to one child collection.
pub(super) struct ChildStream<T> {
    id: u64,
    state: Arc<Mutex<ChildState<T>>>,
}

impl<T> Clone for ChildStream<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: self.state.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> ChildStream<T> {
    /// Starts buffering `child`'s events immediately.
    ///
    /// A child that has already completed can never emit again and is
    /// buffered as completed.
    pub(super) fn observe(child: &Collection<T>) -> Self {
        let stream = Self {
            id: NEXT_CHILD_ID.fetch_add(1, Ordering::Relaxed),
            state: Arc::new(Mutex::new(ChildState::Buffering(VecDeque::new()))),
        };

        let relay = stream.clone();
        if !child.register_events(move |event| relay.offer(event)) {
            trace!("flatten observed an already completed child");
            stream.offer(Event::Complete(Vec::new()));
        }
        stream
    }

    pub(super) const fn id(&self) -> u64 {
        self.id
    }

    /// Whether a sink has been attached.
    pub(super) fn is_attached(&self) -> bool {
        !matches!(*self.state.lock(), ChildState::Buffering(_))
    }

    /// Attaches `sink`, replays the backlog in arrival order, then switches to
    /// live pass-through. Attaching twice has no effect.
    pub(super) fn attach(&self, sink: ChildSink<T>) {
        {
            let mut state = self.state.lock();
            match mem::replace(&mut *state, ChildState::Finished) {
                ChildState::Buffering(backlog) => {
                    *state = ChildState::Replaying { backlog, sink };
                }
                other => {
                    *state = other;
                    return;
                }
            }
        }

        while let Some((event, sink)) = self.next_replayed() {
            sink(event);
        }
    }

    fn next_replayed(&self) -> Option<(Event<T>, ChildSink<T>)> {
        let mut state = self.state.lock();
        let ChildState::Replaying { backlog, sink } = &mut *state else {
            return None;
        };
        let sink = sink.clone();
        match backlog.pop_front() {
            Some(event) => {
                if is_terminal(&event) {
                    *state = ChildState::Finished;
                }
                Some((event, sink))
            }
            None => {
                *state = ChildState::Live(sink);
                None
            }
        }
    }

    fn offer(&self, event: Event<T>) {
        let sink = {
            let mut state = self.state.lock();
            match &mut *state {
                ChildState::Buffering(backlog) | ChildState::Replaying { backlog, .. } => {
                    backlog.push_back(event);
                    return;
                }
                ChildState::Live(sink) => {
                    let sink = sink.clone();
                    if is_terminal(&event) {
                        *state = ChildState::Finished;
                    }
                    sink
                }
                ChildState::Finished => {
                    trace!("child event after its terminal event, ignoring");
                    return;
                }
            }
        };
        sink(event);
    }
}

const fn is_terminal<T>(event: &Event<T>) -> bool {
    matches!(event, Event::Error(_) | Event::Complete(_))
}
