// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::child_stream::{ChildSink, ChildStream};
use super::Nested;
use crate::collection::Collection;
use crate::event::Event;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

enum QueuedItem<T> {
    Immediate(T),
    Deferred(ChildStream<T>),
}

struct Queue<T> {
    items: VecDeque<QueuedItem<T>>,
    draining: bool,
}

enum Step<T> {
    Deliver(T),
    Attach(ChildStream<T>),
}

/// The linearization queue behind one flattened collection.
///
/// Only the head of the queue is ever active. A drain requested while another
/// is running (from a subscriber or a replayed child event) only flags more
/// work; the running pass picks it up, so items leave in append order. A live
/// child's success holds the pass for the length of its delivery.
pub(super) struct Linearizer<T> {
    queue: Mutex<Queue<T>>,
    output: Collection<T>,
}

impl<T: Clone + Send + Sync + 'static> Linearizer<T> {
    pub(super) fn new(output: Collection<T>) -> Arc<Self> {
        Arc::new(Self {
            queue: Mutex::new(Queue {
                items: VecDeque::new(),
                draining: false,
            }),
            output,
        })
    }

    pub(super) fn push(self: &Arc<Self>, nested: Nested<T>) {
        // Subscribe before taking the queue lock: the child may already be
        // completed, which is reported synchronously.
        let items: Vec<QueuedItem<T>> = match nested {
            Nested::Value(value) => vec![QueuedItem::Immediate(value)],
            Nested::Sequence(values) => values.into_iter().map(QueuedItem::Immediate).collect(),
            Nested::Stream(child) => vec![QueuedItem::Deferred(ChildStream::observe(&child))],
        };

        self.queue.lock().items.extend(items);
        self.drain();
    }

    /// Claims the drain pass; false if one is already running.
    fn begin_pass(&self) -> bool {
        let mut queue = self.queue.lock();
        !mem::replace(&mut queue.draining, true)
    }

    /// Releases a pass claimed by `begin_pass` and picks up deferred work.
    fn end_pass(self: &Arc<Self>) {
        self.queue.lock().draining = false;
        self.drain();
    }

    fn drain(self: &Arc<Self>) {
        if !self.begin_pass() {
            return;
        }

        while let Some(step) = self.next_step() {
            match step {
                Step::Deliver(value) => self.output.accept_event_success(value),
                Step::Attach(child) => {
                    trace!("flatten queue reached child {}", child.id());
                    child.attach(self.child_sink(child.id()));
                }
            }
        }
    }

    /// Takes the next unit of work, or ends the drain pass.
    fn next_step(&self) -> Option<Step<T>> {
        let mut queue = self.queue.lock();
        let step = match queue.items.pop_front() {
            Some(QueuedItem::Immediate(value)) => Some(Step::Deliver(value)),
            Some(QueuedItem::Deferred(child)) => {
                let step = (!child.is_attached()).then(|| Step::Attach(child.clone()));
                queue.items.push_front(QueuedItem::Deferred(child));
                step
            }
            None => None,
        };
        if step.is_none() {
            queue.draining = false;
        }
        step
    }

    fn child_sink(self: &Arc<Self>, child_id: u64) -> ChildSink<T> {
        // Keeps the queue alive while the child is pending; the reference is
        // released when the child state reaches `Finished`.
        let linearizer = self.clone();
        Arc::new(move |event: Event<T>| {
            match event {
                Event::Success(value) => {
                    // Later siblings wait until every subscriber has seen the
                    // value, even if one of them finishes the child.
                    let owns_pass = linearizer.begin_pass();
                    linearizer.output.accept_event_success(value);
                    if owns_pass {
                        linearizer.end_pass();
                    }
                }
                Event::Error(error) => {
                    linearizer.output.accept_event_error(error);
                    linearizer.advance(child_id);
                }
                Event::Complete(_) => linearizer.advance(child_id),
            }
        })
    }

    /// Retires the child at the head of the queue and resumes draining.
    fn advance(self: &Arc<Self>, child_id: u64) {
        {
            let mut queue = self.queue.lock();
            let is_head = matches!(
                queue.items.front(),
                Some(QueuedItem::Deferred(head)) if head.id() == child_id
            );
            if !is_head {
                return;
            }
            queue.items.pop_front();
        }
        trace!("flatten child {} finished", child_id);
        self.drain();
    }
}
