// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-based event collection with three delivery channels.
//!
//! A [`Collection`] is one node of a dataflow graph. Sources push events into
//! it through the `accept_event_*` entry points; it hands each event to the
//! callbacks registered on the matching channel, synchronously and in
//! registration order, before the call returns.
//!
//! ## Characteristics
//!
//! - **Hot**: callbacks only see events accepted after they were registered.
//! - **Three channels**: success, error and complete are independent; an error
//!   never ends a collection.
//! - **Terminal completion**: after the first completion nothing else is
//!   delivered, pending timers are cancelled and the teardown action runs once.
//! - **Shared handle**: cloning a `Collection` clones a handle to the same node.
//!
//! ## Example
//!
//! ```
//! use eventide_core::{Collection, NoCompleteHandler, NoErrorHandler};
//! use std::sync::{Arc, Mutex};
//!
//! let clicks = Collection::<u32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! clicks.for_each(
//!     move |x| sink.lock().unwrap().push(x),
//!     None::<NoErrorHandler>,
//!     None::<NoCompleteHandler<u32>>,
//! );
//!
//! clicks.accept_event_success(1);
//! clicks.accept_event_success(2);
//! clicks.accept_event_complete(Vec::new());
//! clicks.accept_event_success(3); // ignored: collection is terminal
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

mod subscribers;

use self::subscribers::{broadcast, CompleteFn, ErrorFn, Subscribers, SuccessFn};
use crate::collection_error::CollectionError;
use crate::event::Event;
use crate::rate_limit::{RateLimit, RateLimiter};
use core::fmt;
use core::time::Duration;
use eventide_runtime::{DefaultTimer, Scheduler, Timer};
use parking_lot::Mutex;
use std::mem;
use std::sync::{Arc, Weak};

type Teardown = Box<dyn FnOnce() + Send>;

/// Placeholder type for an absent `for_each` error callback.
pub type NoErrorHandler = fn(CollectionError);

/// Placeholder type for an absent `for_each` completion callback.
pub type NoCompleteHandler<T> = fn(Vec<T>);

/// Placeholder type for an absent error transform in `map`/`filter`.
pub type NoErrorMap = fn(CollectionError) -> CollectionError;

/// Placeholder type for an absent completion transform in `map`/`filter`.
pub type NoCompleteMap<T, U> = fn(Vec<T>) -> Vec<U>;

struct State<T> {
    subscribers: Subscribers<T>,
    limiter: RateLimiter,
    completed: bool,
    teardown: Option<Teardown>,
}

/// A node in the push-based event graph.
///
/// See the [module documentation](self) for the delivery model.
pub struct Collection<T> {
    inner: Arc<Mutex<State<T>>>,
}

/// Non-owning handle, used by timers and stop signals so they never keep a
/// node alive on their own.
pub(crate) struct WeakCollection<T> {
    inner: Weak<Mutex<State<T>>>,
}

impl<T> WeakCollection<T> {
    pub(crate) fn upgrade(&self) -> Option<Collection<T>> {
        self.inner.upgrade().map(|inner| Collection { inner })
    }
}

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    /// Creates an open collection with no subscribers and no rate limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rate_limit(RateLimit::none())
    }

    /// Creates an open collection with the given rate limit already applied.
    #[must_use]
    pub fn with_rate_limit(policy: RateLimit) -> Self {
        Self {
            inner: Arc::new(Mutex::new(State {
                subscribers: Subscribers::default(),
                limiter: RateLimiter::new(policy),
                completed: false,
                teardown: None,
            })),
        }
    }

    /// Accepts a success value, subject to the rate limit.
    ///
    /// Without a debounce interval the value is delivered (or dropped, while a
    /// throttle window is open) before this call returns. With one, delivery
    /// is deferred until the interval passes without a newer value.
    pub fn accept_event_success(&self, value: T) {
        let mut state = self.inner.lock();
        if state.completed {
            trace!("success accepted after completion, dropping");
            return;
        }

        let Some(interval) = state.limiter.debounce_interval() else {
            drop(state);
            self.deliver_success(value);
            return;
        };

        match Scheduler::current() {
            Ok(scheduler) => {
                let generation = state.limiter.restart_debounce();
                let node = self.downgrade();
                let task = scheduler.after(interval, move || {
                    if let Some(collection) = node.upgrade() {
                        collection.fire_debounced(generation, value);
                    }
                });
                state.limiter.arm_debounce(task);
            }
            Err(_err) => {
                warn!("debounce unavailable, delivering immediately: {}", _err);
                drop(state);
                self.deliver_success(value);
            }
        }
    }

    /// Delivers an error to every error subscriber. Never rate limited.
    pub fn accept_event_error(&self, error: CollectionError) {
        let subscribers = {
            let state = self.inner.lock();
            if state.completed {
                trace!("error accepted after completion, dropping");
                return;
            }
            state.subscribers.error.clone()
        };
        self.broadcast_while_open(&subscribers, error);
    }

    /// Completes the collection.
    ///
    /// The node turns terminal and cancels its timers before `payload` is
    /// delivered to the complete subscribers; the teardown action runs last.
    /// Subscriber lists are released afterwards. Repeated calls are no-ops.
    pub fn accept_event_complete(&self, payload: Vec<T>) {
        let (subscribers, teardown) = {
            let mut state = self.inner.lock();
            if state.completed {
                debug!("collection already completed, ignoring repeated completion");
                return;
            }
            state.completed = true;
            state.limiter.shutdown();
            (
                mem::take(&mut state.subscribers),
                state.teardown.take(),
            )
        };

        broadcast(&subscribers.complete, payload);
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    /// Registers callbacks on the success channel and, when given, on the
    /// error and complete channels.
    ///
    /// Registering on a completed collection has no effect.
    pub fn for_each<S, E, C>(&self, on_success: S, on_error: Option<E>, on_complete: Option<C>)
    where
        S: Fn(T) + Send + Sync + 'static,
        E: Fn(CollectionError) + Send + Sync + 'static,
        C: Fn(Vec<T>) + Send + Sync + 'static,
    {
        let registered = self.register(
            Arc::new(on_success),
            on_error.map(|f| Arc::new(f) as ErrorFn),
            on_complete.map(|f| Arc::new(f) as CompleteFn<T>),
        );
        if !registered {
            debug!("for_each on a completed collection, callbacks will never run");
        }
    }

    /// Sets the action run by [`dissolve`](Self::dissolve) or by completion,
    /// replacing any previous one.
    pub fn set_deconstructor<F>(&self, teardown: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().teardown = Some(Box::new(teardown));
    }

    /// Runs the teardown action now, if one is set and has not run yet.
    pub fn dissolve(&self) {
        let teardown = self.inner.lock().teardown.take();
        if let Some(teardown) = teardown {
            trace!("dissolving collection");
            teardown();
        }
    }

    /// Sets the throttle interval; `Duration::ZERO` disables throttling.
    ///
    /// Returns a handle to this same collection for chaining.
    pub fn throttle(&self, interval: Duration) -> Self {
        self.inner.lock().limiter.set_throttle(interval);
        self.clone()
    }

    /// Sets the debounce interval; `Duration::ZERO` disables debouncing.
    ///
    /// Returns a handle to this same collection for chaining.
    pub fn debounce(&self, interval: Duration) -> Self {
        self.inner.lock().limiter.set_debounce(interval);
        self.clone()
    }

    #[must_use]
    pub fn rate_limit(&self) -> RateLimit {
        self.inner.lock().limiter.policy()
    }

    /// Returns `true` once the collection has completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.inner.lock().completed
    }

    /// Number of callbacks registered on the success channel.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.success.len()
    }

    /// Registers callbacks; `false` if the collection is already terminal.
    pub(crate) fn register(
        &self,
        success: SuccessFn<T>,
        error: Option<ErrorFn>,
        complete: Option<CompleteFn<T>>,
    ) -> bool {
        let mut state = self.inner.lock();
        if state.completed {
            return false;
        }
        state.subscribers.push(success, error, complete);
        true
    }

    /// Registers one sink on all three channels, tagging each event.
    pub(crate) fn register_events<F>(&self, sink: F) -> bool
    where
        F: Fn(Event<T>) + Send + Sync + 'static,
    {
        let sink = Arc::new(sink);
        let on_error = sink.clone();
        let on_complete = sink.clone();
        self.register(
            Arc::new(move |value| sink(Event::Success(value))),
            Some(Arc::new(move |error| on_error(Event::Error(error)))),
            Some(Arc::new(move |payload| on_complete(Event::Complete(payload)))),
        )
    }

    pub(crate) fn downgrade(&self) -> WeakCollection<T> {
        WeakCollection {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn fire_debounced(&self, generation: u64, value: T) {
        {
            let mut state = self.inner.lock();
            if state.completed || !state.limiter.claim_debounce(generation) {
                trace!("superseded debounce dropped");
                return;
            }
        }
        self.deliver_success(value);
    }

    /// The throttle-and-deliver step.
    fn deliver_success(&self, value: T) {
        let subscribers = {
            let mut state = self.inner.lock();
            if state.completed {
                return;
            }
            if state.limiter.is_suppressed(DefaultTimer::default().now()) {
                trace!("success dropped inside throttle window");
                return;
            }
            if let Some(interval) = state.limiter.throttle_interval() {
                self.open_throttle_window(&mut state, interval);
            }
            state.subscribers.success.clone()
        };
        self.broadcast_while_open(&subscribers, value);
    }

    /// Like `broadcast`, but stops as soon as a callback completes the node.
    fn broadcast_while_open<V: Clone>(&self, callbacks: &[Arc<dyn Fn(V) + Send + Sync>], value: V) {
        let Some((last, rest)) = callbacks.split_last() else {
            return;
        };
        for callback in rest {
            callback(value.clone());
            if self.is_completed() {
                trace!("collection completed during delivery, skipping remaining subscribers");
                return;
            }
        }
        last(value);
    }

    fn open_throttle_window(&self, state: &mut State<T>, interval: Duration) {
        match Scheduler::current() {
            Ok(scheduler) => {
                let generation = state.limiter.suppress(scheduler.now() + interval);
                let node = self.downgrade();
                let task = scheduler.after(interval, move || {
                    if let Some(collection) = node.upgrade() {
                        collection.inner.lock().limiter.release(generation);
                    }
                });
                state.limiter.arm_cooldown(task);
            }
            Err(_err) => {
                warn!("throttle unavailable, not suppressing: {}", _err);
            }
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("Collection")
            .field("success_subscribers", &state.subscribers.success.len())
            .field("error_subscribers", &state.subscribers.error.len())
            .field("complete_subscribers", &state.subscribers.complete.len())
            .field("rate_limit", &state.limiter.policy())
            .field("completed", &state.completed)
            .finish()
    }
}
