// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::CollectionError;
use eventide_source::{Promise, Settlement};
use parking_lot::Mutex;
use std::mem;
use std::sync::Arc;

type DoneHook<T> = Box<dyn FnOnce(T) + Send>;
type FailHook = Box<dyn FnOnce(CollectionError) + Send>;
type AlwaysHook<T> = Box<dyn FnOnce(Settlement<T>) + Send>;

enum State<T> {
    Pending {
        done: Vec<DoneHook<T>>,
        fail: Vec<FailHook>,
        always: Vec<AlwaysHook<T>>,
    },
    Settled(Settlement<T>),
}

/// A promise settled by hand with [`resolve`](Self::resolve) or
/// [`reject`](Self::reject).
///
/// Only the first settlement counts. Hooks added after settlement run
/// immediately.
pub struct FakePromise<T> {
    state: Arc<Mutex<State<T>>>,
}

impl<T> Clone for FakePromise<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for FakePromise<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> FakePromise<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::Pending {
                done: Vec::new(),
                fail: Vec::new(),
                always: Vec::new(),
            })),
        }
    }

    #[must_use]
    pub fn resolved(value: T) -> Self {
        let promise = Self::new();
        promise.resolve(value);
        promise
    }

    /// Fulfils the promise: `done` hooks run, then `always` hooks.
    pub fn resolve(&self, value: T) {
        let Some((done, _, always)) = self.settle(Ok(value.clone())) else {
            return;
        };
        for hook in done {
            hook(value.clone());
        }
        for hook in always {
            hook(Ok(value.clone()));
        }
    }

    /// Rejects the promise: `fail` hooks run, then `always` hooks.
    pub fn reject(&self, error: CollectionError) {
        let Some((_, fail, always)) = self.settle(Err(error.clone())) else {
            return;
        };
        for hook in fail {
            hook(error.clone());
        }
        for hook in always {
            hook(Err(error.clone()));
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(*self.state.lock(), State::Settled(_))
    }

    #[allow(clippy::type_complexity)]
    fn settle(
        &self,
        outcome: Settlement<T>,
    ) -> Option<(Vec<DoneHook<T>>, Vec<FailHook>, Vec<AlwaysHook<T>>)> {
        let mut state = self.state.lock();
        match mem::replace(&mut *state, State::Settled(outcome)) {
            State::Pending { done, fail, always } => Some((done, fail, always)),
            settled @ State::Settled(_) => {
                *state = settled;
                None
            }
        }
    }

    fn settlement(&self) -> Option<Settlement<T>> {
        match &*self.state.lock() {
            State::Settled(outcome) => Some(outcome.clone()),
            State::Pending { .. } => None,
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Promise for FakePromise<T> {
    type Output = T;

    fn done(&self, callback: Box<dyn FnOnce(T) + Send>) {
        {
            let mut state = self.state.lock();
            if let State::Pending { done, .. } = &mut *state {
                done.push(callback);
                return;
            }
        }
        if let Some(Ok(value)) = self.settlement() {
            callback(value);
        }
    }

    fn fail(&self, callback: Box<dyn FnOnce(CollectionError) + Send>) {
        {
            let mut state = self.state.lock();
            if let State::Pending { fail, .. } = &mut *state {
                fail.push(callback);
                return;
            }
        }
        if let Some(Err(error)) = self.settlement() {
            callback(error);
        }
    }

    fn always(&self, callback: Box<dyn FnOnce(Settlement<T>) + Send>) {
        {
            let mut state = self.state.lock();
            if let State::Pending { always, .. } = &mut *state {
                always.push(callback);
                return;
            }
        }
        if let Some(outcome) = self.settlement() {
            callback(outcome);
        }
    }
}
