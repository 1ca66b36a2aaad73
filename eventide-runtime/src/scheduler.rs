// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Delayed actions and detached futures on the ambient tokio runtime.
//!
//! A [`Scheduler`] is captured from the runtime driving the calling thread.
//! Work handed to it runs on a later turn of that runtime, never inside the
//! call that scheduled it.
//!
//! # Example
//!
//! ```
//! use eventide_runtime::Scheduler;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = fired.clone();
//!
//! let scheduler = Scheduler::current().unwrap();
//! let task = scheduler.after(Duration::from_millis(10), move || {
//!     flag.store(true, Ordering::SeqCst);
//! });
//!
//! tokio::time::sleep(Duration::from_millis(20)).await;
//! assert!(fired.load(Ordering::SeqCst));
//! drop(task);
//! # }
//! ```

use crate::error::RuntimeError;
use crate::timer::Timer;
use crate::DefaultTimer;
use core::future::Future;
use core::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Spawns timed actions and futures onto a captured runtime handle.
#[derive(Clone, Debug)]
pub struct Scheduler<TM: Timer = DefaultTimer> {
    handle: Handle,
    timer: TM,
}

impl Scheduler<DefaultTimer> {
    /// Captures the runtime driving the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NoRuntime`] when called outside a tokio runtime.
    pub fn current() -> Result<Self, RuntimeError> {
        Handle::try_current()
            .map(|handle| Self::with_timer(handle, DefaultTimer::default()))
            .map_err(|e| RuntimeError::no_runtime(e.to_string()))
    }
}

impl<TM: Timer> Scheduler<TM> {
    pub fn with_timer(handle: Handle, timer: TM) -> Self {
        Self { handle, timer }
    }

    /// Current time on this scheduler's clock; follows a paused test clock.
    pub fn now(&self) -> TM::Instant {
        self.timer.now()
    }

    /// Runs `action` once `delay` has elapsed, unless the returned task is
    /// dropped first.
    pub fn after<F>(&self, delay: Duration, action: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static,
    {
        trace!("scheduling action in {:?}", delay);
        let sleep = self.timer.sleep_future(delay);
        self.spawn(async move {
            sleep.await;
            action();
        })
    }

    /// Drives `future` to completion in the background.
    pub fn spawn<Fut>(&self, future: Fut) -> ScheduledTask
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        ScheduledTask {
            handle: Some(self.handle.spawn(future)),
        }
    }
}

/// Handle to scheduled work. Dropping it aborts the work if it has not run.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Aborts the work now.
    pub fn cancel(mut self) {
        self.abort();
    }

    /// Releases the handle without aborting, letting the work finish on its own.
    ///
    /// Used by work that retires its own handle while running.
    pub fn detach(mut self) {
        self.handle.take();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            trace!("aborting scheduled task");
            handle.abort();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.abort();
    }
}
