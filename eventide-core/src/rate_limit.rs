// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle and debounce policy for a collection's success channel.
//!
//! **Throttle** is leading-edge: a delivery opens a cool-down window during
//! which further successes are dropped. **Debounce** is trailing-edge: each
//! success restarts a delay and only the last value of a burst is delivered
//! once the delay passes quietly. When both are set, debounce decides *when*
//! a value enters the throttle-and-deliver step.
//!
//! Errors and completions are never rate limited.

use core::time::Duration;
use eventide_runtime::{Instant, ScheduledTask};

/// Per-collection rate limit configuration.
///
/// `None` and `Some(Duration::ZERO)` both mean "disabled".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub throttle: Option<Duration>,
    pub debounce: Option<Duration>,
}

impl RateLimit {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            throttle: None,
            debounce: None,
        }
    }

    #[must_use]
    pub fn throttled(interval: Duration) -> Self {
        Self {
            throttle: enabled(interval),
            debounce: None,
        }
    }

    #[must_use]
    pub fn debounced(interval: Duration) -> Self {
        Self {
            throttle: None,
            debounce: enabled(interval),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.throttle.is_none() && self.debounce.is_none()
    }

    fn normalized(self) -> Self {
        Self {
            throttle: self.throttle.and_then(enabled),
            debounce: self.debounce.and_then(enabled),
        }
    }
}

pub(crate) fn enabled(interval: Duration) -> Option<Duration> {
    (!interval.is_zero()).then_some(interval)
}

/// Mutable rate limit state owned by one collection.
#[derive(Debug, Default)]
pub(crate) struct RateLimiter {
    policy: RateLimit,
    window_end: Option<Instant>,
    cooldown: Option<ScheduledTask>,
    cooldown_generation: u64,
    pending_debounce: Option<ScheduledTask>,
    debounce_generation: u64,
}

impl RateLimiter {
    pub(crate) fn new(policy: RateLimit) -> Self {
        Self {
            policy: policy.normalized(),
            ..Self::default()
        }
    }

    pub(crate) const fn policy(&self) -> RateLimit {
        self.policy
    }

    /// True while `now` falls inside the open throttle window. The window is
    /// half-open: a value arriving exactly at its end is delivered.
    pub(crate) fn is_suppressed(&self, now: Instant) -> bool {
        self.window_end.is_some_and(|end| now < end)
    }

    pub(crate) const fn debounce_interval(&self) -> Option<Duration> {
        self.policy.debounce
    }

    pub(crate) const fn throttle_interval(&self) -> Option<Duration> {
        self.policy.throttle
    }

    /// Changes the throttle interval. Disabling it ends any active window.
    pub(crate) fn set_throttle(&mut self, interval: Duration) {
        self.policy.throttle = enabled(interval);
        if self.policy.throttle.is_none() {
            self.window_end = None;
            self.cooldown_generation += 1;
            self.cooldown = None;
        }
    }

    /// Changes the debounce interval. Disabling it drops the pending value.
    pub(crate) fn set_debounce(&mut self, interval: Duration) {
        self.policy.debounce = enabled(interval);
        if self.policy.debounce.is_none() {
            self.debounce_generation += 1;
            self.pending_debounce = None;
        }
    }

    /// Supersedes the pending debounce and returns the new window's generation.
    pub(crate) fn restart_debounce(&mut self) -> u64 {
        self.debounce_generation += 1;
        self.pending_debounce = None;
        self.debounce_generation
    }

    pub(crate) fn arm_debounce(&mut self, task: ScheduledTask) {
        self.pending_debounce = Some(task);
    }

    /// Claims the debounce window `generation`; false if it was superseded.
    pub(crate) fn claim_debounce(&mut self, generation: u64) -> bool {
        if generation != self.debounce_generation {
            return false;
        }
        if let Some(task) = self.pending_debounce.take() {
            task.detach();
        }
        true
    }

    /// Opens a throttle window ending at `until` and returns its generation.
    pub(crate) fn suppress(&mut self, until: Instant) -> u64 {
        self.window_end = Some(until);
        self.cooldown_generation += 1;
        self.cooldown = None;
        self.cooldown_generation
    }

    pub(crate) fn arm_cooldown(&mut self, task: ScheduledTask) {
        self.cooldown = Some(task);
    }

    /// Clears the throttle window opened as `generation` once it has expired.
    pub(crate) fn release(&mut self, generation: u64) {
        if generation != self.cooldown_generation {
            return;
        }
        self.window_end = None;
        if let Some(task) = self.cooldown.take() {
            task.detach();
        }
    }

    /// Cancels every timer; used on the terminal transition.
    pub(crate) fn shutdown(&mut self) {
        self.window_end = None;
        self.cooldown_generation += 1;
        self.debounce_generation += 1;
        self.cooldown = None;
        self.pending_debounce = None;
    }
}
