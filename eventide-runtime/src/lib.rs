// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer and task scheduling used by eventide's rate limiters and adapters.
//!
//! Collections never block: throttle cool-downs, debounce delays and spawned
//! futures run on the ambient tokio runtime through a [`Scheduler`]. Every
//! scheduled unit of work is represented by a [`ScheduledTask`] which aborts
//! the work when dropped.

pub mod error;
pub mod impls;
pub mod scheduler;
pub mod timer;

pub use self::error::RuntimeError;
pub use self::impls::tokio::TokioTimer;
pub use self::scheduler::{ScheduledTask, Scheduler};
pub use self::timer::Timer;

/// Timer used when none is specified.
pub type DefaultTimer = TokioTimer;

/// Point in time as measured by [`DefaultTimer`].
pub type Instant = <DefaultTimer as Timer>::Instant;
