// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Adapters from external event sources to [`Collection`](eventide_core::Collection)s.
//!
//! The sources themselves are collaborators described by traits:
//!
//! - [`EventTarget`]: attach and detach listeners for named events, with an
//!   optional delegation selector (a DOM element, a widget, a bus);
//! - [`Promise`]: a one-shot asynchronous call with success, failure and
//!   settlement hooks.
//!
//! Native futures are adapted directly by [`from_future`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod dom;
pub mod future;
pub mod promise;

pub use self::dom::{from_dom_event, EventTarget, Listener};
pub use self::future::from_future;
pub use self::promise::{from_promise, Promise, Settlement};
