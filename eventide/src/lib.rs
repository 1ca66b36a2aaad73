// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Eventide
//!
//! Push-based event collections: compose UI and network event sources
//! declaratively instead of through nested callbacks.
//!
//! ## Overview
//!
//! A [`Collection`] is a live, hot sequence of events on three channels
//! (success, error and complete). Sources push into a root collection; the
//! operators build a graph of collections downstream of it:
//!
//! - `map`, `filter` and `flatten` create new nodes;
//! - `throttle`, `debounce` and `stop_when` configure the node they are
//!   called on;
//! - `for_each` observes a node and `to_stream` bridges it into async code.
//!
//! `flatten` concatenates rather than merges: a child collection (for example
//! the response to a request) is emitted in full before anything queued after
//! it, and its early events are buffered rather than lost.
//!
//! ## Quick Start
//!
//! ```rust
//! use eventide::prelude::*;
//! use eventide_test_utils::{click_at, ClickEvent, FakeElement, FakePromise};
//! use std::sync::{Arc, Mutex};
//!
//! let page = FakeElement::<ClickEvent>::new();
//! let request = FakePromise::<String>::new();
//!
//! let lookups = sources::from_dom_event(&page, "click", None)
//!     .map(|click| click.point(), None::<NoErrorMap>, None::<NoCompleteMap<_, _>>)
//!     .filter(|point| point.x > 500, None::<NoErrorMap>, None::<NoCompleteMap<_, _>>)
//!     .map(
//!         {
//!             let request = request.clone();
//!             move |_| sources::from_promise(&request)
//!         },
//!         None::<NoErrorMap>,
//!         None::<NoCompleteMap<_, _>>,
//!     )
//!     .flatten::<String>();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! lookups.for_each(
//!     move |answer| sink.lock().unwrap().push(answer),
//!     None::<NoErrorHandler>,
//!     None::<NoCompleteHandler<String>>,
//! );
//!
//! page.trigger("click", None, click_at(600, 0));
//! request.resolve("found".to_string());
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["found".to_string()]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use eventide_core::{
    Collection, CollectionError, CollectionStream, Event, Nested, NoCompleteHandler,
    NoCompleteMap, NoErrorHandler, NoErrorMap, RateLimit, Result,
};

// Re-export source traits
pub use eventide_source::{EventTarget, Listener, Promise, Settlement};

pub use eventide_runtime::{RuntimeError, Scheduler};

/// The entry point for creating collections.
///
/// Every root collection is created here, either empty (to be fed by hand
/// through the `accept_event_*` methods) or bound to an external source.
pub mod sources {
    use eventide_core::{Collection, RateLimit};

    pub use eventide_source::{from_dom_event, from_future, from_promise};

    /// Creates an empty collection fed by hand.
    #[must_use]
    pub fn collection<T>() -> Collection<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        Collection::new()
    }

    /// Creates an empty collection with a rate limit already applied.
    #[must_use]
    pub fn rate_limited<T>(policy: RateLimit) -> Collection<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        Collection::with_rate_limit(policy)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::sources;
    pub use eventide_core::{
        Collection, CollectionError, Event, Nested, NoCompleteHandler, NoCompleteMap,
        NoErrorHandler, NoErrorMap, RateLimit,
    };
    pub use eventide_source::{EventTarget, Promise};
}
