// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The `flatten` operator.
//!
//! Flatten turns a collection of nested values into a collection of their
//! elements, behaving like an ordered concatenation rather than a merge:
//!
//! - a plain value is emitted as-is;
//! - a sequence is emitted element by element, in order;
//! - a child collection is emitted event by event, and nothing queued after
//!   it is emitted until that child completes or fails.
//!
//! Child events that arrive while earlier items are still pending are
//! buffered, never lost.
//!
//! # Example
//!
//! ```
//! use eventide_core::{Collection, Nested, NoCompleteHandler, NoErrorHandler};
//! use std::sync::{Arc, Mutex};
//!
//! let source = Collection::<Nested<i32>>::new();
//! let flat = source.flatten::<i32>();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! flat.for_each(
//!     move |x| sink.lock().unwrap().push(x),
//!     None::<NoErrorHandler>,
//!     None::<NoCompleteHandler<i32>>,
//! );
//!
//! let child = Collection::new();
//! source.accept_event_success(Nested::Value(1));
//! source.accept_event_success(Nested::Stream(child.clone()));
//! source.accept_event_success(Nested::Sequence(vec![4, 5]));
//!
//! child.accept_event_success(2);
//! child.accept_event_success(3);
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
//!
//! child.accept_event_complete(Vec::new());
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 4, 5]);
//! ```

mod child_stream;
mod linearizer;

use self::linearizer::Linearizer;
use crate::collection::{Collection, NoCompleteHandler, NoErrorHandler};

/// A value as seen by [`Collection::flatten`].
#[derive(Debug, Clone)]
pub enum Nested<T> {
    /// Emitted as a single element
    Value(T),
    /// Emitted element by element
    Sequence(Vec<T>),
    /// Emitted event by event until it completes or fails
    Stream(Collection<T>),
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Nested::Sequence(values)
    }
}

impl<T> From<Collection<T>> for Nested<T> {
    fn from(collection: Collection<T>) -> Self {
        Nested::Stream(collection)
    }
}

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    /// Returns a new collection that linearizes nested successes.
    ///
    /// Only the success channel of this collection is consumed. Errors of a
    /// child collection are forwarded to the result's error channel; a child's
    /// completion only releases the next queued item.
    pub fn flatten<U>(&self) -> Collection<U>
    where
        T: Into<Nested<U>>,
        U: Clone + Send + Sync + 'static,
    {
        let downstream = Collection::new();
        let linearizer = Linearizer::new(downstream.clone());

        self.for_each(
            move |value: T| linearizer.push(value.into()),
            None::<NoErrorHandler>,
            None::<NoCompleteHandler<T>>,
        );
        downstream
    }
}
