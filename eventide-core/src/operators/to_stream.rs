// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from a push-based collection to a pull-based `Stream`.
//!
//! The bridge registers on all three channels and forwards every delivered
//! event into an unbounded channel. Completion is forwarded as
//! [`Event::Complete`] and then ends the stream.
//!
//! ## Example
//!
//! ```
//! use eventide_core::{Collection, Event};
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let collection = Collection::<i32>::new();
//! let mut stream = collection.to_stream();
//!
//! collection.accept_event_success(1);
//! collection.accept_event_complete(vec![2]);
//!
//! assert_eq!(stream.next().await, Some(Event::Success(1)));
//! assert_eq!(stream.next().await, Some(Event::Complete(vec![2])));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::collection::Collection;
use crate::event::Event;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::Stream;

/// Stream of the events delivered by a collection after the bridge was created.
#[derive(Debug)]
pub struct CollectionStream<T> {
    inner: UnboundedReceiver<Event<T>>,
}

impl<T> Stream for CollectionStream<T> {
    type Item = Event<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    /// Observes this collection as a `Stream` of tagged events.
    ///
    /// Late bridges do not receive earlier events; a bridge created on a
    /// completed collection is already ended.
    pub fn to_stream(&self) -> CollectionStream<T> {
        let (tx, rx) = mpsc::unbounded();
        let registered = self.register_events(move |event| {
            let last = event.is_complete();
            if tx.unbounded_send(event).is_err() {
                trace!("collection stream dropped, discarding event");
            }
            if last {
                tx.close_channel();
            }
        });
        let mut stream = CollectionStream { inner: rx };
        if !registered {
            stream.inner.close();
        }
        stream
    }
}
