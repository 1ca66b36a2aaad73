// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::collection_error::CollectionError;

/// One event together with the channel it travelled on.
///
/// Collections keep their three channels apart; `Event` is the tagged form
/// used wherever events have to be stored or forwarded as a single sequence
/// (the stream bridge and flatten's child buffers).
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// A normally produced value
    Success(T),
    /// A failure signal; does not end the collection
    Error(CollectionError),
    /// The terminal signal and its payload
    Complete(Vec<T>),
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Event::Success(a), Event::Success(b)) => a == b,
            (Event::Complete(a), Event::Complete(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Event<T> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Event::Success(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Event::Error(_))
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Event::Complete(_))
    }

    /// Converts to the success value, discarding the other channels.
    pub fn success(self) -> Option<T> {
        match self {
            Event::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Converts to the error, discarding the other channels.
    pub fn error(self) -> Option<CollectionError> {
        match self {
            Event::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Maps success values and every element of a completion payload.
    pub fn map<U, F>(self, f: F) -> Event<U>
    where
        F: Fn(T) -> U,
    {
        match self {
            Event::Success(v) => Event::Success(f(v)),
            Event::Error(e) => Event::Error(e),
            Event::Complete(payload) => Event::Complete(payload.into_iter().map(f).collect()),
        }
    }
}
