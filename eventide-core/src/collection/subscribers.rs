// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::collection_error::CollectionError;
use std::sync::Arc;

pub(crate) type SuccessFn<T> = Arc<dyn Fn(T) + Send + Sync>;
pub(crate) type ErrorFn = Arc<dyn Fn(CollectionError) + Send + Sync>;
pub(crate) type CompleteFn<T> = Arc<dyn Fn(Vec<T>) + Send + Sync>;

/// The three ordered callback lists of a collection.
pub(crate) struct Subscribers<T> {
    pub(crate) success: Vec<SuccessFn<T>>,
    pub(crate) error: Vec<ErrorFn>,
    pub(crate) complete: Vec<CompleteFn<T>>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            success: Vec::new(),
            error: Vec::new(),
            complete: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub(crate) fn push(
        &mut self,
        success: SuccessFn<T>,
        error: Option<ErrorFn>,
        complete: Option<CompleteFn<T>>,
    ) {
        self.success.push(success);
        self.error.extend(error);
        self.complete.extend(complete);
    }
}

/// Hands `value` to every callback in order, cloning for all but the last.
pub(crate) fn broadcast<V: Clone>(callbacks: &[Arc<dyn Fn(V) + Send + Sync>], value: V) {
    if let Some((last, rest)) = callbacks.split_last() {
        for callback in rest {
            callback(value.clone());
        }
        last(value);
    }
}
