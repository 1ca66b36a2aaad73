// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod collection;
pub mod collection_error;
pub mod event;
pub mod operators;
pub mod rate_limit;

pub use self::collection::{
    Collection, NoCompleteHandler, NoCompleteMap, NoErrorHandler, NoErrorMap,
};
pub use self::collection_error::{CollectionError, Result};
pub use self::event::Event;
pub use self::operators::{CollectionStream, Nested};
pub use self::rate_limit::RateLimit;
pub use eventide_runtime::{RuntimeError, Scheduler};
