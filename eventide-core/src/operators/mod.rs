// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators that build new nodes downstream of a [`Collection`](crate::Collection).
//!
//! Each operator registers closures on its parent and returns the node those
//! closures feed. The parent keeps no other reference to it.

mod filter;
mod flatten;
mod map;
mod stop_when;
mod to_stream;

pub use self::flatten::Nested;
pub use self::to_stream::CollectionStream;
