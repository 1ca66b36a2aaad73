// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A pointer click as delivered by a [`FakeElement`](crate::FakeElement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub page_x: i32,
    pub page_y: i32,
}

impl ClickEvent {
    #[must_use]
    pub const fn new(page_x: i32, page_y: i32) -> Self {
        Self { page_x, page_y }
    }

    #[must_use]
    pub const fn point(&self) -> Point {
        Point {
            x: self.page_x,
            y: self.page_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[must_use]
pub const fn click_at(page_x: i32, page_y: i32) -> ClickEvent {
    ClickEvent::new(page_x, page_y)
}
