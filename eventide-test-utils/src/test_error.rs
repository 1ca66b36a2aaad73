// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::CollectionError;

/// Error produced by fixtures standing in for a failing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("injected failure: {0}")]
    Injected(String),

    #[error("status {0}")]
    Status(u16),
}

impl TestError {
    pub fn injected(message: impl Into<String>) -> Self {
        Self::Injected(message.into())
    }
}

impl From<TestError> for CollectionError {
    fn from(error: TestError) -> Self {
        Self::source_error(error)
    }
}
