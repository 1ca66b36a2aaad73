// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error payloads carried by a collection's error channel.
//!
//! Errors are values, not control flow: a [`CollectionError`] pushed through
//! `accept_event_error` reaches error subscribers and nothing else. It never
//! completes the collection it travels through.
//!
//! # Examples
//!
//! ```
//! use eventide_core::{CollectionError, Result};
//!
//! fn parse_offset(raw: &str) -> Result<u32> {
//!     raw.parse()
//!         .map_err(|_| CollectionError::stream_error(format!("bad offset {raw}")))
//! }
//!
//! assert!(parse_offset("12").is_ok());
//! assert!(parse_offset("x").is_err());
//! ```

use eventide_runtime::RuntimeError;

/// Root error type for eventide collections and adapters.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// A transformation or collaborator reported a failure described by text.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// An error value produced by an event source, kept with its original type.
    #[error("Source error: {0}")]
    SourceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An asynchronous call settled unsuccessfully.
    #[error("Request rejected: {reason}")]
    Rejected {
        /// Reason given by the collaborator
        reason: String,
    },

    /// Timed work could not be scheduled.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CollectionError {
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Wrap an error produced by an event source.
    pub fn source_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SourceError(Box::new(error))
    }

    /// Whether retrying the same operation could not succeed.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::StreamProcessingError { .. } | Self::SourceError(_)
        )
    }
}

/// Specialized `Result` for eventide operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

impl Clone for CollectionError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // Boxed sources cannot be cloned; keep their rendering.
            Self::SourceError(e) => Self::StreamProcessingError {
                context: format!("Source error: {e}"),
            },
            Self::Rejected { reason } => Self::Rejected {
                reason: reason.clone(),
            },
            Self::Runtime(e) => Self::Runtime(e.clone()),
        }
    }
}
