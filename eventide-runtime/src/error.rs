// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Failures raised while scheduling work.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// No tokio runtime is driving the current thread.
    #[error("No async runtime available: {context}")]
    NoRuntime {
        /// What was being scheduled
        context: String,
    },
}

impl RuntimeError {
    pub fn no_runtime(context: impl Into<String>) -> Self {
        Self::NoRuntime {
            context: context.into(),
        }
    }
}
