// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the quell wrappers.
//!
//! The taxonomy is deliberately small: durations are not validated, and
//! failures inside a wrapped callback are never intercepted; they unwind
//! the driver task the way an exception surfaces through a host's
//! unhandled-error channel. The only failure a caller can observe is a
//! wrapper whose driver is no longer running.

/// Root error type for wrapper operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QuellError {
    /// The wrapper's driver task is gone (its runtime shut down), so the
    /// call cannot be delivered.
    #[error("wrapper closed: {context}")]
    Closed {
        /// Which wrapper refused the call
        context: String,
    },
}

impl QuellError {
    /// Create a closed-wrapper error with the given context
    pub fn closed(context: impl Into<String>) -> Self {
        Self::Closed {
            context: context.into(),
        }
    }
}

/// Specialized Result type for wrapper operations.
pub type Result<T> = core::result::Result<T, QuellError>;
