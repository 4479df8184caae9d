// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the quell workspace.
//!
//! This crate provides the pieces the operator and wrapper tests are built
//! from. It is designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! - [`CallRecorder`]: the standard observer for wrapper tests: hands out
//!   a recording callback and lets the test inspect what reached it, and
//!   in which order.
//! - [`Query`]: a search-query payload, the canonical argument forwarded
//!   through operators and wrappers in tests, with named fixtures
//!   ([`query_alpha`], [`query_beta`], ...).
//! - [`test_channel`]: an unbounded channel whose receiving half is a
//!   plain `Stream`, for feeding operators imperatively.
//! - [`helpers`]: assertion helpers for silent streams, next-emission
//!   unwrapping, and driver scheduling.

pub mod helpers;
pub mod query;
pub mod recorder;

pub use helpers::{assert_no_element_emitted, settle, unwrap_next};
pub use query::{query_alpha, query_beta, query_delta, query_gamma, Query};
pub use recorder::CallRecorder;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Creates an unbounded channel whose receiving half is a plain `Stream`.
///
/// This solves the conflict between consuming operations (stream extensions
/// that take `self`) and mutation operations (sending values from the test
/// body).
///
/// # Example
///
/// ```rust
/// use quell_test_utils::{query_alpha, test_channel, Query};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel::<Query>();
/// tx.send(query_alpha()).unwrap();
/// assert_eq!(stream.next().await, Some(query_alpha()));
/// # }
/// ```
pub fn test_channel<T: Send + 'static>(
) -> (mpsc::UnboundedSender<T>, impl Stream<Item = T> + Send) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
