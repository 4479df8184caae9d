// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use futures::stream::{Stream, StreamExt};
use tokio::time::sleep;

/// Asserts that the stream emits nothing within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected emission, expected no output");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits for the next emission, panicking if the stream stays silent for
/// `timeout_ms` or ends without emitting.
pub async fn unwrap_next<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    tokio::time::timeout(Duration::from_millis(timeout_ms), stream.next())
        .await
        .expect("timed out waiting for an emission")
        .expect("stream ended before emitting")
}

/// Yields to the runtime until spawned wrapper drivers have observed every
/// queued call. Does not advance the (possibly paused) clock.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
