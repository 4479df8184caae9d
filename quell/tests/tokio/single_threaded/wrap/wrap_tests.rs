// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use quell::wrap;
use quell_test_utils::{query_alpha, query_beta, query_gamma, settle, CallRecorder, Query};
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_debounced_collapses_burst_to_latest_call() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = wrap::debounce(recorder.callback(), Duration::from_millis(100));

    // Act: calls at t=0, t=30, t=60
    debounced.call(query_alpha())?;
    settle().await;
    advance(Duration::from_millis(30)).await;

    debounced.call(query_beta())?;
    settle().await;
    advance(Duration::from_millis(30)).await;

    debounced.call(query_gamma())?;
    settle().await;
    assert!(recorder.is_empty());

    // Assert: one invocation, wait after the last call, with its payload
    advance(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_gamma()]);

    Ok(())
}

#[tokio::test]
async fn test_debounced_spaced_calls_fire_separately() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = wrap::debounce(recorder.callback(), Duration::from_millis(100));

    // Act & Assert
    debounced.call(query_alpha())?;
    settle().await;
    advance(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha()]);

    advance(Duration::from_millis(50)).await;
    debounced.call(query_beta())?;
    settle().await;
    advance(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha(), query_beta()]);

    Ok(())
}

#[tokio::test]
async fn test_debounce_immediate_fires_in_the_calling_task() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = wrap::debounce_immediate(recorder.callback(), Duration::from_millis(100));

    // Act & Assert: no yield between call and assert: the leading edge
    // fires synchronously inside `call`.
    debounced.call(query_alpha())?;
    assert_eq!(recorder.calls(), vec![query_alpha()]);

    advance(Duration::from_millis(10)).await;
    debounced.call(query_beta())?;
    assert_eq!(recorder.len(), 1);

    // t=150: a full quiet period since the suppressed call at t=10.
    advance(Duration::from_millis(140)).await;
    debounced.call(query_gamma())?;
    assert_eq!(recorder.calls(), vec![query_alpha(), query_gamma()]);

    Ok(())
}

#[tokio::test]
async fn test_debounce_immediate_never_fires_trailing() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = wrap::debounce_immediate(recorder.callback(), Duration::from_millis(100));

    // Act
    debounced.call(query_alpha())?;
    advance(Duration::from_millis(10)).await;
    debounced.call(query_beta())?;

    // Assert: the suppressed burst never produces a delayed invocation
    advance(Duration::from_millis(500)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha()]);

    Ok(())
}

#[tokio::test]
async fn test_throttled_fires_leading_and_trailing() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let throttled = wrap::throttle(recorder.callback(), Duration::from_millis(100));

    // Act & Assert: t=0 fires immediately
    throttled.call(query_alpha())?;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha()]);

    // t=30 and t=70 collapse to one boundary firing at t=100
    advance(Duration::from_millis(30)).await;
    throttled.call(query_beta())?;
    settle().await;
    advance(Duration::from_millis(40)).await;
    throttled.call(query_gamma())?;
    settle().await;
    assert_eq!(recorder.len(), 1);

    advance(Duration::from_millis(30)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha(), query_gamma()]);

    Ok(())
}

#[tokio::test]
async fn test_throttled_call_after_idle_fires_immediately() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let throttled = wrap::throttle(recorder.callback(), Duration::from_millis(100));

    // Act & Assert
    throttled.call(query_alpha())?;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha()]);

    advance(Duration::from_millis(200)).await;
    throttled.call(query_beta())?;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha(), query_beta()]);

    Ok(())
}

#[tokio::test]
async fn test_wrappers_over_one_callback_are_independent() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder_a = CallRecorder::new();
    let recorder_b: CallRecorder<Query> = CallRecorder::new();
    let debounced_a = wrap::debounce(recorder_a.callback(), Duration::from_millis(100));
    let debounced_b = wrap::debounce(recorder_b.callback(), Duration::from_millis(100));

    // Act: only the first wrapper sees a call
    debounced_a.call(query_alpha())?;
    settle().await;
    advance(Duration::from_millis(100)).await;
    settle().await;

    // Assert: the second wrapper scheduled nothing
    assert_eq!(recorder_a.calls(), vec![query_alpha()]);
    assert!(recorder_b.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_cloned_handle_shares_the_instance() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = wrap::debounce(recorder.callback(), Duration::from_millis(100));
    let clone = debounced.clone();

    // Act: a call through the clone restarts the original's timer
    debounced.call(query_alpha())?;
    settle().await;
    advance(Duration::from_millis(50)).await;
    clone.call(query_beta())?;
    settle().await;

    advance(Duration::from_millis(99)).await;
    settle().await;
    assert!(recorder.is_empty());

    // Assert: one invocation, from the shared timer, with the last payload
    advance(Duration::from_millis(1)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_beta()]);

    Ok(())
}

#[tokio::test]
async fn test_pending_invocation_survives_handle_drop() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = wrap::debounce(recorder.callback(), Duration::from_millis(100));

    // Act
    debounced.call(query_alpha())?;
    settle().await;
    drop(debounced);
    settle().await;
    assert!(recorder.is_empty());

    // Assert: the armed invocation still goes out after the quiet period
    advance(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha()]);

    Ok(())
}

#[tokio::test]
async fn test_throttled_trailing_survives_handle_drop() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let throttled = wrap::throttle(recorder.callback(), Duration::from_millis(100));

    // Act
    throttled.call(query_alpha())?;
    settle().await;
    advance(Duration::from_millis(30)).await;
    throttled.call(query_beta())?;
    settle().await;
    drop(throttled);
    settle().await;
    assert_eq!(recorder.len(), 1);

    // Assert: the stashed call still fires at the window boundary
    advance(Duration::from_millis(70)).await;
    settle().await;
    assert_eq!(recorder.calls(), vec![query_alpha(), query_beta()]);

    Ok(())
}
