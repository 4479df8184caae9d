// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fire-and-forget task spawning across runtimes.
//!
//! Wrapper drivers are deliberately detached: the wrapper contract exposes
//! no cancel or flush operation, so nothing ever joins or aborts these
//! tasks. Their lifetime is governed solely by the closure of the channel
//! feeding them.

use core::future::Future;

/// Spawn a detached background task on the configured runtime.
///
/// Runtime selection follows the enabled features; when both native
/// runtimes are enabled, tokio wins.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_detached<F>(_future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    tokio::spawn(_future);

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    smol::spawn(_future).detach();
}

/// Spawn a detached background task (WASM version without `Send` bounds).
///
/// WASM is single-threaded; the future only needs to be `'static`.
#[cfg(all(target_arch = "wasm32", feature = "runtime-wasm"))]
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
