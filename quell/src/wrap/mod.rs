// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Callback wrappers: debounce and throttle for plain `FnMut(T)` callbacks.
//!
//! Each factory takes a callback and returns a handle whose
//! [`call`](Debounced::call) forwards one argument payload into the
//! wrapper. Calls are fire-and-forget: nothing of the callback's outcome is
//! surfaced to the caller, and there is no cancel or flush operation:
//! once armed, a firing can only be superseded by another call or waited
//! out.
//!
//! [`debounce`] and [`throttle`] feed calls through a channel into the
//! corresponding stream operator; a detached driver task hands the
//! surviving emissions to the callback. Dropping the last handle closes
//! the channel, after which the driver delivers any still-armed firing and
//! exits.
//!
//! [`debounce_immediate`] is different: the leading edge must fire in the
//! calling task, so it keeps the callback behind the instance lock and
//! needs neither a channel nor a driver.
//!
//! Handles are `Clone`; clones share the one wrapper instance. Wrapping
//! the same callback twice yields two fully independent wrappers.

#[macro_use]
mod implementation;

#[cfg(all(
    any(feature = "runtime-tokio", feature = "runtime-smol"),
    not(target_arch = "wasm32")
))]
mod multi_threaded;

#[cfg(all(
    any(feature = "runtime-tokio", feature = "runtime-smol"),
    not(target_arch = "wasm32")
))]
pub use multi_threaded::{debounce, debounce_immediate, throttle, Debounced, Throttled};

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
mod single_threaded;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub use single_threaded::{debounce, debounce_immediate, throttle, Debounced, Throttled};
