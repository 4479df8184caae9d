// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `debounce` operators for streams.
//!
//! Debouncing collapses a burst of items into a single one:
//!
//! - **Trailing edge** (`debounce`): wait for a pause of at least the given
//!   duration, then emit the newest item of the burst. Every arrival
//!   restarts the quiet timer and supersedes the pending item.
//! - **Leading edge** (`debounce_leading`): emit the item that opens a
//!   burst, suppress the rest. Every arrival, emitted or suppressed,
//!   extends the burst, so the next emission requires a full quiet period
//!   first.
//!
//! When the source ends with an item still pending, the trailing operator
//! waits out the remaining quiet period and then emits it; an armed timer
//! outlives the code that armed it.

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
pub use multi_threaded::DebounceExt;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
mod single_threaded;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub use single_threaded::DebounceExt;
