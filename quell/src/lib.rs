// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Burst-taming primitives for async Rust: debounce and throttle.
//!
//! Both primitives are exposed at two levels:
//!
//! - **Stream operators**: [`DebounceExt`] and [`ThrottleExt`] extend any
//!   `futures::Stream`, collapsing bursts of items the way the callback
//!   wrappers collapse bursts of calls.
//! - **Callback wrappers**: the factories in [`wrap`] take an arbitrary
//!   `FnMut(T)` and return a handle whose `call(args)` is debounced or
//!   throttled. The wrappers are built on the stream operators: calls flow
//!   through a channel into the operator, and a detached driver task hands
//!   the surviving emissions to the callback.
//!
//! # Semantics
//!
//! - `debounce(wait)`: trailing edge, one emission per burst, `wait` after
//!   the last arrival, carrying the newest payload.
//! - `debounce_leading(wait)`: leading edge, fire on the first arrival of a
//!   burst, suppress the rest; every arrival extends the burst.
//! - `throttle(window)`: at most one emission per `window`; the first
//!   arrival in an idle period fires immediately, the newest suppressed
//!   arrival fires exactly at the window boundary.
//!
//! # Runtime Support
//!
//! Select a runtime via feature flags:
//! - `runtime-tokio` (default)
//! - `runtime-smol`
//! - `runtime-wasm` (`wasm32` targets; single-threaded, no `Send` bounds)
//!
//! # Example
//!
//! ```rust,no_run
//! use quell::prelude::*;
//! use futures::channel::mpsc;
//! use futures::stream::StreamExt;
//! use std::time::Duration;
//!
//! # #[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, rx) = mpsc::unbounded::<String>();
//!
//! // Keystrokes in, at most one search per quiet period out.
//! let mut searches = rx.debounce(Duration::from_millis(150));
//!
//! tx.unbounded_send("rus".to_string()).unwrap();
//! tx.unbounded_send("rust".to_string()).unwrap();
//!
//! drop(tx);
//! assert_eq!(searches.next().await.as_deref(), Some("rust"));
//! # }
//! # #[cfg(not(all(feature = "runtime-tokio", not(target_arch = "wasm32"))))]
//! # fn main() {}
//! ```

mod error;
#[macro_use]
mod logging;

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-smol", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
mod debounce;

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-smol", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
mod throttle;

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-smol", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub mod wrap;

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-smol", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub mod prelude;

pub use error::{QuellError, Result};

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-smol", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub use debounce::DebounceExt;

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-smol", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub use throttle::ThrottleExt;

#[cfg(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-smol", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
))]
pub use wrap::{Debounced, Throttled};

/// The runtime every operator and wrapper in this crate is bound to.
///
/// When both native runtimes are enabled, tokio wins; the wasm runtime is
/// selected automatically on `wasm32` targets.
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub type DefaultRuntime = quell_runtime::impls::tokio::TokioRuntime;

#[cfg(all(
    feature = "runtime-smol",
    not(feature = "runtime-tokio"),
    not(target_arch = "wasm32")
))]
pub type DefaultRuntime = quell_runtime::impls::smol::SmolRuntime;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub type DefaultRuntime = quell_runtime::impls::wasm::WasmRuntime;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub use quell_runtime::impls::tokio::{TokioRuntime, TokioTimer};

#[cfg(all(feature = "runtime-smol", not(target_arch = "wasm32")))]
pub use quell_runtime::impls::smol::{SmolRuntime, SmolTimer};

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub use quell_runtime::impls::wasm::{WasmInstant, WasmRuntime, WasmTimer};
