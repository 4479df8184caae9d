// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the quell rate-control operators.
//!
//! The operators in the `quell` crate never talk to an executor directly;
//! everything they need from the host (a delayed-task primitive, a clock on
//! the same time source, a lock for wrapper state, and fire-and-forget task
//! spawning) comes through the traits in this crate.
//!
//! # Runtime Support
//!
//! Enable exactly the runtimes you need via feature flags:
//! - `runtime-tokio` (default) - [`impls::tokio::TokioRuntime`]
//! - `runtime-smol` - [`impls::smol::SmolRuntime`]
//! - `runtime-wasm` - [`impls::wasm::WasmRuntime`] (`wasm32` targets only,
//!   timers via `gloo-timers`)

pub mod impls;
pub mod runtime;
pub mod task;
pub mod timer;
