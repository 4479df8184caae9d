// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `throttle` operator for streams.
//!
//! Throttling spaces emissions at least one window apart while losing as
//! little as possible:
//!
//! - The first item in an idle period is emitted immediately and opens a
//!   cooldown of one window.
//! - Items arriving during the cooldown are not emitted immediately; the
//!   newest one is stashed, superseding any earlier stashed item, and
//!   emitted exactly at the window boundary. The boundary deadline is
//!   shared by all suppressed arrivals, not restarted per arrival.
//! - A boundary emission opens the next cooldown window; once a full
//!   window passes with no emission, the cooldown has lapsed and the next
//!   arrival fires immediately again.
//!
//! When the source ends with an item stashed, the item is still emitted at
//! its window boundary before the stream ends.

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
pub use multi_threaded::ThrottleExt;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
mod single_threaded;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub use single_threaded::ThrottleExt;
