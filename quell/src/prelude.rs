// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the stream-operator extension traits.
//!
//! ```ignore
//! use quell::prelude::*;
//!
//! let tamed = events
//!     .debounce(Duration::from_millis(150))
//!     .throttle(Duration::from_millis(500));
//! ```
//!
//! The callback-wrapper factories are not re-exported here; reach them
//! through the [`wrap`](crate::wrap) module.

pub use crate::debounce::DebounceExt;
pub use crate::throttle::ThrottleExt;
