// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Records every invocation a wrapper delivers to its callback.
///
/// `callback()` hands out an `FnMut(T)` that pushes into a shared log; the
/// test half inspects the log through [`calls`](Self::calls) and
/// [`last`](Self::last). Clones share the log, so a recorder can be kept
/// on the test side while its callback moves into a wrapper.
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallRecorder<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that records every payload it receives.
    pub fn callback(&self) -> impl FnMut(T) + Send + 'static
    where
        T: Send + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |args| calls.lock().push(args)
    }

    /// Number of invocations recorded so far.
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all recorded payloads, in invocation order.
    pub fn calls(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.calls.lock().clone()
    }

    /// The most recently recorded payload, if any.
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.calls.lock().last().cloned()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CallRecorder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallRecorder")
            .field("calls", &*self.calls.lock())
            .finish()
    }
}
