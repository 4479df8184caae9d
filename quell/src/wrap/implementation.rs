// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Macro that generates the complete wrapper implementation.
///
/// This macro eliminates duplication between the multi-threaded and
/// single-threaded implementations, which differ only in trait bounds
/// (Send vs not).
macro_rules! define_wrap_impl {
    ($($bounds:tt)*) => {
        use core::fmt;
        use core::time::Duration;

        use futures::channel::mpsc;
        use futures::stream::{Stream, StreamExt};
        use quell_runtime::runtime::{MutexLike, Runtime};
        use quell_runtime::task;
        use quell_runtime::timer::Timer;

        use crate::error::{QuellError, Result};
        use crate::throttle::ThrottleExt;
        use crate::debounce::DebounceExt;
        use crate::DefaultRuntime;

        type StateLock<T> = <DefaultRuntime as Runtime>::Mutex<T>;
        type ClockInstant = <<DefaultRuntime as Runtime>::Timer as Timer>::Instant;

        /// Wraps `callback` so that bursts of calls collapse into a single
        /// invocation on the trailing edge.
        ///
        /// Every call supersedes the previous pending invocation and
        /// restarts the quiet timer; `callback` runs once, `wait` after the
        /// last call of a burst, with that call's payload. The invocation
        /// happens on a detached driver task.
        pub fn debounce<T, F>(callback: F, wait: Duration) -> Debounced<T>
        where
            T: $($bounds)* 'static,
            F: FnMut(T) + $($bounds)* 'static,
        {
            let (calls, arrivals) = mpsc::unbounded();
            task::spawn_detached(drive(arrivals.debounce(wait), callback, "debounce"));
            Debounced {
                inner: DebouncedInner::Trailing(calls),
            }
        }

        /// Wraps `callback` so that the first call of a burst fires and the
        /// rest are suppressed.
        ///
        /// The leading edge fires **synchronously inside `call`**, in the
        /// calling task, with that call's payload. Every call, fired or
        /// suppressed, re-arms the suppression window, so the next firing
        /// requires `wait` of silence first. No trailing invocation ever
        /// occurs.
        ///
        /// The callback runs under the wrapper's internal lock: calling the
        /// same wrapper from inside its own callback deadlocks.
        pub fn debounce_immediate<T, F>(callback: F, wait: Duration) -> Debounced<T>
        where
            T: $($bounds)* 'static,
            F: FnMut(T) + $($bounds)* 'static,
        {
            let state: StateLock<LeadingState<T>> = MutexLike::new(LeadingState {
                callback: Box::new(callback),
                wait,
                last_call: None,
            });
            Debounced {
                inner: DebouncedInner::Leading(state),
            }
        }

        /// Wraps `callback` so that it runs at most once per `window`.
        ///
        /// The first call in an idle period fires right away and opens a
        /// cooldown. Calls during the cooldown are remembered (newest
        /// wins) and the survivor fires exactly at the window boundary,
        /// opening the next cooldown. Invocations happen on a detached
        /// driver task.
        pub fn throttle<T, F>(callback: F, window: Duration) -> Throttled<T>
        where
            T: $($bounds)* 'static,
            F: FnMut(T) + $($bounds)* 'static,
        {
            let (calls, arrivals) = mpsc::unbounded();
            task::spawn_detached(drive(arrivals.throttle(window), callback, "throttle"));
            Throttled { calls }
        }

        /// Hands every surviving emission to the callback, then exits once
        /// the operator runs dry. The operator keeps an armed timer alive
        /// past channel closure, so the final firing is not lost.
        async fn drive<S, T, F>(mut emissions: S, mut callback: F, op: &'static str)
        where
            S: Stream<Item = T> + Unpin,
            F: FnMut(T),
        {
            while let Some(args) = emissions.next().await {
                callback(args);
            }
            crate::debug!("{op} driver stopped: all handles dropped");
        }

        struct LeadingState<T> {
            callback: Box<dyn FnMut(T) + $($bounds)* 'static>,
            wait: Duration,
            last_call: Option<ClockInstant>,
        }

        enum DebouncedInner<T> {
            Trailing(mpsc::UnboundedSender<T>),
            Leading(StateLock<LeadingState<T>>),
        }

        /// Handle returned by [`debounce`] and [`debounce_immediate`].
        ///
        /// Clones share the one wrapper instance and its timer state.
        pub struct Debounced<T> {
            inner: DebouncedInner<T>,
        }

        impl<T> Debounced<T>
        where
            T: $($bounds)* 'static,
        {
            /// Forwards one call into the wrapper.
            ///
            /// # Errors
            /// Returns [`QuellError::Closed`] if the driver task is gone,
            /// which only happens once its runtime has shut down.
            pub fn call(&self, args: T) -> Result<()> {
                match &self.inner {
                    DebouncedInner::Trailing(calls) => {
                        calls.unbounded_send(args).map_err(|_| {
                            crate::warn!("debounce call dropped: driver is gone");
                            QuellError::closed("debounce driver is gone")
                        })
                    }
                    DebouncedInner::Leading(state) => {
                        let mut state = state.lock();
                        let now = <DefaultRuntime as Runtime>::Timer::default().now();
                        let opens_burst = match state.last_call {
                            None => true,
                            Some(previous) => now - previous >= state.wait,
                        };
                        state.last_call = Some(now);
                        if opens_burst {
                            (state.callback)(args);
                        }
                        Ok(())
                    }
                }
            }
        }

        impl<T> Clone for Debounced<T> {
            fn clone(&self) -> Self {
                let inner = match &self.inner {
                    DebouncedInner::Trailing(calls) => DebouncedInner::Trailing(calls.clone()),
                    DebouncedInner::Leading(state) => DebouncedInner::Leading(state.clone()),
                };
                Self { inner }
            }
        }

        impl<T> fmt::Debug for Debounced<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let edge = match &self.inner {
                    DebouncedInner::Trailing(_) => "trailing",
                    DebouncedInner::Leading(_) => "leading",
                };
                f.debug_struct("Debounced").field("edge", &edge).finish()
            }
        }

        /// Handle returned by [`throttle`].
        ///
        /// Clones share the one wrapper instance and its window state.
        pub struct Throttled<T> {
            calls: mpsc::UnboundedSender<T>,
        }

        impl<T> Throttled<T>
        where
            T: $($bounds)* 'static,
        {
            /// Forwards one call into the wrapper.
            ///
            /// # Errors
            /// Returns [`QuellError::Closed`] if the driver task is gone,
            /// which only happens once its runtime has shut down.
            pub fn call(&self, args: T) -> Result<()> {
                self.calls.unbounded_send(args).map_err(|_| {
                    crate::warn!("throttle call dropped: driver is gone");
                    QuellError::closed("throttle driver is gone")
                })
            }
        }

        impl<T> Clone for Throttled<T> {
            fn clone(&self) -> Self {
                Self {
                    calls: self.calls.clone(),
                }
            }
        }

        impl<T> fmt::Debug for Throttled<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct("Throttled").finish()
            }
        }
    };
}
