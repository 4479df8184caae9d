// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Macro that generates the complete throttle implementation.
///
/// This macro eliminates duplication between the multi-threaded and
/// single-threaded implementations, which differ only in trait bounds
/// (Send vs not).
macro_rules! define_throttle_impl {
    ($($bounds:tt)*) => {
        use core::future::Future;
        use core::pin::Pin;
        use core::task::{Context, Poll};
        use core::time::Duration;

        use futures::Stream;
        use pin_project::pin_project;
        use quell_runtime::runtime::Runtime;
        use quell_runtime::timer::Timer;

        use crate::DefaultRuntime;

        /// Extension trait providing the `throttle` operator for streams.
        pub trait ThrottleExt<T, R>: Stream<Item = T> + Sized
        where
            T: $($bounds)* 'static,
            R: Runtime,
        {
            /// Throttles the stream to at most one emission per `window`.
            ///
            /// The first item in an idle period is emitted immediately and
            /// opens a cooldown. During the cooldown the newest arrival is
            /// stashed (earlier suppressed arrivals are superseded) and
            /// emitted exactly at the window boundary, which opens the next
            /// cooldown. A cooldown that lapses without arrivals leaves the
            /// operator idle, so the next arrival fires immediately again.
            ///
            /// A `window` of zero passes every item through.
            ///
            /// # Arguments
            ///
            /// * `window` - The minimum spacing between emissions
            fn throttle(self, window: Duration) -> impl Stream<Item = T> + $($bounds)* 'static;
        }

        impl<S, T> ThrottleExt<T, DefaultRuntime> for S
        where
            S: Stream<Item = T> + $($bounds)* 'static,
            T: $($bounds)* 'static,
        {
            fn throttle(self, window: Duration) -> impl Stream<Item = T> + $($bounds)* 'static {
                Box::pin(ThrottleStream::<S, DefaultRuntime> {
                    stream: self,
                    window,
                    last_emission: None,
                    pending: None,
                    sleep: None,
                    source_done: false,
                })
            }
        }

        #[pin_project]
        struct ThrottleStream<S, R>
        where
            S: Stream,
            R: Runtime,
        {
            #[pin]
            stream: S,
            window: Duration,
            last_emission: Option<<R::Timer as Timer>::Instant>,
            pending: Option<S::Item>,
            #[pin]
            sleep: Option<<R::Timer as Timer>::Sleep>,
            source_done: bool,
        }

        impl<S, R> Stream for ThrottleStream<S, R>
        where
            S: Stream,
            R: Runtime,
        {
            type Item = S::Item;

            fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
                let mut this = self.project();

                loop {
                    // A stashed item fires exactly at the window boundary,
                    // which also opens the next cooldown window.
                    if this.pending.is_some() {
                        if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                            if sleep.poll(cx).is_ready() {
                                this.sleep.set(None);
                                let timer = <R as Runtime>::Timer::default();
                                *this.last_emission = Some(timer.now());
                                return Poll::Ready(this.pending.take());
                            }
                        }
                    }

                    if *this.source_done {
                        // The boundary timer outlives the source; the
                        // stashed item still goes out on time.
                        return if this.pending.is_none() {
                            Poll::Ready(None)
                        } else {
                            Poll::Pending
                        };
                    }

                    match this.stream.as_mut().poll_next(cx) {
                        Poll::Ready(Some(item)) => {
                            let timer = <R as Runtime>::Timer::default();
                            let now = timer.now();
                            let cooling = match *this.last_emission {
                                None => false,
                                Some(at) => now - at < *this.window,
                            };

                            if !cooling && this.pending.is_none() {
                                // Idle: emit immediately, open the cooldown.
                                *this.last_emission = Some(now);
                                return Poll::Ready(Some(item));
                            }

                            // Cooling: the newest suppressed arrival wins.
                            // The boundary deadline is shared, not restarted.
                            *this.pending = Some(item);
                            if this.sleep.as_mut().as_pin_mut().is_none() {
                                let elapsed = match *this.last_emission {
                                    Some(at) => now - at,
                                    None => Duration::ZERO,
                                };
                                let remaining = this.window.saturating_sub(elapsed);
                                this.sleep.set(Some(timer.sleep_future(remaining)));
                            }
                            continue;
                        }
                        Poll::Ready(None) => {
                            *this.source_done = true;
                            continue;
                        }
                        Poll::Pending => {
                            // Waker registered by the boundary sleep (if
                            // armed) and by the source poll above.
                            return Poll::Pending;
                        }
                    }
                }
            }
        }
    };
}
