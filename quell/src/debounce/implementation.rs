// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Macro that generates the complete debounce implementation.
///
/// This macro eliminates duplication between the multi-threaded and
/// single-threaded implementations, which differ only in trait bounds
/// (Send vs not).
macro_rules! define_debounce_impl {
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

        /// Extension trait providing the `debounce` operators for streams.
        pub trait DebounceExt<T, R>: Stream<Item = T> + Sized
        where
            T: $($bounds)* 'static,
            R: Runtime,
        {
            /// Debounces the stream on the trailing edge.
            ///
            /// Each arriving item supersedes the pending one and restarts
            /// the quiet timer; the pending item is emitted once `wait`
            /// elapses with no newer arrival. During a burst spaced closer
            /// than `wait`, nothing is emitted; one item, the newest, is
            /// emitted `wait` after the burst ends.
            ///
            /// A `wait` of zero passes every item through on the next poll.
            ///
            /// # Arguments
            ///
            /// * `wait` - The duration of required inactivity before emitting
            fn debounce(self, wait: Duration) -> impl Stream<Item = T> + $($bounds)* 'static;

            /// Debounces the stream on the leading edge.
            ///
            /// An item is emitted immediately iff no item arrived within the
            /// preceding `wait`; every arrival re-arms the suppression
            /// window, emitted or not. No trailing emission ever occurs in
            /// this mode.
            ///
            /// # Arguments
            ///
            /// * `wait` - The quiet period required before the next emission
            fn debounce_leading(self, wait: Duration) -> impl Stream<Item = T> + $($bounds)* 'static;
        }

        impl<S, T> DebounceExt<T, DefaultRuntime> for S
        where
            S: Stream<Item = T> + $($bounds)* 'static,
            T: $($bounds)* 'static,
        {
            fn debounce(self, wait: Duration) -> impl Stream<Item = T> + $($bounds)* 'static {
                Box::pin(DebounceStream::<S, DefaultRuntime> {
                    stream: self,
                    wait,
                    pending: None,
                    sleep: None,
                    source_done: false,
                })
            }

            fn debounce_leading(self, wait: Duration) -> impl Stream<Item = T> + $($bounds)* 'static {
                Box::pin(LeadingDebounceStream::<S, DefaultRuntime> {
                    stream: self,
                    wait,
                    last_arrival: None,
                })
            }
        }

        #[pin_project]
        struct DebounceStream<S, R>
        where
            S: Stream,
            R: Runtime,
        {
            #[pin]
            stream: S,
            wait: Duration,
            pending: Option<S::Item>,
            #[pin]
            sleep: Option<<R::Timer as Timer>::Sleep>,
            source_done: bool,
        }

        impl<S, R> Stream for DebounceStream<S, R>
        where
            S: Stream,
            R: Runtime,
        {
            type Item = S::Item;

            fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
                let mut this = self.project();

                loop {
                    // A pending item is emitted once its quiet period runs out.
                    if this.pending.is_some() {
                        if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                            if sleep.poll(cx).is_ready() {
                                this.sleep.set(None);
                                return Poll::Ready(this.pending.take());
                            }
                        }
                    }

                    if *this.source_done {
                        // The armed timer outlives the source; the pending
                        // item still goes out after its full quiet period.
                        return if this.pending.is_none() {
                            Poll::Ready(None)
                        } else {
                            Poll::Pending
                        };
                    }

                    match this.stream.as_mut().poll_next(cx) {
                        Poll::Ready(Some(item)) => {
                            // New arrival: supersede the pending item and
                            // restart the quiet timer.
                            let timer = <R as Runtime>::Timer::default();
                            this.sleep.set(Some(timer.sleep_future(*this.wait)));
                            *this.pending = Some(item);

                            // Re-check the timer; a zero wait is ready immediately.
                            continue;
                        }
                        Poll::Ready(None) => {
                            *this.source_done = true;
                            continue;
                        }
                        Poll::Pending => {
                            // Waker registered by the sleep (if armed) and
                            // by the source poll above.
                            return Poll::Pending;
                        }
                    }
                }
            }
        }

        /// Leading-edge debounce needs no sleep future: whether an arrival
        /// opens a new burst is decided by the gap since the previous one.
        #[pin_project]
        struct LeadingDebounceStream<S, R>
        where
            S: Stream,
            R: Runtime,
        {
            #[pin]
            stream: S,
            wait: Duration,
            last_arrival: Option<<R::Timer as Timer>::Instant>,
        }

        impl<S, R> Stream for LeadingDebounceStream<S, R>
        where
            S: Stream,
            R: Runtime,
        {
            type Item = S::Item;

            fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
                let mut this = self.project();

                loop {
                    match this.stream.as_mut().poll_next(cx) {
                        Poll::Ready(Some(item)) => {
                            let now = <R as Runtime>::Timer::default().now();
                            let opens_burst = match *this.last_arrival {
                                None => true,
                                Some(previous) => now - previous >= *this.wait,
                            };

                            // Every arrival re-arms the window, fired or not.
                            *this.last_arrival = Some(now);

                            if opens_burst {
                                return Poll::Ready(Some(item));
                            }
                            continue;
                        }
                        Poll::Ready(None) => return Poll::Ready(None),
                        Poll::Pending => return Poll::Pending,
                    }
                }
            }
        }
    };
}
