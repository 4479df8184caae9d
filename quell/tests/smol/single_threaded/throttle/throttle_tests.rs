// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::smol_suite::helpers::test_channel;
use futures::StreamExt;
use quell::prelude::*;
use quell_test_utils::{query_alpha, query_beta, query_gamma, Query};
use std::time::Duration;

#[test]
fn test_throttle_leading_then_boundary() {
    smol::block_on(async {
        let (tx, stream) = test_channel::<Query>();
        let mut throttled = stream.throttle(Duration::from_millis(30));

        // The first arrival passes straight through.
        tx.unbounded_send(query_alpha()).unwrap();
        assert_eq!(throttled.next().await, Some(query_alpha()));

        // A rapid pair within the window: the newest one survives and
        // fires at the boundary.
        tx.unbounded_send(query_beta()).unwrap();
        tx.unbounded_send(query_gamma()).unwrap();
        drop(tx);

        assert_eq!(throttled.next().await, Some(query_gamma()));
        assert_eq!(throttled.next().await, None);
    });
}
