// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::wasm_suite::helpers::{query_alpha, query_beta, query_gamma, test_channel, Query};
use futures::StreamExt;
use quell::prelude::*;
use std::time::Duration;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
async fn test_throttle_leading_then_boundary() {
    let (tx, stream) = test_channel::<Query>();
    let mut throttled = stream.throttle(Duration::from_millis(30));

    tx.unbounded_send(query_alpha()).unwrap();
    assert_eq!(throttled.next().await, Some(query_alpha()));

    tx.unbounded_send(query_beta()).unwrap();
    tx.unbounded_send(query_gamma()).unwrap();
    drop(tx);

    assert_eq!(throttled.next().await, Some(query_gamma()));
    assert_eq!(throttled.next().await, None);
}
