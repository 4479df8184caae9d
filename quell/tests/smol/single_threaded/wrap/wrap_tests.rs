// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use quell::wrap;
use quell_test_utils::{query_alpha, query_beta, CallRecorder, Query};
use std::time::Duration;

#[test]
fn test_debounced_wrapper_on_smol() {
    smol::block_on(async {
        let recorder = CallRecorder::<Query>::new();
        let debounced = wrap::debounce(recorder.callback(), Duration::from_millis(30));

        debounced.call(query_alpha()).unwrap();
        debounced.call(query_beta()).unwrap();

        smol::Timer::after(Duration::from_millis(200)).await;
        assert_eq!(recorder.calls(), vec![query_beta()]);
    });
}

#[test]
fn test_debounce_immediate_wrapper_on_smol() {
    smol::block_on(async {
        let recorder = CallRecorder::<Query>::new();
        let debounced = wrap::debounce_immediate(recorder.callback(), Duration::from_millis(30));

        // Fires synchronously, no executor round-trip involved.
        debounced.call(query_alpha()).unwrap();
        assert_eq!(recorder.calls(), vec![query_alpha()]);
    });
}
