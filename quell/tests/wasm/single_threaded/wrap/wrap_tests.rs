// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::wasm_suite::helpers::{query_alpha, query_beta, Query};
use gloo_timers::future::TimeoutFuture;
use quell::wrap;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::wasm_bindgen_test;

// No Send bounds on this target: an Rc-backed log works as the recorder.

#[wasm_bindgen_test]
async fn test_debounced_wrapper_collapses_burst() {
    let calls: Rc<RefCell<Vec<Query>>> = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&calls);

    let debounced = wrap::debounce(
        move |args| log.borrow_mut().push(args),
        Duration::from_millis(30),
    );

    debounced.call(query_alpha()).unwrap();
    debounced.call(query_beta()).unwrap();

    TimeoutFuture::new(200).await;
    assert_eq!(*calls.borrow(), vec![query_beta()]);
}

#[wasm_bindgen_test]
async fn test_debounce_immediate_fires_synchronously() {
    let calls: Rc<RefCell<Vec<Query>>> = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&calls);

    let debounced = wrap::debounce_immediate(
        move |args| log.borrow_mut().push(args),
        Duration::from_millis(30),
    );

    debounced.call(query_alpha()).unwrap();
    assert_eq!(*calls.borrow(), vec![query_alpha()]);

    debounced.call(query_beta()).unwrap();
    assert_eq!(*calls.borrow(), vec![query_alpha()]);
}
