// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` timer host.
//!
//! [`WindowTimers`] hands each playback cue to the browser's `setTimeout`.
//! Browsers never run a timeout callback synchronously and run equal-delay
//! timeouts in registration order, which is what playback relies on.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use sortcompare_core::time::{Duration, HostTime};
use sortcompare_core::timer::{Callback, TimerHost};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn global_set_timeout(callback: &JsValue, millis: f64) -> i32;
}

/// A [`TimerHost`] backed by the global `setTimeout`.
///
/// Fractional millisecond delays are passed through unchanged; browsers clamp
/// and round them as they see fit.
#[derive(Debug, Default)]
pub struct WindowTimers {
    scheduled: u64,
}

impl WindowTimers {
    /// Creates a timer host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks handed to `setTimeout` so far.
    #[must_use]
    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }
}

impl TimerHost for WindowTimers {
    fn now(&self) -> HostTime {
        crate::now()
    }

    fn set_timeout(&mut self, delay: Duration, callback: Callback) {
        // The JS function frees its Rust closure after the single call.
        let js = Closure::once_into_js(callback);
        global_set_timeout(&js, delay.as_millis_f64());
        self.scheduled += 1;
    }
}
