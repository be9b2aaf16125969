// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for sortcompare.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`WindowTimers`]: `setTimeout` timer host for playback cues
//! - [`DomBars`]: DOM bar collection as a render target

#![no_std]

extern crate alloc;

mod bars;
mod timers;

pub use bars::{BarPalette, COMPARISON_COLOR, DEFAULT_COLOR, DomBars, bar_class};
pub use sortcompare_core::render::RenderTarget;
pub use sortcompare_core::timer::TimerHost;
pub use timers::WindowTimers;

use sortcompare_core::time::HostTime;
use wasm_bindgen::prelude::*;

// Direct global binding instead of `web_sys::Window` methods; avoids
// fetching (and unwrapping) the Window/Performance objects on every cue.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks.
#[must_use]
pub fn now() -> HostTime {
    millis_to_host_time(performance_now())
}

/// Converts a `DOMHighResTimeStamp` (milliseconds) to microsecond ticks.
#[must_use]
pub fn millis_to_host_time(ms: f64) -> HostTime {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_become_microseconds() {
        assert_eq!(millis_to_host_time(16.5), HostTime(16_500));
        assert_eq!(millis_to_host_time(0.0), HostTime::ZERO);
    }
}
