// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM bar collections.
//!
//! Each side's array is a row of `<div>` bars sharing a class name. [`DomBars`]
//! resolves that class to a list of [`HtmlElement`]s once and then applies
//! [`RenderTarget`] operations as inline style changes: highlight and default
//! set `background-color` from a [`BarPalette`], heights set `height` in
//! pixels.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use sortcompare_core::config::Side;
use sortcompare_core::render::RenderTarget;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

/// Resting bar color.
pub const DEFAULT_COLOR: &str = "#00f7ff";

/// Color of bars under comparison.
pub const COMPARISON_COLOR: &str = "#ff0048";

/// Returns the class name shared by the bars of `side`.
#[must_use]
pub const fn bar_class(side: Side) -> &'static str {
    match side {
        Side::A => "arr-bar-a",
        Side::B => "arr-bar-b",
    }
}

/// Bar colors as CSS color strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BarPalette {
    /// Resting color.
    pub default: String,
    /// Color while under comparison.
    pub comparison: String,
}

impl Default for BarPalette {
    fn default() -> Self {
        Self {
            default: DEFAULT_COLOR.into(),
            comparison: COMPARISON_COLOR.into(),
        }
    }
}

/// A [`RenderTarget`] over a fixed list of DOM bars.
pub struct DomBars {
    bars: Vec<HtmlElement>,
    palette: BarPalette,
}

impl core::fmt::Debug for DomBars {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomBars")
            .field("bars_len", &self.bars.len())
            .field("palette", &self.palette)
            .finish()
    }
}

impl DomBars {
    /// Wraps already-resolved bar elements, in position order.
    #[must_use]
    pub fn new(bars: Vec<HtmlElement>, palette: BarPalette) -> Self {
        Self { bars, palette }
    }

    /// Collects every element of `document` carrying `side`'s bar class.
    ///
    /// Elements that are not `HtmlElement`s are skipped.
    #[must_use]
    pub fn for_side(document: &Document, side: Side, palette: BarPalette) -> Self {
        let collection = document.get_elements_by_class_name(bar_class(side));
        let bars = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        Self::new(bars, palette)
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns `true` if no bars were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    fn color(&self, pos: usize, color: &str) {
        if let Some(bar) = self.bars.get(pos) {
            let _ = bar.style().set_property("background-color", color);
        }
    }
}

impl RenderTarget<u32> for DomBars {
    fn set_highlight(&mut self, pos: usize) {
        self.color(pos, &self.palette.comparison);
    }

    fn set_default(&mut self, pos: usize) {
        self.color(pos, &self.palette.default);
    }

    fn set_height(&mut self, pos: usize, height: u32) {
        if let Some(bar) = self.bars.get(pos) {
            let _ = bar.style().set_property("height", &format!("{height}px"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_defaults() {
        let palette = BarPalette::default();
        assert_eq!(palette.default, "#00f7ff");
        assert_eq!(palette.comparison, "#ff0048");
    }

    #[test]
    fn sides_use_distinct_classes() {
        assert_eq!(bar_class(Side::A), "arr-bar-a");
        assert_eq!(bar_class(Side::B), "arr-bar-b");
    }
}
