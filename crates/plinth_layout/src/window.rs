//! Windowed rendering of fixed-height rows.
//!
//! Given a row count, a row height, the viewport height, an overscan and a
//! scroll offset, [`compute_window`] returns the half-open slice of rows to
//! render plus the offsets needed to place it inside a full-height spacer.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ITEM_HEIGHT, DEFAULT_OVERSCAN, DEFAULT_VIEWPORT_HEIGHT};
use crate::error::{LayoutError, LayoutResult};

/// Validated geometry of a windowed list.
///
/// Fields are private so a config can only exist with positive, finite heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowConfig {
    item_height: f32,
    viewport_height: f32,
    overscan: usize,
}

impl WindowConfig {
    /// Create a config, rejecting non-positive or non-finite heights.
    pub fn new(item_height: f32, viewport_height: f32, overscan: usize) -> LayoutResult<Self> {
        if !(item_height.is_finite() && item_height > 0.0) {
            return Err(LayoutError::InvalidItemHeight { value: item_height });
        }
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return Err(LayoutError::InvalidViewportHeight {
                value: viewport_height,
            });
        }
        Ok(Self {
            item_height,
            viewport_height,
            overscan,
        })
    }

    #[inline]
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    #[inline]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    #[inline]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Rows rendered per window: a viewport's worth plus overscan on both sides.
    ///
    /// Saturates at `usize::MAX` for extreme ratios or overscans.
    pub fn visible_count(&self) -> usize {
        let viewport_rows = (self.viewport_height / self.item_height).ceil() as usize;
        viewport_rows.saturating_add(self.overscan.saturating_mul(2))
    }

    /// Height of the full content.
    pub fn total_height(&self, item_count: usize) -> f32 {
        item_count as f32 * self.item_height
    }

    /// Largest meaningful scroll offset for `item_count` rows.
    pub fn max_scroll_offset(&self, item_count: usize) -> f32 {
        (self.total_height(item_count) - self.viewport_height).max(0.0)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

#[derive(Deserialize)]
struct RawWindowConfig {
    #[serde(default = "default_item_height")]
    item_height: f32,
    #[serde(default = "default_viewport_height")]
    viewport_height: f32,
    #[serde(default = "default_overscan")]
    overscan: usize,
}

fn default_item_height() -> f32 {
    DEFAULT_ITEM_HEIGHT
}

fn default_viewport_height() -> f32 {
    DEFAULT_VIEWPORT_HEIGHT
}

fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

// Deserialization goes through `new` so invalid input is rejected.
impl<'de> Deserialize<'de> for WindowConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawWindowConfig::deserialize(deserializer)?;
        WindowConfig::new(raw.item_height, raw.viewport_height, raw.overscan)
            .map_err(serde::de::Error::custom)
    }
}

/// The slice of rows to render.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowResult {
    /// First rendered row
    pub start_index: usize,
    /// One past the last rendered row
    pub end_index: usize,
    /// Distance from the content top to the first rendered row
    pub offset_top: f32,
    /// Height of the full content
    pub total_height: f32,
}

impl WindowResult {
    /// Rendered rows as a range.
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Number of rendered rows.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Space below the last rendered row, for a trailing spacer.
    pub fn bottom_padding(&self, item_height: f32) -> f32 {
        (self.total_height - self.offset_top - self.len() as f32 * item_height).max(0.0)
    }
}

/// Compute the rows to render for a scroll offset.
///
/// Offsets past the end are clamped; negative and NaN offsets behave like zero.
pub fn compute_window(item_count: usize, config: &WindowConfig, scroll_offset: f32) -> WindowResult {
    let item_height = config.item_height();
    let visible_count = config.visible_count();
    let max_scroll_offset = config.max_scroll_offset(item_count);
    let scroll_offset = if scroll_offset.is_nan() { 0.0 } else { scroll_offset };
    let clamped_offset = scroll_offset.min(max_scroll_offset).max(0.0);

    let first_visible = (clamped_offset / item_height).floor() as usize;
    let raw_start = first_visible.saturating_sub(config.overscan());
    let max_start = item_count.saturating_sub(visible_count);
    let start_index = raw_start.min(max_start);
    let end_index = item_count.min(start_index.saturating_add(visible_count));

    WindowResult {
        start_index,
        end_index,
        offset_top: start_index as f32 * item_height,
        total_height: config.total_height(item_count),
    }
}

/// [`compute_window`] with unvalidated parameters.
pub fn try_compute_window(
    item_count: usize,
    item_height: f32,
    viewport_height: f32,
    overscan: usize,
    scroll_offset: f32,
) -> LayoutResult<WindowResult> {
    let config = WindowConfig::new(item_height, viewport_height, overscan)?;
    Ok(compute_window(item_count, &config, scroll_offset))
}
