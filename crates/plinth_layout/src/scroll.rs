//! Scroll state for windowed lists.

use std::ops::Range;

use crate::error::LayoutResult;
use crate::window::{compute_window, WindowConfig, WindowResult};

/// Vertical scroll position of a list viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Scroll offset from the content top, never negative
    pub scroll_offset: f32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll to a specific offset
    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Scroll by a delta
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_offset + delta);
    }

    /// Pull the offset back inside `[0, max_offset]`.
    ///
    /// Returns true if the offset had to move.
    pub fn clamp_to(&mut self, max_offset: f32) -> bool {
        let clamped = self.scroll_offset.min(max_offset.max(0.0));
        if clamped != self.scroll_offset {
            self.scroll_offset = clamped;
            true
        } else {
            false
        }
    }
}

/// Owns the scroll offset of a windowed list and keeps the rendered slice in
/// step with it.
///
/// Every offset change recomputes the [`WindowResult`]; the arithmetic is
/// constant time, so nothing is debounced here.
#[derive(Debug, Clone)]
pub struct ScrollWindowController {
    config: WindowConfig,
    item_count: usize,
    state: ScrollState,
    window: WindowResult,
}

impl ScrollWindowController {
    /// Create a controller scrolled to the top.
    pub fn new(config: WindowConfig, item_count: usize) -> Self {
        Self {
            config,
            item_count,
            state: ScrollState::new(),
            window: compute_window(item_count, &config, 0.0),
        }
    }

    /// Create a controller from unvalidated parameters.
    pub fn try_new(item_height: f32, viewport_height: f32, overscan: usize, item_count: usize) -> LayoutResult<Self> {
        let config = WindowConfig::new(item_height, viewport_height, overscan)?;
        Ok(Self::new(config, item_count))
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current (clamped) scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.state.scroll_offset
    }

    /// Largest offset the current content allows.
    pub fn max_scroll_offset(&self) -> f32 {
        self.config.max_scroll_offset(self.item_count)
    }

    /// The slice to render.
    pub fn window(&self) -> &WindowResult {
        &self.window
    }

    /// Rendered rows as a range.
    pub fn visible_range(&self) -> Range<usize> {
        self.window.range()
    }

    /// The rows of `items` to render.
    ///
    /// `items` should hold `item_count` rows; a shorter slice is cut to what it has.
    pub fn visible_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.window.end_index.min(items.len());
        let start = self.window.start_index.min(end);
        &items[start..end]
    }

    /// The viewport reported a scroll position.
    ///
    /// The raw offset is stored and then pulled back inside the content if it
    /// overshoots, e.g. after the list shrank while scrolled near the bottom.
    pub fn on_scroll(&mut self, offset: f32) -> &WindowResult {
        self.state.scroll_to(offset);
        if self.state.clamp_to(self.max_scroll_offset()) {
            log::trace!(
                "ScrollWindow: offset {} corrected to {}",
                offset,
                self.state.scroll_offset
            );
        }
        self.recompute();
        &self.window
    }

    /// The number of rows changed. A now out-of-range offset is corrected.
    pub fn set_item_count(&mut self, item_count: usize) -> &WindowResult {
        self.item_count = item_count;
        if self.state.clamp_to(self.max_scroll_offset()) {
            log::debug!(
                "ScrollWindow: list shrank to {} rows, offset corrected to {}",
                item_count,
                self.state.scroll_offset
            );
        }
        self.recompute();
        &self.window
    }

    /// Replace the list geometry, keeping the offset within the new bounds.
    pub fn set_config(&mut self, config: WindowConfig) -> &WindowResult {
        self.config = config;
        self.state.clamp_to(self.max_scroll_offset());
        self.recompute();
        &self.window
    }

    fn recompute(&mut self) {
        self.window = compute_window(self.item_count, &self.config, self.state.scroll_offset);
    }
}
