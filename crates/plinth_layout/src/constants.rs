//! Centralized constants for plinth_layout
//!
//! Default option values and tolerances are defined here so the solver,
//! controllers and configuration types agree on them.

use std::time::Duration;

// =============================================================================
// Overlay Positioning
// =============================================================================

/// Default vertical gap between the trigger and the panel
pub const DEFAULT_OVERLAY_OFFSET: f32 = 16.0;

/// Default minimum clearance between the panel and any viewport edge
pub const DEFAULT_OVERLAY_PADDING: f32 = 16.0;

/// Trailing debounce applied to resize/scroll recomputation
pub const DEFAULT_REPOSITION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Longest accepted debounce delay
pub const MAX_REPOSITION_DEBOUNCE: Duration = Duration::from_secs(5);

/// Horizontal anchor used by the centered strategy, as a share of the trigger width
pub const CENTER_ANCHOR_PERCENT: f32 = 50.0;

// =============================================================================
// Windowed Lists
// =============================================================================

/// Default fixed row height
pub const DEFAULT_ITEM_HEIGHT: f32 = 96.0;

/// Default height of the scrolling viewport
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 320.0;

/// Default number of extra rows rendered above and below the viewport
pub const DEFAULT_OVERSCAN: usize = 3;

// =============================================================================
// Tolerances & Math
// =============================================================================

/// Epsilon for float comparison
pub const FLOAT_EPSILON: f32 = 0.0001;

/// Format a pixel length for style output.
/// Values close to an integer are printed without a fraction.
pub fn format_px(value: f32) -> String {
    if (value - value.round()).abs() < FLOAT_EPSILON {
        format!("{}px", value.round() as i64)
    } else {
        let formatted = format!("{:.3}", value);
        format!(
            "{}px",
            formatted.trim_end_matches('0').trim_end_matches('.')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_px_integer() {
        assert_eq!(format_px(16.0), "16px");
        assert_eq!(format_px(644.00001), "644px");
        assert_eq!(format_px(-10.0), "-10px");
    }

    #[test]
    fn test_format_px_fraction() {
        assert_eq!(format_px(12.5), "12.5px");
        assert_eq!(format_px(3.14159), "3.142px");
    }

    #[test]
    fn test_defaults_are_sane() {
        assert!(DEFAULT_ITEM_HEIGHT > 0.0);
        assert!(DEFAULT_VIEWPORT_HEIGHT > 0.0);
        assert!(DEFAULT_OVERLAY_OFFSET >= 0.0);
        assert!(DEFAULT_OVERLAY_PADDING >= 0.0);
        assert_eq!(DEFAULT_REPOSITION_DEBOUNCE, Duration::from_millis(150));
        assert!(DEFAULT_REPOSITION_DEBOUNCE <= MAX_REPOSITION_DEBOUNCE);
    }
}
