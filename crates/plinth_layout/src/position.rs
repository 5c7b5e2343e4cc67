//! Viewport-aware placement of an overlay panel next to its trigger.
//!
//! The solver is a pure function of the trigger rect, the panel rect, the
//! viewport size and a [`PositionConfig`]. Horizontal and vertical placement
//! are decided independently:
//!
//! - Horizontally the panel is centered on the trigger, or flush with one of
//!   its edges, falling back to the padded viewport edge when that would run
//!   off-screen. A panel too wide for the padded viewport stretches between
//!   both padded edges.
//! - Vertically the panel opens below the trigger if it fits, above if it fits
//!   there instead, and otherwise on the roomier side with internal scrolling.

use serde::{Deserialize, Serialize};

use crate::constants::{
    format_px, CENTER_ANCHOR_PERCENT, DEFAULT_OVERLAY_OFFSET, DEFAULT_OVERLAY_PADDING,
};
use crate::geometry::{Rect, ViewportSize};

/// Preferred horizontal alignment of the panel relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Panel's left edge flush with the trigger's left edge
    Left,
    /// Panel centered on the trigger
    #[default]
    Center,
    /// Panel's right edge flush with the trigger's right edge
    Right,
}

impl Alignment {
    /// Get all alignments in left-to-right order.
    pub fn all() -> &'static [Alignment] {
        &[Alignment::Left, Alignment::Center, Alignment::Right]
    }
}

/// Options for a single positioning pass.
///
/// Negative values are accepted as-is; keeping them sane is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    pub preferred_alignment: Alignment,
    /// Vertical gap between trigger and panel
    pub offset: f32,
    /// Minimum clearance from any viewport edge
    pub padding: f32,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            preferred_alignment: Alignment::default(),
            offset: DEFAULT_OVERLAY_OFFSET,
            padding: DEFAULT_OVERLAY_PADDING,
        }
    }
}

impl PositionConfig {
    pub fn new(preferred_alignment: Alignment, offset: f32, padding: f32) -> Self {
        Self {
            preferred_alignment,
            offset,
            padding,
        }
    }

    /// Builder: set the preferred alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.preferred_alignment = alignment;
        self
    }

    /// Builder: set the trigger-to-panel gap.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Builder: set the viewport edge clearance.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

/// Horizontal anchoring strategy.
///
/// Pixel values are distances from the matching viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum HorizontalAnchor {
    /// Anchored at the trigger's horizontal center and shifted left by half its own width
    Centered,
    /// Left edge at the given distance from the viewport's left edge
    Left { left: f32 },
    /// Right edge at the given distance from the viewport's right edge
    Right { right: f32 },
    /// Both edges pinned; the panel spans the padded viewport
    Stretch { left: f32, right: f32 },
}

/// Vertical anchoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// Flows below the trigger, `gap` pixels under its bottom edge
    Below { gap: f32 },
    /// Bottom edge sits `gap` pixels above the trigger's top edge
    Above { gap: f32 },
}

/// Sparse placement record consumed by the rendering layer.
///
/// An empty record means "no override": the panel keeps its intrinsic placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    /// Content may exceed `max_height`; the panel should scroll internally
    #[serde(default)]
    pub overflow: bool,
}

impl PositionResult {
    /// The empty record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Centered placement applied before the first measurement so that the
    /// panel does not jump from an arbitrary spot to the computed one.
    pub fn initial() -> Self {
        Self {
            horizontal: Some(HorizontalAnchor::Centered),
            ..Self::default()
        }
    }

    /// Check if no placement is applied.
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none() && self.max_height.is_none()
    }

    /// Render the placement as style properties, in application order.
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = Vec::new();

        match self.horizontal {
            Some(HorizontalAnchor::Centered) => {
                props.push(("left", format!("{}%", CENTER_ANCHOR_PERCENT)));
                props.push(("transform", format!("translateX(-{}%)", CENTER_ANCHOR_PERCENT)));
            }
            Some(HorizontalAnchor::Left { left }) => {
                props.push(("left", format_px(left)));
                props.push(("transform", "none".to_string()));
            }
            Some(HorizontalAnchor::Right { right }) => {
                props.push(("right", format_px(right)));
                props.push(("transform", "none".to_string()));
            }
            Some(HorizontalAnchor::Stretch { left, right }) => {
                props.push(("left", format_px(left)));
                props.push(("right", format_px(right)));
                props.push(("transform", "none".to_string()));
            }
            None => {}
        }

        match self.vertical {
            Some(VerticalAnchor::Below { .. }) => {
                props.push(("top", "auto".to_string()));
                props.push(("bottom", "auto".to_string()));
            }
            Some(VerticalAnchor::Above { gap }) => {
                props.push(("top", "auto".to_string()));
                props.push(("bottom", format!("calc(100% + {})", format_px(gap))));
            }
            None => {}
        }

        if let Some(max_height) = self.max_height {
            props.push(("max-height", format_px(max_height)));
        }
        if self.overflow {
            props.push(("overflow-y", "auto".to_string()));
        }

        props
    }

    /// Resolve the horizontal span `[left, right]` the panel occupies in viewport
    /// coordinates, or `None` if no horizontal placement is applied.
    pub fn horizontal_span(&self, trigger: &Rect, panel: &Rect, viewport: ViewportSize) -> Option<(f32, f32)> {
        let span = match self.horizontal? {
            HorizontalAnchor::Centered => {
                let center = trigger.center_x();
                (center - panel.width / 2.0, center + panel.width / 2.0)
            }
            HorizontalAnchor::Left { left } => (left, left + panel.width),
            HorizontalAnchor::Right { right } => {
                let edge = viewport.width - right;
                (edge - panel.width, edge)
            }
            HorizontalAnchor::Stretch { left, right } => (left, viewport.width - right),
        };
        Some(span)
    }

    /// Resolve the full panel rect in viewport coordinates.
    ///
    /// The height is capped at `max_height`. Returns `None` unless both a
    /// horizontal and a vertical placement are applied.
    pub fn resolve_rect(&self, trigger: &Rect, panel: &Rect, viewport: ViewportSize) -> Option<Rect> {
        let (left, right) = self.horizontal_span(trigger, panel, viewport)?;
        let height = match self.max_height {
            Some(max_height) => panel.height.min(max_height.max(0.0)),
            None => panel.height,
        };
        let top = match self.vertical? {
            VerticalAnchor::Below { gap } => trigger.bottom + gap,
            VerticalAnchor::Above { gap } => trigger.top - gap - height,
        };
        Some(Rect::from_edges(left, top, right, top + height))
    }
}

/// Compute the placement of `panel` relative to `trigger`.
///
/// Both rects must be fresh measurements; stale input gives a stale but
/// well-formed result.
pub fn solve(trigger: &Rect, panel: &Rect, viewport: ViewportSize, config: &PositionConfig) -> PositionResult {
    let horizontal = solve_horizontal(trigger, panel, viewport, config);
    let (vertical, max_height, overflow) = solve_vertical(trigger, panel, viewport, config);

    PositionResult {
        horizontal: Some(horizontal),
        vertical: Some(vertical),
        max_height: Some(max_height),
        overflow,
    }
}

/// Like [`solve`], for measurements that may be missing.
///
/// A missing trigger or panel yields the empty result.
pub fn solve_measured(
    trigger: Option<Rect>,
    panel: Option<Rect>,
    viewport: ViewportSize,
    config: &PositionConfig,
) -> PositionResult {
    match (trigger, panel) {
        (Some(trigger), Some(panel)) => solve(&trigger, &panel, viewport, config),
        _ => PositionResult::empty(),
    }
}

fn solve_horizontal(trigger: &Rect, panel: &Rect, viewport: ViewportSize, config: &PositionConfig) -> HorizontalAnchor {
    let padding = config.padding;
    let width = panel.width;

    if width > viewport.width - padding * 2.0 {
        return HorizontalAnchor::Stretch {
            left: padding,
            right: padding,
        };
    }

    match config.preferred_alignment {
        Alignment::Center => {
            let center = trigger.center_x();
            let centered_left = center - width / 2.0;
            let centered_right = center + width / 2.0;

            if centered_left >= padding && centered_right <= viewport.width - padding {
                HorizontalAnchor::Centered
            } else if centered_right > viewport.width - padding {
                HorizontalAnchor::Right {
                    right: padding.max(viewport.width - trigger.right),
                }
            } else {
                HorizontalAnchor::Left {
                    left: padding.max(trigger.left),
                }
            }
        }
        Alignment::Right => {
            if trigger.right - width >= padding {
                HorizontalAnchor::Right {
                    right: viewport.width - trigger.right,
                }
            } else {
                HorizontalAnchor::Left { left: padding }
            }
        }
        Alignment::Left => {
            if trigger.left + width <= viewport.width - padding {
                HorizontalAnchor::Left { left: trigger.left }
            } else {
                HorizontalAnchor::Right { right: padding }
            }
        }
    }
}

fn solve_vertical(
    trigger: &Rect,
    panel: &Rect,
    viewport: ViewportSize,
    config: &PositionConfig,
) -> (VerticalAnchor, f32, bool) {
    let gap = config.offset;
    let available_below = viewport.height - trigger.bottom - gap;
    let available_above = trigger.top - gap;
    let height = panel.height;

    if height <= available_below {
        (VerticalAnchor::Below { gap }, available_below, false)
    } else if height <= available_above {
        (VerticalAnchor::Above { gap }, available_above, false)
    } else if available_below >= available_above {
        // Ties go below
        (VerticalAnchor::Below { gap }, available_below, true)
    } else {
        (VerticalAnchor::Above { gap }, available_above, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn viewport() -> ViewportSize {
        ViewportSize::new(1000.0, 800.0)
    }

    fn trigger() -> Rect {
        Rect::from_edges(400.0, 100.0, 600.0, 140.0)
    }

    #[test]
    fn test_default_config() {
        let config = PositionConfig::default();
        assert_eq!(config.preferred_alignment, Alignment::Center);
        assert_eq!(config.offset, 16.0);
        assert_eq!(config.padding, 16.0);
    }

    #[test]
    fn test_centered_below() {
        let result = solve(&trigger(), &Rect::sized(300.0, 200.0), viewport(), &PositionConfig::default());

        assert_eq!(result.horizontal, Some(HorizontalAnchor::Centered));
        assert_eq!(result.vertical, Some(VerticalAnchor::Below { gap: 16.0 }));
        assert_eq!(result.max_height, Some(644.0));
        assert!(!result.overflow);

        let span = result.horizontal_span(&trigger(), &Rect::sized(300.0, 200.0), viewport());
        assert_eq!(span, Some((350.0, 650.0)));
    }

    #[test]
    fn test_too_wide_stretches() {
        let result = solve(&trigger(), &Rect::sized(980.0, 200.0), viewport(), &PositionConfig::default());
        assert_eq!(
            result.horizontal,
            Some(HorizontalAnchor::Stretch { left: 16.0, right: 16.0 })
        );
    }

    #[test]
    fn test_stretch_dominates_every_alignment() {
        for alignment in Alignment::all() {
            let config = PositionConfig::default().with_alignment(*alignment);
            let result = solve(&trigger(), &Rect::sized(969.0, 50.0), viewport(), &config);
            assert!(matches!(result.horizontal, Some(HorizontalAnchor::Stretch { .. })));
        }
    }

    #[test]
    fn test_width_exactly_fitting_does_not_stretch() {
        // 1000 - 2 * 16 = 968 still fits
        let result = solve(&trigger(), &Rect::sized(968.0, 50.0), viewport(), &PositionConfig::default());
        assert!(!matches!(result.horizontal, Some(HorizontalAnchor::Stretch { .. })));
    }

    #[test]
    fn test_center_overflowing_right_anchors_right() {
        let trigger = Rect::from_edges(900.0, 100.0, 960.0, 140.0);
        let result = solve(&trigger, &Rect::sized(300.0, 100.0), viewport(), &PositionConfig::default());
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Right { right: 40.0 }));
    }

    #[test]
    fn test_center_overflowing_right_keeps_padding() {
        // Trigger hangs past the right padding; padding wins
        let trigger = Rect::from_edges(950.0, 100.0, 995.0, 140.0);
        let result = solve(&trigger, &Rect::sized(300.0, 100.0), viewport(), &PositionConfig::default());
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Right { right: 16.0 }));
    }

    #[test]
    fn test_center_overflowing_left_anchors_left() {
        let trigger = Rect::from_edges(40.0, 100.0, 100.0, 140.0);
        let result = solve(&trigger, &Rect::sized(300.0, 100.0), viewport(), &PositionConfig::default());
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Left { left: 40.0 }));

        let trigger = Rect::from_edges(4.0, 100.0, 60.0, 140.0);
        let result = solve(&trigger, &Rect::sized(300.0, 100.0), viewport(), &PositionConfig::default());
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Left { left: 16.0 }));
    }

    #[test]
    fn test_right_alignment() {
        let config = PositionConfig::default().with_alignment(Alignment::Right);
        let result = solve(&trigger(), &Rect::sized(300.0, 100.0), viewport(), &config);
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Right { right: 400.0 }));

        // 600 - 590 < 16: falls back to the left padding
        let result = solve(&trigger(), &Rect::sized(590.0, 100.0), viewport(), &config);
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Left { left: 16.0 }));
    }

    #[test]
    fn test_left_alignment() {
        let config = PositionConfig::default().with_alignment(Alignment::Left);
        let result = solve(&trigger(), &Rect::sized(300.0, 100.0), viewport(), &config);
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Left { left: 400.0 }));

        // 400 + 590 > 984: falls back to the right padding
        let result = solve(&trigger(), &Rect::sized(590.0, 100.0), viewport(), &config);
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Right { right: 16.0 }));
    }

    #[test]
    fn test_flips_above_when_below_is_short() {
        let trigger = Rect::from_edges(400.0, 600.0, 600.0, 640.0);
        let result = solve(&trigger, &Rect::sized(300.0, 200.0), viewport(), &PositionConfig::default());

        assert_eq!(result.vertical, Some(VerticalAnchor::Above { gap: 16.0 }));
        assert_eq!(result.max_height, Some(584.0));
        assert!(!result.overflow);
    }

    #[test]
    fn test_overflow_picks_roomier_side() {
        let panel = Rect::sized(300.0, 900.0);

        let high = Rect::from_edges(400.0, 200.0, 600.0, 240.0);
        let result = solve(&high, &panel, viewport(), &PositionConfig::default());
        assert_eq!(result.vertical, Some(VerticalAnchor::Below { gap: 16.0 }));
        assert_eq!(result.max_height, Some(544.0));
        assert!(result.overflow);

        let low = Rect::from_edges(400.0, 560.0, 600.0, 600.0);
        let result = solve(&low, &panel, viewport(), &PositionConfig::default());
        assert_eq!(result.vertical, Some(VerticalAnchor::Above { gap: 16.0 }));
        assert_eq!(result.max_height, Some(544.0));
        assert!(result.overflow);
    }

    #[test]
    fn test_overflow_tie_goes_below() {
        // 380 above, 380 below after the gap
        let trigger = Rect::from_edges(400.0, 396.0, 600.0, 404.0);
        let result = solve(&trigger, &Rect::sized(300.0, 500.0), viewport(), &PositionConfig::default());
        assert_eq!(result.vertical, Some(VerticalAnchor::Below { gap: 16.0 }));
        assert_eq!(result.max_height, Some(380.0));
        assert!(result.overflow);
    }

    #[test]
    fn test_negative_config_is_accepted() {
        let config = PositionConfig::new(Alignment::Center, -4.0, -8.0);
        let result = solve(&trigger(), &Rect::sized(300.0, 200.0), viewport(), &config);
        assert_eq!(result.horizontal, Some(HorizontalAnchor::Centered));
        assert_eq!(result.max_height, Some(664.0));
    }

    #[test]
    fn test_missing_measurement_is_empty() {
        let config = PositionConfig::default();
        let result = solve_measured(None, Some(Rect::sized(10.0, 10.0)), viewport(), &config);
        assert!(result.is_empty());
        let result = solve_measured(Some(trigger()), None, viewport(), &config);
        assert!(result.is_empty());
        assert!(result.style_properties().is_empty());
    }

    #[test]
    fn test_solve_is_idempotent() {
        let config = PositionConfig::default().with_alignment(Alignment::Right);
        let panel = Rect::sized(420.0, 700.0);
        let a = solve(&trigger(), &panel, viewport(), &config);
        let b = solve(&trigger(), &panel, viewport(), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_properties_centered_below() {
        let result = solve(&trigger(), &Rect::sized(300.0, 200.0), viewport(), &PositionConfig::default());
        let props = result.style_properties();
        assert_eq!(
            props,
            vec![
                ("left", "50%".to_string()),
                ("transform", "translateX(-50%)".to_string()),
                ("top", "auto".to_string()),
                ("bottom", "auto".to_string()),
                ("max-height", "644px".to_string()),
            ]
        );
    }

    #[test]
    fn test_style_properties_stretch_above_overflow() {
        let trigger = Rect::from_edges(400.0, 500.0, 600.0, 540.0);
        let result = solve(&trigger, &Rect::sized(990.0, 700.0), viewport(), &PositionConfig::default());
        let props = result.style_properties();
        assert!(props.contains(&("left", "16px".to_string())));
        assert!(props.contains(&("right", "16px".to_string())));
        assert!(props.contains(&("bottom", "calc(100% + 16px)".to_string())));
        assert!(props.contains(&("max-height", "484px".to_string())));
        assert!(props.contains(&("overflow-y", "auto".to_string())));
    }

    #[test]
    fn test_initial_is_centered_only() {
        let initial = PositionResult::initial();
        assert!(!initial.is_empty());
        assert_eq!(initial.vertical, None);
        assert_eq!(initial.style_properties().len(), 2);
    }

    #[test]
    fn test_resolve_rect_caps_height() {
        let trigger = Rect::from_edges(400.0, 200.0, 600.0, 240.0);
        let panel = Rect::sized(300.0, 900.0);
        let result = solve(&trigger, &panel, viewport(), &PositionConfig::default());

        let rect = result.resolve_rect(&trigger, &panel, viewport()).unwrap();
        assert!(approx_eq(rect.top, 256.0));
        assert!(approx_eq(rect.height, 544.0));
        assert!(approx_eq(rect.bottom, 800.0));
        assert!(approx_eq(rect.left, 350.0));
    }

    #[test]
    fn test_resolve_rect_above() {
        let trigger = Rect::from_edges(400.0, 600.0, 600.0, 640.0);
        let panel = Rect::sized(300.0, 200.0);
        let result = solve(&trigger, &panel, viewport(), &PositionConfig::default());

        let rect = result.resolve_rect(&trigger, &panel, viewport()).unwrap();
        assert!(approx_eq(rect.bottom, 584.0));
        assert!(approx_eq(rect.top, 384.0));
    }

    #[test]
    fn test_serializes_sparse() {
        let json = serde_json::to_string(&PositionResult::empty()).unwrap();
        assert_eq!(json, r#"{"overflow":false}"#);

        let result = solve(&trigger(), &Rect::sized(300.0, 200.0), viewport(), &PositionConfig::default());
        let json = serde_json::to_string(&result).unwrap();
        let back: PositionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
