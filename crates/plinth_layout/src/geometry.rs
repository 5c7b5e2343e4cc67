//! Viewport geometry primitives.
//!
//! All values are in viewport pixel coordinates. Rects are produced fresh by
//! every measurement and are never cached across frames.

use serde::{Deserialize, Serialize};

/// A bounding rectangle as reported by a geometry query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create a rect from its four edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// A rect of the given size placed at the origin.
    /// Panels are usually only interesting for their size.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Horizontal center line.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Move the rect by a delta, keeping its size.
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}

/// Size of the visible viewport, queried live.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_edges() {
        let r = Rect::new(400.0, 100.0, 200.0, 40.0);
        assert_eq!(r.right, 600.0);
        assert_eq!(r.bottom, 140.0);
        assert_eq!(r.center_x(), 500.0);
    }

    #[test]
    fn test_from_edges_derives_size() {
        let r = Rect::from_edges(400.0, 100.0, 600.0, 140.0);
        assert_eq!(r, Rect::new(400.0, 100.0, 200.0, 40.0));
    }

    #[test]
    fn test_translate_keeps_size() {
        let r = Rect::sized(300.0, 200.0).translate(10.0, -5.0);
        assert_eq!(r.left, 10.0);
        assert_eq!(r.top, -5.0);
        assert_eq!(r.width, 300.0);
        assert_eq!(r.height, 200.0);
    }
}
