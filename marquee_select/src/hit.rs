// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing: classify a press point against the current rectangle.
//!
//! A press either grabs one of the four corner resize handles, grabs the
//! rectangle body for a whole-rectangle move, or misses entirely. Corner
//! windows take precedence over the body so a handle can be grabbed even
//! though it overlaps the interior.

use kurbo::{Point, Rect};
use marquee_geometry::near_corner;

/// How an active drag manipulates the selection rectangle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DragMode {
    /// Translate the whole rectangle.
    Move,
    /// Resize by dragging the top-left corner; bottom-right stays fixed.
    ResizeTopLeft,
    /// Resize by dragging the bottom-left corner; top-right stays fixed.
    ResizeBottomLeft,
    /// Resize by dragging the top-right corner; bottom-left stays fixed.
    ResizeTopRight,
    /// Resize by dragging the bottom-right corner; top-left stays fixed.
    ResizeBottomRight,
}

impl DragMode {
    /// `true` for the four corner-resize modes.
    pub fn is_resize(self) -> bool {
        !matches!(self, Self::Move)
    }
}

/// Classify `point` against `rect` with corner windows of radius `margin`.
///
/// The corner windows are tested in a fixed priority order — top-left,
/// bottom-left, top-right, bottom-right — and the first match wins. The
/// order is what keeps classification deterministic when the windows overlap
/// on a rectangle smaller than `2 * margin`. A point inside none of the
/// windows but inside the rectangle's interior starts a [`DragMode::Move`];
/// anything else is a miss and starts no gesture.
pub fn classify(rect: Rect, point: Point, margin: f64) -> Option<DragMode> {
    if near_corner(Point::new(rect.x0, rect.y0), point, margin) {
        return Some(DragMode::ResizeTopLeft);
    }
    if near_corner(Point::new(rect.x0, rect.y1), point, margin) {
        return Some(DragMode::ResizeBottomLeft);
    }
    if near_corner(Point::new(rect.x1, rect.y0), point, margin) {
        return Some(DragMode::ResizeTopRight);
    }
    if near_corner(Point::new(rect.x1, rect.y1), point, margin) {
        return Some(DragMode::ResizeBottomRight);
    }
    rect.contains(point).then_some(DragMode::Move)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(100.0, 100.0, 300.0, 300.0);
    const MARGIN: f64 = 20.0;

    #[test]
    fn each_corner_classifies_its_resize_mode() {
        let cases = [
            (Point::new(100.0, 100.0), DragMode::ResizeTopLeft),
            (Point::new(100.0, 300.0), DragMode::ResizeBottomLeft),
            (Point::new(300.0, 100.0), DragMode::ResizeTopRight),
            (Point::new(300.0, 300.0), DragMode::ResizeBottomRight),
        ];
        for (point, expected) in cases {
            assert_eq!(classify(RECT, point, MARGIN), Some(expected));
        }
    }

    #[test]
    fn near_miss_inside_window_still_grabs_corner() {
        // 15px off on both axes, inside the 20px window.
        let point = Point::new(315.0, 285.0);
        assert_eq!(classify(RECT, point, MARGIN), Some(DragMode::ResizeBottomRight));
    }

    #[test]
    fn interior_classifies_move() {
        assert_eq!(
            classify(RECT, Point::new(200.0, 200.0), MARGIN),
            Some(DragMode::Move)
        );
    }

    #[test]
    fn outside_everything_is_a_miss() {
        assert_eq!(classify(RECT, Point::new(50.0, 50.0), MARGIN), None);
        assert_eq!(classify(RECT, Point::new(350.0, 200.0), MARGIN), None);
    }

    #[test]
    fn window_boundary_is_exclusive() {
        // Exactly margin away from the top-left corner on x: not a corner
        // grab, but still inside the interior, so it moves.
        let point = Point::new(120.0, 120.0);
        assert_eq!(classify(RECT, point, MARGIN), Some(DragMode::Move));
        // Exactly margin outside the rectangle misses entirely.
        assert_eq!(classify(RECT, Point::new(80.0, 100.0), MARGIN), None);
    }

    #[test]
    fn overlapping_windows_prefer_top_left_first() {
        // A rectangle smaller than the corner windows: every corner window
        // contains the center, so priority order must decide.
        let tiny = Rect::new(100.0, 100.0, 110.0, 110.0);
        let center = Point::new(105.0, 105.0);
        assert_eq!(classify(tiny, center, MARGIN), Some(DragMode::ResizeTopLeft));
    }

    #[test]
    fn overlapping_left_edge_windows_prefer_top_left_over_bottom_left() {
        // Tall enough that only the two left windows overlap at this point.
        let rect = Rect::new(100.0, 100.0, 300.0, 130.0);
        let point = Point::new(100.0, 115.0);
        assert_eq!(classify(rect, point, MARGIN), Some(DragMode::ResizeTopLeft));
    }

    #[test]
    fn is_resize_excludes_move() {
        assert!(!DragMode::Move.is_resize());
        assert!(DragMode::ResizeTopLeft.is_resize());
        assert!(DragMode::ResizeBottomRight.is_resize());
    }
}
