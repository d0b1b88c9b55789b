// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input model.
//!
//! The engine consumes a flat stream of [`PointerEvent`]s in canvas-pixel
//! coordinates. Platform event capture, pointer-id handling, and DPI scaling
//! all happen upstream; by the time events reach this crate they are assumed
//! to be in true chronological order (a press strictly precedes its moves,
//! which strictly precede the matching release).

use kurbo::Point;

/// Kind of a pointer event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerKind {
    /// The pointer was pressed down.
    Press,
    /// The pointer moved while pressed or hovering.
    Move,
    /// The pointer was released.
    Release,
}

/// A single pointer event in canvas-pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Where it happened, already DPI-scaled by the caller.
    pub point: Point,
}

impl PointerEvent {
    /// Create an event of the given kind.
    pub fn new(kind: PointerKind, point: impl Into<Point>) -> Self {
        Self {
            kind,
            point: point.into(),
        }
    }

    /// A press at `point`.
    pub fn press(point: impl Into<Point>) -> Self {
        Self::new(PointerKind::Press, point)
    }

    /// A move to `point`.
    pub fn moved(point: impl Into<Point>) -> Self {
        Self::new(PointerKind::Move, point)
    }

    /// A release at `point`.
    pub fn release(point: impl Into<Point>) -> Self {
        Self::new(PointerKind::Release, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_the_kind() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(PointerEvent::press(p).kind, PointerKind::Press);
        assert_eq!(PointerEvent::moved(p).kind, PointerKind::Move);
        assert_eq!(PointerEvent::release(p).kind, PointerKind::Release);
        assert_eq!(PointerEvent::press((3.0, 4.0)).point, p);
    }
}
