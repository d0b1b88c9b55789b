// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag resolution: compute the candidate rectangle for an anchored drag.
//!
//! Given the rectangle as it stood when the gesture began (`base`), the
//! bounding `limits`, and the pointer's travel from its anchor, [`resolve`]
//! produces the rectangle the selection should show now. Resolution is pure;
//! the engine decides what to do with the candidate.
//!
//! Corner resizes reduce the pointer's 2D travel to a single scalar (the
//! dominant component, signed toward growth) and apply it to both axes of
//! the dragged corner. That one scalar is what keeps a square base square
//! through any sequence of resizes.

use kurbo::{Point, Rect};
use marquee_geometry::clamp_into;

use crate::hit::DragMode;

/// Resolve a drag into a candidate rectangle.
///
/// `anchor` is where the gesture's press landed and `point` is the pointer's
/// current position. For [`DragMode::Move`] the whole rectangle translates
/// by the travel and is then pushed back inside `limits` axis by axis. For
/// the corner modes a single growth scalar is clamped against the headroom
/// between `base` and `limits` on the two affected sides, and floored so the
/// rectangle can collapse to zero extent but never invert.
pub fn resolve(base: Rect, limits: Rect, mode: DragMode, anchor: Point, point: Point) -> Rect {
    let delta = point - anchor;
    match mode {
        DragMode::Move => clamp_into(base + delta, limits),
        DragMode::ResizeTopLeft => {
            let diag = clamp_diag(
                (-delta.x).max(-delta.y),
                base.x0 - limits.x0,
                base.y0 - limits.y0,
                base,
            );
            Rect::new(base.x0 - diag, base.y0 - diag, base.x1, base.y1)
        }
        DragMode::ResizeBottomLeft => {
            let diag = clamp_diag(
                (-delta.x).max(delta.y),
                base.x0 - limits.x0,
                limits.y1 - base.y1,
                base,
            );
            Rect::new(base.x0 - diag, base.y0, base.x1, base.y1 + diag)
        }
        DragMode::ResizeTopRight => {
            let diag = clamp_diag(
                delta.x.max(-delta.y),
                limits.x1 - base.x1,
                base.y0 - limits.y0,
                base,
            );
            Rect::new(base.x0, base.y0 - diag, base.x1 + diag, base.y1)
        }
        DragMode::ResizeBottomRight => {
            let diag = clamp_diag(
                delta.x.max(delta.y),
                limits.x1 - base.x1,
                limits.y1 - base.y1,
                base,
            );
            Rect::new(base.x0, base.y0, base.x1 + diag, base.y1 + diag)
        }
    }
}

/// Clamp a raw growth scalar.
///
/// Growth is capped by the headroom between `base` and the limits on the two
/// sides the corner drags (`room_a`, `room_b`). Shrink is floored at the
/// base's smaller side so the resulting extent never goes negative.
fn clamp_diag(raw: f64, room_a: f64, room_b: f64, base: Rect) -> f64 {
    raw.min(room_a).min(room_b).max(-base.width().min(base.height()))
}
