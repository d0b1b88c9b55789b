// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers for crop-marquee selection.
//!
//! This crate provides the small, pure geometry operations the selection
//! engine is built from, on top of [`kurbo`] types. It is deliberately
//! decoupled from event handling and painting.
//!
//! - [`aspect_fit`] – fit one size inside a frame, preserving aspect ratio.
//! - [`inset_frac`] – shrink a rectangle by a fraction of its extent per axis.
//! - [`near_corner`] – corner-margin proximity test used for resize handles.
//! - [`contains_rect`] – inclusive rectangle containment.
//! - [`clamp_into`] – translate a rectangle back inside a bounding rectangle.
//!
//! Float inputs are assumed to be finite (no NaNs); sizes fed to
//! [`aspect_fit`] are assumed to be non-degenerate. Producing well-formed
//! coordinates is the caller's responsibility.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use marquee_geometry::aspect_fit;
//!
//! // A 2:1 image fitted into a square frame is centered vertically.
//! let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let fitted = aspect_fit(Size::new(200.0, 100.0), frame);
//! assert_eq!(fitted, Rect::new(0.0, 25.0, 100.0, 75.0));
//! ```

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

/// Fit `content` inside `frame`, preserving its aspect ratio.
///
/// Returns the largest rectangle with `content`'s width:height ratio that
/// fits inside `frame`, centered on `frame`'s center. A content size with
/// the same ratio as `frame` fills it exactly.
pub fn aspect_fit(content: Size, frame: Rect) -> Rect {
    let scale = (frame.width() / content.width).min(frame.height() / content.height);
    let fitted = Size::new(content.width * scale, content.height * scale);
    Rect::from_center_size(frame.center(), fitted)
}

/// Shrink `rect` by a fraction of its extent on each side.
///
/// `fx` and `fy` are per-axis fractions: each vertical edge moves inward by
/// `fx * rect.width()` and each horizontal edge by `fy * rect.height()`.
/// Fractions of `0.5` or more produce a degenerate or inverted rectangle.
pub fn inset_frac(rect: Rect, fx: f64, fy: f64) -> Rect {
    let dx = rect.width() * fx;
    let dy = rect.height() * fy;
    Rect::new(rect.x0 + dx, rect.y0 + dy, rect.x1 - dx, rect.y1 - dy)
}

/// Test whether `point` lies within `margin` of `corner` on both axes.
///
/// The window is a square of Chebyshev radius `margin`, exclusive at the
/// boundary: a point exactly `margin` away does not match.
pub fn near_corner(corner: Point, point: Point, margin: f64) -> bool {
    (point.x - corner.x).abs() < margin && (point.y - corner.y).abs() < margin
}

/// Inclusive containment: `true` when `inner` lies entirely within `outer`.
pub fn contains_rect(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// Translate `rect` so that it lies inside `limits`, preserving its size.
///
/// The correction per axis is `max(limits.min - rect.min, 0) -
/// max(rect.max - limits.max, 0)`; a rectangle already inside `limits` is
/// returned unchanged. A rectangle no larger than `limits` always lands
/// fully inside; an oversized one cannot, and the two corrections offset.
pub fn clamp_into(rect: Rect, limits: Rect) -> Rect {
    let dx = (limits.x0 - rect.x0).max(0.0) - (rect.x1 - limits.x1).max(0.0);
    let dy = (limits.y0 - rect.y0).max(0.0) - (rect.y1 - limits.y1).max(0.0);
    rect + Vec2::new(dx, dy)
}
