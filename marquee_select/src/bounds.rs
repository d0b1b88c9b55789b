// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial layout: where the selection starts and where it may go.

use kurbo::{Point, Rect, Size};
use marquee_geometry::{aspect_fit, inset_frac};

/// Fraction of each axis inset from the limits when placing the start square.
const START_INSET: f64 = 0.25;

/// Corner hit-test margin as a fraction of the start square's side.
const MARGIN_RATIO: f64 = 0.1;

/// Construction-time layout of a selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// The initial selection rectangle (square, inside `limits`).
    pub start: Rect,
    /// The bounding rectangle the selection must stay within — the displayed
    /// image region.
    pub limits: Rect,
    /// Hit-test tolerance radius around each corner handle.
    pub corner_margin: f64,
}

/// Compute the starting layout from the canvas size and the image's natural
/// size.
///
/// The image is aspect-fitted into the canvas to obtain the limits; with no
/// image the full canvas acts as the displayed region. The limits are inset
/// by 25% per axis, and the largest centered square that fits in that inner
/// region becomes the start rectangle. The corner margin is a tenth of the
/// square's side, so the handles scale with the selection.
///
/// `canvas` must be non-degenerate; a degenerate `image` size is the image
/// loader's responsibility and is not validated here.
pub fn initial_layout(canvas: Size, image: Option<Size>) -> Layout {
    let frame = Rect::from_origin_size(Point::ORIGIN, canvas);
    let limits = aspect_fit(image.unwrap_or(canvas), frame);
    let candidate = inset_frac(limits, START_INSET, START_INSET);
    let min_dim = candidate.width().min(candidate.height());
    let start = aspect_fit(Size::new(min_dim, min_dim), candidate);
    Layout {
        start,
        limits,
        corner_margin: min_dim * MARGIN_RATIO,
    }
}
