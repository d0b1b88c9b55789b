// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Select: pointer-driven crop-rectangle selection.
//!
//! This crate turns a live sequence of pointer events (press, move, release)
//! into a continuously updated, bounds-constrained crop rectangle over an
//! image, supporting whole-rectangle move and four-corner resize while
//! preserving a square aspect ratio. Platform event capture, image decoding,
//! and actual drawing stay with the embedding; this crate is the pure
//! selection logic between them.
//!
//! ## Pieces
//!
//! - [`PointerEvent`] / [`PointerKind`] – the input stream.
//! - [`classify`] / [`DragMode`] – hit testing a press against the rectangle.
//! - [`resolve`] – drag resolution: candidate rectangles from pointer travel.
//! - [`initial_layout`] / [`Layout`] – where the selection starts and the
//!   limits it must stay within.
//! - [`SelectionEngine`] – the idle/dragging state machine owning the
//!   current rectangle and deduplicating the output stream.
//! - [`CropSession`] / [`SurfaceSource`] / [`PaintFrame`] – one
//!   acquire-then-paint per emission, for embeddings that hand out drawable
//!   surfaces.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use marquee_select::{PointerEvent, SelectionEngine};
//!
//! let mut engine = SelectionEngine::new(Size::new(400.0, 400.0), None);
//!
//! // Drag the whole rectangle 10px down-right and let go.
//! engine.handle(PointerEvent::press((200.0, 200.0)));
//! engine.handle(PointerEvent::moved((210.0, 210.0)));
//! engine.handle(PointerEvent::release((210.0, 210.0)));
//!
//! assert_eq!(engine.current_rect(), Rect::new(110.0, 110.0, 310.0, 310.0));
//! ```
//!
//! Events are consumed strictly one at a time on the caller's thread; the
//! engine never blocks and owns all of its state. Events are assumed to
//! arrive in true chronological order, with finite, non-NaN coordinates.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod bounds;
mod drag;
mod engine;
mod event;
mod hit;
mod paint;

pub use bounds::{Layout, initial_layout};
pub use drag::resolve;
pub use engine::{ActiveDrag, SelectionEngine};
pub use event::{PointerEvent, PointerKind};
pub use hit::{DragMode, classify};
pub use paint::{CropSession, PaintFrame, SurfaceSource};
