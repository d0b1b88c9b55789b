// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection gesture state machine.
//!
//! [`SelectionEngine`] consumes pointer events one at a time and turns them
//! into a stream of candidate rectangles. It has exactly two states: idle,
//! and dragging with a mode and an anchor. A press that hits the current
//! rectangle starts a gesture; moves resolve candidates against the
//! rectangle as it stood when the gesture began; the release resolves one
//! final candidate and commits it as the new base.
//!
//! The engine owns all of its state. Nothing here blocks, spawns, or
//! shares; the caller's event loop drives it synchronously and the returned
//! emissions are the only output. Pairing each emission with a paint is the
//! job of [`CropSession`](crate::CropSession).
//!
//! ```
//! use kurbo::{Rect, Size};
//! use marquee_select::{PointerEvent, SelectionEngine};
//!
//! let mut engine = SelectionEngine::new(Size::new(400.0, 400.0), None);
//! assert_eq!(engine.current_rect(), Rect::new(100.0, 100.0, 300.0, 300.0));
//!
//! // Grab the interior and drag down-right by 10px.
//! engine.handle(PointerEvent::press((200.0, 200.0)));
//! let emitted = engine.handle(PointerEvent::moved((210.0, 210.0)));
//! assert_eq!(emitted, Some(Rect::new(110.0, 110.0, 310.0, 310.0)));
//!
//! // The release commits the candidate as the new base.
//! engine.handle(PointerEvent::release((210.0, 210.0)));
//! assert_eq!(engine.current_rect(), Rect::new(110.0, 110.0, 310.0, 310.0));
//! ```

use kurbo::{Point, Rect, Size};

use crate::bounds::{Layout, initial_layout};
use crate::drag::resolve;
use crate::event::{PointerEvent, PointerKind};
use crate::hit::{DragMode, classify};

/// An in-progress drag gesture.
///
/// At most one exists at a time, owned by the engine; it is created by a
/// hitting press and destroyed by the matching release (or a cancel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveDrag {
    /// How the gesture manipulates the rectangle.
    pub mode: DragMode,
    /// Where the press landed; moves are resolved relative to this.
    pub anchor: Point,
}

/// Crop-selection gesture state machine.
///
/// Invariants, given the square start rectangle produced by
/// [`initial_layout`]: the current rectangle always lies inside the limits,
/// and stays square through any sequence of gestures (corner resizes apply
/// one scalar to both axes).
///
/// The start rectangle is the first element of the output stream; it is
/// recorded as already emitted at construction, so a move that resolves back
/// to it produces nothing. Consecutive equal candidates are deduplicated the
/// same way.
#[derive(Clone, Debug)]
pub struct SelectionEngine {
    limits: Rect,
    corner_margin: f64,
    current: Rect,
    last_emitted: Option<Rect>,
    drag: Option<ActiveDrag>,
    disposed: bool,
}

impl SelectionEngine {
    /// Create an engine for a canvas of the given size.
    ///
    /// `image` is the displayed image's natural size; with `None` the full
    /// canvas acts as the displayed region. See [`initial_layout`] for how
    /// the start rectangle, limits, and corner margin are derived.
    pub fn new(canvas: Size, image: Option<Size>) -> Self {
        Self::with_layout(initial_layout(canvas, image))
    }

    /// Create an engine from an explicit layout.
    ///
    /// The square invariant holds only when `layout.start` is square; the
    /// containment invariant only when it lies inside `layout.limits`.
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            limits: layout.limits,
            corner_margin: layout.corner_margin,
            current: layout.start,
            last_emitted: Some(layout.start),
            drag: None,
            disposed: false,
        }
    }

    /// Feed one pointer event; returns the rectangle to show, if it changed.
    ///
    /// Presses never emit: a hitting press only arms the gesture. Moves and
    /// the release emit their resolved candidate unless it equals the last
    /// emission. Events that do not fit the current state — moves and
    /// releases while idle, a second press while dragging — are ignored, as
    /// is everything after [`dispose`](Self::dispose).
    pub fn handle(&mut self, event: PointerEvent) -> Option<Rect> {
        if self.disposed {
            return None;
        }
        match event.kind {
            PointerKind::Press => {
                self.on_press(event.point);
                None
            }
            PointerKind::Move => self.on_move(event.point),
            PointerKind::Release => self.on_release(event.point),
        }
    }

    fn on_press(&mut self, point: Point) {
        if self.drag.is_some() {
            // Already dragging; a nested press cannot start a second gesture.
            return;
        }
        self.drag = classify(self.current, point, self.corner_margin)
            .map(|mode| ActiveDrag { mode, anchor: point });
    }

    fn on_move(&mut self, point: Point) -> Option<Rect> {
        let drag = self.drag?;
        let candidate = resolve(self.current, self.limits, drag.mode, drag.anchor, point);
        self.emit(candidate)
    }

    fn on_release(&mut self, point: Point) -> Option<Rect> {
        let drag = self.drag.take()?;
        let candidate = resolve(self.current, self.limits, drag.mode, drag.anchor, point);
        self.current = candidate;
        self.emit(candidate)
    }

    fn emit(&mut self, candidate: Rect) -> Option<Rect> {
        if self.last_emitted == Some(candidate) {
            return None;
        }
        self.last_emitted = Some(candidate);
        Some(candidate)
    }

    /// Discard an in-progress gesture without committing its candidate.
    ///
    /// Returns `true` if a gesture was active. The current rectangle keeps
    /// the value committed by the last release.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Shut the engine down: drops any active gesture and silences the
    /// stream. Idempotent; never fails.
    pub fn dispose(&mut self) {
        self.drag = None;
        self.disposed = true;
    }

    /// The committed selection rectangle.
    ///
    /// During a gesture this is still the base the gesture started from;
    /// candidates only land here on release.
    pub fn current_rect(&self) -> Rect {
        self.current
    }

    /// The bounding rectangle the selection stays within.
    pub fn limits(&self) -> Rect {
        self.limits
    }

    /// Hit-test tolerance radius around each corner handle.
    pub fn corner_margin(&self) -> f64 {
        self.corner_margin
    }

    /// `true` while a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The in-progress gesture, if any.
    pub fn active_drag(&self) -> Option<&ActiveDrag> {
        self.drag.as_ref()
    }

    /// `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
