// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint scheduling: one drawable surface per emitted rectangle.
//!
//! The engine computes rectangles; something still has to put them on
//! screen. [`CropSession`] pairs a [`SelectionEngine`] with a
//! [`SurfaceSource`] and keeps them in lockstep: for every emission it
//! acquires exactly one surface, hands it back through
//! [`SurfaceSource::paint`] together with a [`PaintFrame`], and only then
//! moves on. Embeddings that invalidate a canvas and receive a paint
//! callback later can park the acquire on that callback; embeddings that can
//! draw immediately just return a surface inline.

use kurbo::{Rect, Size};

use crate::engine::SelectionEngine;
use crate::event::PointerEvent;

/// What a renderer needs to draw one frame of the selection UI.
///
/// The embedding holds the image itself; this carries the geometry — the
/// displayed-image region to fill and the selection outline to stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintFrame {
    /// The displayed image region (the selection's bounding limits).
    pub limits: Rect,
    /// The selection rectangle to outline.
    pub selection: Rect,
}

/// A source of drawable surfaces.
///
/// The contract is single-resolution: each [`acquire`](Self::acquire) call
/// yields exactly one surface, and the session never calls `acquire` again
/// before handing the previous surface back through
/// [`paint`](Self::paint). An implementation may block in `acquire` until
/// its platform delivers a canvas; it will not be asked for two at once.
pub trait SurfaceSource {
    /// A drawable surface, whatever that means to the embedding.
    type Surface;

    /// Produce the next surface to draw on.
    fn acquire(&mut self) -> Self::Surface;

    /// Draw `frame` onto `surface`, consuming it.
    fn paint(&mut self, surface: Self::Surface, frame: &PaintFrame);
}

/// A [`SelectionEngine`] wired to a [`SurfaceSource`].
///
/// Construction paints the start rectangle; afterwards [`pump`](Self::pump)
/// forwards events to the engine and performs one acquire-then-paint per
/// emission. Deduplicated events paint nothing.
pub struct CropSession<S: SurfaceSource> {
    engine: SelectionEngine,
    source: S,
}

impl<S: SurfaceSource> core::fmt::Debug for CropSession<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CropSession")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl<S: SurfaceSource> CropSession<S> {
    /// Create a session for a canvas of the given size and paint the start
    /// rectangle.
    pub fn new(canvas: Size, image: Option<Size>, source: S) -> Self {
        Self::from_parts(SelectionEngine::new(canvas, image), source)
    }

    /// Wire an existing engine to a surface source.
    ///
    /// Unless the engine is already disposed, its current rectangle is
    /// painted immediately so the screen reflects the engine's state.
    pub fn from_parts(engine: SelectionEngine, source: S) -> Self {
        let mut session = Self { engine, source };
        if !session.engine.is_disposed() {
            let current = session.engine.current_rect();
            session.present(current);
        }
        session
    }

    /// Feed one pointer event; paints and returns the emission, if any.
    pub fn pump(&mut self, event: PointerEvent) -> Option<Rect> {
        let emitted = self.engine.handle(event)?;
        self.present(emitted);
        Some(emitted)
    }

    fn present(&mut self, selection: Rect) {
        let surface = self.source.acquire();
        let frame = PaintFrame {
            limits: self.engine.limits(),
            selection,
        };
        self.source.paint(surface, &frame);
    }

    /// Shut the session down; later events neither emit nor paint.
    /// Idempotent.
    pub fn dispose(&mut self) {
        self.engine.dispose();
    }

    /// The engine, for inspection.
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    /// Tear the session apart and recover the surface source.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PointerEvent;
    use alloc::vec::Vec;
    use kurbo::Rect;

    /// Records frames and asserts the acquire/paint pairing discipline.
    #[derive(Default)]
    struct Recorder {
        acquired: usize,
        outstanding: bool,
        frames: Vec<PaintFrame>,
    }

    impl SurfaceSource for Recorder {
        type Surface = usize;

        fn acquire(&mut self) -> usize {
            assert!(
                !self.outstanding,
                "second acquire before the previous surface was painted"
            );
            self.outstanding = true;
            self.acquired += 1;
            self.acquired
        }

        fn paint(&mut self, surface: usize, frame: &PaintFrame) {
            assert_eq!(surface, self.acquired, "surfaces must be painted in order");
            self.outstanding = false;
            self.frames.push(*frame);
        }
    }

    fn session_400() -> CropSession<Recorder> {
        CropSession::new(Size::new(400.0, 400.0), None, Recorder::default())
    }

    #[test]
    fn construction_paints_the_start_rectangle() {
        let session = session_400();
        let recorder = session.into_source();
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(
            recorder.frames[0],
            PaintFrame {
                limits: Rect::new(0.0, 0.0, 400.0, 400.0),
                selection: Rect::new(100.0, 100.0, 300.0, 300.0),
            }
        );
    }

    #[test]
    fn one_paint_per_emission_and_none_for_duplicates() {
        let mut session = session_400();
        session.pump(PointerEvent::press((200.0, 200.0)));
        session.pump(PointerEvent::moved((210.0, 210.0)));
        session.pump(PointerEvent::moved((210.0, 210.0)));
        session.pump(PointerEvent::release((210.0, 210.0)));

        let recorder = session.into_source();
        // Start + the single changed candidate.
        assert_eq!(recorder.acquired, 2);
        assert_eq!(recorder.frames.len(), 2);
        assert_eq!(
            recorder.frames[1].selection,
            Rect::new(110.0, 110.0, 310.0, 310.0)
        );
        assert!(!recorder.outstanding);
    }

    #[test]
    fn pump_returns_the_painted_rectangle() {
        let mut session = session_400();
        session.pump(PointerEvent::press((100.0, 100.0)));
        let emitted = session.pump(PointerEvent::moved((80.0, 90.0)));
        assert_eq!(emitted, Some(Rect::new(80.0, 80.0, 300.0, 300.0)));
        assert_eq!(
            session.engine().limits(),
            Rect::new(0.0, 0.0, 400.0, 400.0)
        );
    }

    #[test]
    fn dispose_stops_painting() {
        let mut session = session_400();
        session.dispose();
        session.dispose();
        session.pump(PointerEvent::press((200.0, 200.0)));
        session.pump(PointerEvent::moved((250.0, 250.0)));
        let recorder = session.into_source();
        assert_eq!(recorder.frames.len(), 1, "only the construction paint");
    }

    #[test]
    fn from_parts_skips_painting_for_a_disposed_engine() {
        let mut engine = SelectionEngine::new(Size::new(400.0, 400.0), None);
        engine.dispose();
        let session = CropSession::from_parts(engine, Recorder::default());
        let recorder = session.into_source();
        assert!(recorder.frames.is_empty());
    }
}
