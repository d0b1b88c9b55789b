// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted crop-selection session rendered as ASCII frames.
//!
//! This example drives a [`CropSession`] with a canned pointer-event
//! sequence and implements [`SurfaceSource`] with a terminal "canvas":
//! every emission acquires one text buffer, draws the displayed-image
//! region and the selection outline into it, and prints it.
//!
//! Run:
//! - `cargo run -p marquee_demos --example scripted_crop`

use kurbo::{Rect, Size};
use marquee_select::{CropSession, PaintFrame, PointerEvent, SurfaceSource};

const COLS: usize = 48;
const ROWS: usize = 24;
const CANVAS: Size = Size::new(400.0, 400.0);

/// A terminal-backed surface source: each surface is a character grid.
struct TermCanvas {
    frames_painted: usize,
}

impl TermCanvas {
    fn cell(rect: Rect, col: usize, row: usize) -> bool {
        let x = (col as f64 + 0.5) * CANVAS.width / COLS as f64;
        let y = (row as f64 + 0.5) * CANVAS.height / ROWS as f64;
        rect.contains((x, y))
    }
}

impl SurfaceSource for TermCanvas {
    type Surface = Vec<Vec<char>>;

    fn acquire(&mut self) -> Self::Surface {
        vec![vec!['.'; COLS]; ROWS]
    }

    fn paint(&mut self, mut surface: Self::Surface, frame: &PaintFrame) {
        for (row, line) in surface.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                if Self::cell(frame.limits, col, row) {
                    *cell = ' ';
                }
                if Self::cell(frame.selection, col, row) {
                    let inner = frame.selection.inflate(
                        -CANVAS.width / COLS as f64,
                        -CANVAS.height / ROWS as f64,
                    );
                    *cell = if Self::cell(inner, col, row) { ' ' } else { '#' };
                }
            }
        }

        self.frames_painted += 1;
        println!("frame {}: selection {:?}", self.frames_painted, frame.selection);
        for line in &surface {
            println!("  {}", line.iter().collect::<String>());
        }
        println!();
    }
}

fn main() {
    let mut session = CropSession::new(
        CANVAS,
        Some(Size::new(800.0, 400.0)),
        TermCanvas { frames_painted: 0 },
    );

    let gesture = [
        // Drag the whole square toward the top-left of the image region.
        PointerEvent::press((200.0, 200.0)),
        PointerEvent::moved((170.0, 180.0)),
        PointerEvent::moved((140.0, 170.0)),
        PointerEvent::release((140.0, 170.0)),
        // Then grow it from the bottom-right handle until the limits clamp.
        PointerEvent::press((190.0, 220.0)),
        PointerEvent::moved((260.0, 260.0)),
        PointerEvent::moved((380.0, 340.0)),
        PointerEvent::release((380.0, 340.0)),
    ];
    for event in gesture {
        session.pump(event);
    }

    let engine = session.engine();
    println!("committed: {:?}", engine.current_rect());
    println!("limits:    {:?}", engine.limits());
}
