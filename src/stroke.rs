// Turns raw pointer samples into a smooth path.
// Visual: the line under your finger follows the pointer with rounded curves
// instead of a jagged polyline, and trembling in place adds nothing.
//
// Smoothing: every accepted sample p adds a quadratic curve whose control
// point is the previous sample and whose end is the midpoint between the
// previous sample and p. The curve always ends half a step behind the
// pointer; `end()` draws the last half step as a straight line.

use tracing::trace;

use crate::path::{Path, PathCommand, Point};

/// Minimum movement (on either axis) before a new sample counts.
pub const TOUCH_TOLERANCE: f32 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct StrokeBuilder {
    path: Path,           // the live geometry you see while drawing
    last: Option<Point>,  // last accepted sample; None until the first begin
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `p`. Any stroke still in progress is thrown away.
    pub fn begin(&mut self, p: Point) {
        if self.is_active() {
            trace!("begin: discarding abandoned stroke ({} commands)", self.path.len());
        }
        self.path.reset();
        self.path.push(PathCommand::MoveTo(p));
        self.last = Some(p);
    }

    /// Feed the next sample. Returns true when the path changed and the view
    /// should be redrawn.
    pub fn extend(&mut self, p: Point) -> bool {
        let Some(last) = self.last.filter(|_| self.is_active()) else {
            // No begin seen: start the stroke here instead.
            self.begin(p);
            return true;
        };

        let dx = (p.x - last.x).abs();
        let dy = (p.y - last.y).abs();
        if dx < TOUCH_TOLERANCE && dy < TOUCH_TOLERANCE {
            trace!(dx, dy, "extend: sample inside tolerance, dropped");
            return false;
        }

        self.path.push(PathCommand::QuadTo { control: last, end: last.midpoint(p) });
        self.last = Some(p);
        true
    }

    /// Finish the stroke: close the pending curve to the exact last sample
    /// and hand the path over. The builder is left empty but remembers the
    /// last sample, so calling `end` again yields a dot at that point.
    pub fn end(&mut self) -> Path {
        let Some(last) = self.last else {
            return Path::new();
        };
        if !self.is_active() {
            self.path.push(PathCommand::MoveTo(last));
        }
        self.path.push(PathCommand::LineTo(last));
        std::mem::take(&mut self.path)
    }

    /// The in-progress geometry (empty between strokes).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True between `begin` and `end`.
    pub fn is_active(&self) -> bool {
        !self.path.is_empty()
    }
}
