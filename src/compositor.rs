// Owns the ink layer and builds every displayed frame.
// Visual expectations:
// - Finished strokes stay on screen until you clear or the window changes size.
// - The stroke you are drawing right now always sits on top of older ink.
//
// Frame order is fixed: background color, then the ink layer, then the live
// path. Only `commit` and `clear` write into the ink layer.

use tiny_skia::{FillRule, Pixmap, PixmapPaint, Rect, Transform};
use tracing::{debug, trace, warn};

use crate::path::{Path, Point};
use crate::style::{Color, StrokeCap, StrokeStyle};
use crate::types::FrameBuffer;

#[derive(Default)]
pub struct SurfaceCompositor {
    ink: Option<Pixmap>,   // committed strokes; transparent where nothing was drawn
    frame: Option<Pixmap>, // scratch for composing; same size as `ink`
}

impl SurfaceCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, transparent ink layer. Whatever was drawn before is gone.
    /// Zero-sized areas (a minimized window) leave no layer at all.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ink = Pixmap::new(width, height);
        self.frame = Pixmap::new(width, height);
        match self.ink {
            Some(_) => debug!(width, height, "ink layer allocated"),
            None => warn!(width, height, "ink layer dropped: empty surface"),
        }
    }

    /// Rasterize `path` into the ink layer. Permanent until clear/resize.
    pub fn commit(&mut self, path: &Path, style: &StrokeStyle) {
        let Some(ink) = self.ink.as_mut() else {
            warn!("commit before the surface was sized; stroke dropped");
            return;
        };
        if path.is_empty() {
            return;
        }
        let drawn = paint_path(ink, path, style);
        debug!(commands = path.len(), drawn, "stroke committed");
    }

    /// Compose background + ink + live path into `out`.
    /// Returns false (and leaves `out` alone) when there is no ink layer yet.
    pub fn render_frame(
        &mut self,
        background: Color,
        in_progress: &Path,
        style: &StrokeStyle,
        out: &mut FrameBuffer,
    ) -> bool {
        let (Some(ink), Some(frame)) = (self.ink.as_ref(), self.frame.as_mut()) else {
            return false;
        };

        // 1) Background everywhere.
        frame.fill(background.to_skia());
        // 2) Committed ink, pixel for pixel; transparent areas let the background through.
        frame.draw_pixmap(0, 0, ink.as_ref(), &PixmapPaint::default(), Transform::identity(), None);
        // 3) The live stroke last, so it wins wherever it overlaps older ink.
        if !in_progress.is_empty() {
            paint_path(frame, in_progress, style);
        }

        out.reshape(frame.width() as usize, frame.height() as usize);
        for (dst, px) in out.pixels.iter_mut().zip(frame.pixels()) {
            let c = px.demultiply();
            *dst = ((c.red() as u32) << 16) | ((c.green() as u32) << 8) | c.blue() as u32;
        }
        true
    }

    /// Fill the whole ink layer with `background`. Size is kept.
    pub fn clear(&mut self, background: Color) {
        if let Some(ink) = self.ink.as_mut() {
            ink.fill(background.to_skia());
            debug!(width = ink.width(), height = ink.height(), "ink layer cleared");
        }
    }

    /// Read-only view of the committed strokes.
    pub fn ink_layer(&self) -> Option<&Pixmap> {
        self.ink.as_ref()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.ink.as_ref().map(|ink| (ink.width(), ink.height()))
    }
}

/// Paint one path onto `target` with `style`. Returns whether anything was drawn.
fn paint_path(target: &mut Pixmap, path: &Path, style: &StrokeStyle) -> bool {
    let paint = style.skia_paint();

    // A tap never moves, so there is no segment to stroke. The cap decides
    // what a dot looks like; fill of a dot has no area.
    if let Some(center) = path.as_dot() {
        if !style.paint.strokes() {
            return false;
        }
        let Some(dot) = dot_path(center, style) else {
            return false;
        };
        trace!(x = center.x, y = center.y, "painting dot");
        target.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        return true;
    }

    let Some(skia_path) = path.to_skia() else {
        return false;
    };
    if style.paint.fills() {
        target.fill_path(&skia_path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    if style.paint.strokes() {
        target.stroke_path(&skia_path, &paint, &style.skia_stroke(), Transform::identity(), None);
    }
    true
}

/// Shape of a zero-length stroke: a disc for round caps, a square for square
/// caps, nothing for butt caps.
fn dot_path(center: Point, style: &StrokeStyle) -> Option<tiny_skia::Path> {
    let half = style.width() / 2.0;
    match style.cap {
        StrokeCap::Round => tiny_skia::PathBuilder::from_circle(center.x, center.y, half),
        StrokeCap::Square => {
            let side = style.width();
            let rect = Rect::from_xywh(center.x - half, center.y - half, side, side)?;
            Some(tiny_skia::PathBuilder::from_rect(rect))
        }
        StrokeCap::Butt => None,
    }
}
