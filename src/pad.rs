// The signature pad: one stroke builder, one compositor, and the style the
// user picked.
// Visual: press, drag, release draws one stroke; it stays once you let go.
//
// Pointer events come in through `PointerHandler::handle`; the return value
// tells the caller whether the view should be redrawn.

use std::path::Path as FsPath;

use image::RgbaImage;
use tracing::{debug, info, trace};

use crate::compositor::SurfaceCompositor;
use crate::error::{Error, Result};
use crate::export;
use crate::path::{Path, Point};
use crate::stroke::StrokeBuilder;
use crate::style::{Color, StrokeStyle};
use crate::types::FrameBuffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Down,
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Move,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Up,
            position: Point::new(x, y),
        }
    }
}

/// Something that consumes pointer events.
pub trait PointerHandler {
    /// Returns true when the view should be redrawn.
    fn handle(&mut self, event: PointerEvent) -> bool;
}

/// Style and background, as supplied by the configuration source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadConfig {
    pub style: StrokeStyle,
    pub background: Color,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            style: StrokeStyle::default(),
            background: Color::WHITE,
        }
    }
}

pub struct SignaturePad {
    stroke: StrokeBuilder,
    surface: SurfaceCompositor,
    style: StrokeStyle,
    background: Color, // independent of style.color
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new(PadConfig::default())
    }
}

impl SignaturePad {
    pub fn new(config: PadConfig) -> Self {
        Self {
            stroke: StrokeBuilder::new(),
            surface: SurfaceCompositor::new(),
            style: config.style,
            background: config.background,
        }
    }

    /// The display area changed size. Drops all committed ink.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    /// Wipe the ink layer to the current background color.
    pub fn clear(&mut self) {
        self.surface.clear(self.background);
    }

    /// Compose the current frame into `out`. False until the pad has a size.
    pub fn render(&mut self, out: &mut FrameBuffer) -> bool {
        self.surface.render_frame(self.background, self.stroke.path(), &self.style, out)
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn stroke_width(&self) -> f32 {
        self.style.width()
    }

    /// Clamped to at least 1.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.set_width(width);
    }

    pub fn stroke_color(&self) -> Color {
        self.style.color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// True while a stroke is being drawn.
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_active()
    }

    /// The stroke being drawn right now (empty between strokes).
    pub fn in_progress(&self) -> &Path {
        self.stroke.path()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.surface.size()
    }

    /// Copy of the committed ink (never the stroke in progress).
    pub fn snapshot(&self) -> Option<RgbaImage> {
        self.surface.ink_layer().map(export::snapshot)
    }

    /// Write the committed ink to a PNG file.
    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let image = self.snapshot().ok_or(Error::NoSurface)?;
        export::save_png(&image, path.as_ref())?;
        info!(path = %path.as_ref().display(), "signature saved");
        Ok(())
    }

    fn finish_stroke(&mut self) {
        let path = self.stroke.end();
        self.surface.commit(&path, &self.style);
    }
}

impl PointerHandler for SignaturePad {
    fn handle(&mut self, event: PointerEvent) -> bool {
        trace!(?event, "pointer");
        match event.phase {
            PointerPhase::Down => {
                self.stroke.begin(event.position);
                true
            }
            PointerPhase::Move => self.stroke.extend(event.position),
            PointerPhase::Up => {
                if !self.stroke.is_active() {
                    debug!("pointer up without a stroke; ignored");
                    return false;
                }
                self.finish_stroke();
                true
            }
        }
    }
}
