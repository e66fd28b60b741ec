// Stroke style and colors.
// Visual: pen color, width, cap/join shape, and whether shapes are filled.
//
// `StrokeStyle` is a plain value: the pad hands a copy to the compositor on
// every commit and frame, nothing holds on to it.

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

/// Width used when none is configured.
pub const DEFAULT_STROKE_WIDTH: f32 = 12.0;
/// Strokes are never thinner than this.
pub const MIN_STROKE_WIDTH: f32 = 1.0;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    /// Pack as 0x00RRGGBB (alpha dropped), the window's pixel format.
    pub fn to_xrgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts any CSS color: `"navy"`, `"#1e90ff"`, `"rgb(0 0 0 / 50%)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = csscolorparser::parse(s).map_err(|e| Error::InvalidColor {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Color::rgba(r, g, b, a))
    }
}

/// How a path is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PaintStyle {
    #[default]
    Stroke,
    Fill,
    FillAndStroke,
}

impl PaintStyle {
    pub fn fills(self) -> bool {
        matches!(self, PaintStyle::Fill | PaintStyle::FillAndStroke)
    }

    pub fn strokes(self) -> bool {
        matches!(self, PaintStyle::Stroke | PaintStyle::FillAndStroke)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrokeJoin {
    #[default]
    Round,
    Miter,
    Bevel,
}

impl From<StrokeJoin> for tiny_skia::LineJoin {
    fn from(join: StrokeJoin) -> Self {
        match join {
            StrokeJoin::Round => tiny_skia::LineJoin::Round,
            StrokeJoin::Miter => tiny_skia::LineJoin::Miter,
            StrokeJoin::Bevel => tiny_skia::LineJoin::Bevel,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrokeCap {
    #[default]
    Round,
    Butt,
    Square,
}

impl From<StrokeCap> for tiny_skia::LineCap {
    fn from(cap: StrokeCap) -> Self {
        match cap {
            StrokeCap::Round => tiny_skia::LineCap::Round,
            StrokeCap::Butt => tiny_skia::LineCap::Butt,
            StrokeCap::Square => tiny_skia::LineCap::Square,
        }
    }
}

/// Everything needed to paint one stroke.
///
/// `width` is private so every assignment goes through the clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub paint: PaintStyle,
    pub join: StrokeJoin,
    pub cap: StrokeCap,
    pub color: Color,
    width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            paint: PaintStyle::Stroke,
            join: StrokeJoin::Round,
            cap: StrokeCap::Round,
            color: Color::BLACK,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StrokeStyle {
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the width; anything below 1 (or NaN) becomes 1.
    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(MIN_STROKE_WIDTH);
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.set_width(width);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_paint(mut self, paint: PaintStyle) -> Self {
        self.paint = paint;
        self
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    /// Anti-aliased solid paint in this style's color.
    pub(crate) fn skia_paint(&self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(self.color.to_skia());
        paint.anti_alias = true;
        paint
    }

    pub(crate) fn skia_stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.width,
            line_cap: self.cap.into(),
            line_join: self.join.into(),
            ..Default::default()
        }
    }
}
