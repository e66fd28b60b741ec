// Export surface: turns the ink layer into an ordinary RGBA image.
// Visual: the saved PNG shows your strokes on a transparent page (or on the
// background color, if the pad was cleared).

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use tiny_skia::Pixmap;

use crate::error::Result;

/// Straight-alpha copy of a (premultiplied) pixmap.
pub fn snapshot(ink: &Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(ink.width(), ink.height());
    for (dst, px) in out.pixels_mut().zip(ink.pixels()) {
        let c = px.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

/// Encode as PNG in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
