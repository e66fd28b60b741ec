// Error type for the fallible edges of the pad: window, colors, export.
// Drawing itself never fails; see the no-op policies in compositor/stroke.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed
    #[error("invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },
    #[error("nothing to export: the surface has not been sized yet")]
    NoSurface,
    #[error("image export error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
