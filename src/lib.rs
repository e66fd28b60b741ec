//! Freehand signature capture.
//!
//! [`StrokeBuilder`] smooths pointer samples into a quadratic-curve path;
//! [`SurfaceCompositor`] commits finished paths into a persistent ink layer
//! and composes each frame as background, ink, then the live stroke.
//! [`SignaturePad`] ties them to pointer events and a [`StrokeStyle`].

pub mod compositor;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod pad;
pub mod path;
pub mod stroke;
pub mod style;
pub mod types;

pub use compositor::SurfaceCompositor;
pub use error::{Error, Result};
pub use pad::{PadConfig, PointerEvent, PointerHandler, PointerPhase, SignaturePad};
pub use path::{Path, PathCommand, Point};
pub use stroke::{StrokeBuilder, TOUCH_TOLERANCE};
pub use style::{Color, PaintStyle, StrokeCap, StrokeJoin, StrokeStyle};
pub use types::FrameBuffer;
