// Command-line configuration for the desktop pad.
// Visual: picks the pen and page look before the window opens.

use std::path::PathBuf;

use clap::Parser;

use crate::pad::PadConfig;
use crate::style::{Color, PaintStyle, StrokeCap, StrokeJoin, StrokeStyle, DEFAULT_STROKE_WIDTH};

/// Draw a signature with the mouse. C clears, S saves, ESC quits.
#[derive(Debug, Parser)]
#[command(name = "signature-pad", version)]
pub struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 360)]
    pub height: usize,

    /// Pen width; values below 1 are raised to 1
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f32,

    /// Pen color (any CSS color)
    #[arg(long, default_value = "black")]
    pub stroke_color: Color,

    /// Page color (any CSS color)
    #[arg(long, default_value = "white")]
    pub background: Color,

    #[arg(long, value_enum, default_value_t = StrokeCap::Round)]
    pub cap: StrokeCap,

    #[arg(long, value_enum, default_value_t = StrokeJoin::Round)]
    pub join: StrokeJoin,

    #[arg(long, value_enum, default_value_t = PaintStyle::Stroke)]
    pub paint: PaintStyle,

    /// Where S writes the PNG
    #[arg(long, short, default_value = "signature.png")]
    pub output: PathBuf,
}

impl Args {
    pub fn pad_config(&self) -> PadConfig {
        let style = StrokeStyle::default()
            .with_width(self.stroke_width)
            .with_color(self.stroke_color)
            .with_cap(self.cap)
            .with_join(self.join)
            .with_paint(self.paint);
        PadConfig { style, background: self.background }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_give_a_black_pen_on_white() {
        let args = Args::try_parse_from(["signature-pad"]).unwrap();
        assert_eq!((args.width, args.height), (640, 360));
        assert_eq!(args.pad_config(), PadConfig::default());
        assert_eq!(args.output, PathBuf::from("signature.png"));
    }

    #[test]
    fn flags_flow_into_the_style() {
        let args = Args::try_parse_from([
            "signature-pad",
            "--stroke-width",
            "0.5",
            "--stroke-color",
            "#1e90ff",
            "--background",
            "ivory",
            "--cap",
            "square",
            "--join",
            "bevel",
            "--paint",
            "fill-and-stroke",
        ])
        .unwrap();
        let config = args.pad_config();
        assert_eq!(config.style.width(), 1.0);
        assert_eq!(config.style.color, Color::rgb(0x1e, 0x90, 0xff));
        assert_eq!(config.background, Color::rgb(255, 255, 240));
        assert_eq!(config.style.cap, StrokeCap::Square);
        assert_eq!(config.style.join, StrokeJoin::Bevel);
        assert_eq!(config.style.paint, PaintStyle::FillAndStroke);
    }

    #[test]
    fn bad_color_is_a_usage_error() {
        assert!(Args::try_parse_from(["signature-pad", "--background", "plaid"]).is_err());
    }
}
