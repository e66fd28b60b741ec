// What you SEE:
// • A white page (or your --background color).
// • Hold Left Mouse and drag: a smooth pen line follows the pointer.
// • Release: the stroke is inked permanently; the next one draws on top.
// • C clears the page. S saves the ink as a PNG. ESC quits.
// • Resizing the window starts a fresh page.

use clap::Parser;
use signature_pad::config::Args;
use signature_pad::draw::Drawer;
use signature_pad::{Error, FrameBuffer, PointerHandler, SignaturePad};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.pad_config();
    info!(
        width = args.width,
        height = args.height,
        stroke_width = config.style.width(),
        output = %args.output.display(),
        "starting signature pad"
    );

    /* --- Window + pad ---
       Visual: window opens; nothing is drawn until the first resize below. */
    let mut drawer = Drawer::new("Signature Pad", args.width, args.height)?;
    let mut pad = SignaturePad::new(config);

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::default();
    let mut size = (0usize, 0usize);

    /* --- Frame counter (debug log once per second) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let mut redraw = false;

        /* 1) Layout: a new size means a new, empty page. */
        let current = drawer.size();
        if current != size {
            size = current;
            pad.resize(size.0 as u32, size.1 as u32);
            redraw = true;
        }

        /* 2) Keys */
        if drawer.clear_pressed_once() {
            pad.clear();
            redraw = true;
        }
        if drawer.save_pressed_once() {
            // A failed save shouldn't end the session.
            if let Err(e) = pad.save_png(&args.output) {
                error!("save failed: {e}");
            }
        }

        /* 3) Pointer → stroke. */
        for event in drawer.poll_pointer() {
            redraw |= pad.handle(event);
        }

        /* 4) Present only when something changed. */
        if redraw && pad.render(&mut screen) {
            drawer.present(&screen)?;
            frames_this_second += 1;
        } else {
            drawer.idle();
        }

        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!(fps = frames_this_second as f32 / secs, "redraws");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
