// Window + pointer polling.
// Visual effects provided here:
// 1) A resizable window that shows the composed signature frame.
// 2) Mouse button/position turned into Down / Move / Up pointer events.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::pad::PointerEvent;
use crate::types::FrameBuffer;

pub struct Drawer {
    window: Window,          // the on-screen window you see
    pointer: PointerTracker, // remembers the button state between frames
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, pointer: PointerTracker::default() })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Pump window events without new pixels (keeps input flowing between redraws).
    pub fn idle(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Current drawable size in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Visual: when pressed, the page is wiped back to the background color.
    pub fn clear_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// S writes the committed ink to disk.
    pub fn save_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    /// Pointer events for this frame, derived from the left button.
    /// Usually zero or one; a release after movement gives Move then Up.
    pub fn poll_pointer(&mut self) -> Vec<PointerEvent> {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pos = self.window.get_mouse_pos(MouseMode::Clamp);
        self.pointer.step(down, pos)
    }
}

/// Turns polled (button, position) samples into phased pointer events.
/// minifb only reports state, so edges are found by comparing with the
/// previous frame.
#[derive(Debug, Default)]
pub struct PointerTracker {
    down: bool,
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn step(&mut self, down: bool, pos: Option<(f32, f32)>) -> Vec<PointerEvent> {
        let was_down = self.down;
        let moved = pos.is_some() && pos != self.last;
        if let Some(p) = pos {
            self.last = Some(p);
        }
        self.down = down;

        let Some((x, y)) = self.last else {
            return Vec::new();
        };
        match (was_down, down) {
            (false, true) => vec![PointerEvent::down(x, y)],
            (true, true) if moved => vec![PointerEvent::moved(x, y)],
            // Released somewhere new: move there first so the last stretch is drawn.
            (true, false) if moved => vec![PointerEvent::moved(x, y), PointerEvent::up(x, y)],
            // Released in place (or off the window): finish where we last saw the pointer.
            (true, false) => vec![PointerEvent::up(x, y)],
            _ => Vec::new(),
        }
    }
}
