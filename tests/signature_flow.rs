use signature_pad::export::encode_png;
use signature_pad::{
    Color, FrameBuffer, PadConfig, PointerEvent, PointerHandler, SignaturePad, StrokeStyle,
};

const BLUE: Color = Color::rgb(0, 0, 255);

fn drag(pad: &mut SignaturePad, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    pad.handle(PointerEvent::down(first.0, first.1));
    for &(x, y) in rest {
        pad.handle(PointerEvent::moved(x, y));
    }
    let last = points.last().unwrap();
    pad.handle(PointerEvent::up(last.0, last.1));
}

#[test]
fn signature_survives_frames_and_exports() {
    let config = PadConfig {
        style: StrokeStyle::default().with_color(BLUE).with_width(8.0),
        background: Color::WHITE,
    };
    let mut pad = SignaturePad::new(config);
    pad.resize(120, 60);

    // A wavy stroke with some jitter mixed in.
    let wave = [
        (10.0, 30.0),
        (11.0, 31.0),
        (30.0, 20.0),
        (50.0, 30.0),
        (51.0, 29.0),
        (70.0, 40.0),
        (110.0, 30.0),
    ];
    drag(&mut pad, &wave);
    // A tap.
    drag(&mut pad, &[(100.0, 10.0)]);

    let mut frame = FrameBuffer::default();
    assert!(pad.render(&mut frame));
    assert_eq!((frame.width, frame.height), (120, 60));
    // The final straight segment runs from (70,40)'s midpoint (90,35) to (110,30).
    assert_eq!(frame.pixel(100, 32), Some(BLUE.to_xrgb()));
    assert_eq!(frame.pixel(100, 10), Some(BLUE.to_xrgb()));
    assert_eq!(frame.pixel(5, 55), Some(Color::WHITE.to_xrgb()));

    let png = encode_png(&pad.snapshot().unwrap()).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (120, 60));
    assert_eq!(decoded.get_pixel(100, 10).0, [0, 0, 255, 255]);
    // Untouched ink is transparent; the background lives only in the frame.
    assert_eq!(decoded.get_pixel(5, 55).0[3], 0);
}

#[test]
fn clear_then_resize() {
    let mut pad = SignaturePad::new(PadConfig::default());
    pad.resize(80, 40);
    drag(&mut pad, &[(10.0, 20.0), (70.0, 20.0)]);

    pad.clear();
    let mut frame = FrameBuffer::default();
    assert!(pad.render(&mut frame));
    assert!(frame.pixels.iter().all(|&p| p == Color::WHITE.to_xrgb()));
    // Cleared ink is opaque background, not transparent.
    assert!(pad.snapshot().unwrap().pixels().all(|px| px.0 == [255, 255, 255, 255]));

    drag(&mut pad, &[(10.0, 20.0), (70.0, 20.0)]);
    pad.resize(100, 50);
    assert_eq!(pad.size(), Some((100, 50)));
    assert!(pad.snapshot().unwrap().pixels().all(|px| px.0[3] == 0));
}

#[test]
fn abandoned_gesture_is_discarded_by_next_down() {
    let mut pad = SignaturePad::new(PadConfig::default());
    pad.resize(80, 40);

    // Down + move at the top, then the Up never arrives.
    pad.handle(PointerEvent::down(10.0, 8.0));
    pad.handle(PointerEvent::moved(70.0, 8.0));
    drag(&mut pad, &[(10.0, 32.0), (70.0, 32.0)]);

    let snap = pad.snapshot().unwrap();
    assert_eq!(snap.get_pixel(30, 8).0[3], 0);
    assert_eq!(snap.get_pixel(30, 32).0, [0, 0, 0, 255]);
}
