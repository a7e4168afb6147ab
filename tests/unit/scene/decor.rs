use super::*;
use image::RgbaImage;

const LINE: Rgba8 = Rgba8::new(255, 255, 255, 12);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn canvas(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, CLEAR)
}

#[test]
fn grid_lines_sit_on_spacing_multiples() {
    let mut img = canvas(100, 50);
    GridLines {
        spacing: 40,
        color: LINE,
    }
    .draw(&mut img);

    let line: Rgba<u8> = LINE.into();
    assert_eq!(*img.get_pixel(0, 0), line);
    assert_eq!(*img.get_pixel(40, 10), line);
    assert_eq!(*img.get_pixel(80, 33), line);
    assert_eq!(*img.get_pixel(10, 40), line);
    assert_eq!(*img.get_pixel(41, 10), CLEAR);
    assert_eq!(*img.get_pixel(99, 49), CLEAR);
}

#[test]
fn texture_lines_run_at_forty_five_degrees() {
    let mut img = canvas(100, 100);
    LineTexture {
        spacing: 60,
        color: LINE,
    }
    .draw(&mut img);

    // Lines start at i = -100, -40, 20, 80, so covered pixels satisfy x - y in that set.
    let line: Rgba<u8> = LINE.into();
    assert_eq!(*img.get_pixel(20, 0), line);
    assert_eq!(*img.get_pixel(50, 30), line);
    assert_eq!(*img.get_pixel(0, 40), line);
    assert_eq!(*img.get_pixel(51, 30), CLEAR);
}

#[test]
fn ring_echo_is_drawn_inside_each_ring() {
    let outer = Rgba8::new(79, 195, 247, 30);
    let inner = Rgba8::new(255, 255, 255, 20);
    let mut img = canvas(100, 100);
    RingSet {
        rings: vec![Ring {
            center: (50, 50),
            radius: 30,
        }],
        color: outer,
        width: 2,
        echo: Some(RingEcho {
            inset: 10,
            color: inner,
            width: 1,
        }),
    }
    .draw(&mut img);

    assert_eq!(*img.get_pixel(50, 20), Rgba::from(outer));
    assert_eq!(*img.get_pixel(50, 30), Rgba::from(inner));
    assert_eq!(*img.get_pixel(50, 50), CLEAR);
}

#[test]
fn pins_share_one_style() {
    let head = Rgba8::new(230, 57, 70, 90);
    let dot = Rgba8::new(255, 255, 255, 90);
    let mut img = canvas(60, 70);
    PinSet {
        positions: vec![(30, 30)],
        size: 20,
        style: PinStyle::new(head, dot),
    }
    .draw(&mut img);

    assert_eq!(*img.get_pixel(30, 30), Rgba::from(dot));
    assert_eq!(*img.get_pixel(30, 22), Rgba::from(head));
    assert_eq!(*img.get_pixel(30, 50), Rgba::from(head));
    assert_eq!(*img.get_pixel(5, 5), CLEAR);
}

#[test]
fn non_positive_spacing_is_rejected() {
    let err = GridLines {
        spacing: 0,
        color: LINE,
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("grid spacing"));
    assert!(
        LineTexture {
            spacing: -5,
            color: LINE,
        }
        .validate()
        .is_err()
    );
}
