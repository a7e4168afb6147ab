use super::*;
use image::{Rgba, RgbaImage};

const INK: Rgba<u8> = Rgba([200, 10, 20, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn count(img: &RgbaImage, c: Rgba<u8>) -> usize {
    img.pixels().filter(|p| **p == c).count()
}

#[test]
fn fill_rect_is_inclusive() {
    let mut img = RgbaImage::new(10, 10);
    fill_rect(&mut img, IRect::new(2, 3, 4, 3), INK);
    assert_eq!(count(&img, INK), 3);
    assert_eq!(*img.get_pixel(4, 3), INK);
    assert_eq!(*img.get_pixel(5, 3), CLEAR);
}

#[test]
fn fill_rect_clips_and_ignores_offscreen() {
    let mut img = RgbaImage::new(8, 8);
    fill_rect(&mut img, IRect::new(-5, -5, 1, 1), INK);
    assert_eq!(count(&img, INK), 4);
    fill_rect(&mut img, IRect::new(20, 20, 30, 30), INK);
    fill_rect(&mut img, IRect::new(5, 5, 4, 4), INK);
    assert_eq!(count(&img, INK), 4);
}

#[test]
fn later_draws_replace_earlier_pixels() {
    let mut img = RgbaImage::new(4, 4);
    let faint = Rgba([255, 255, 255, 10]);
    fill_rect(&mut img, IRect::new(0, 0, 3, 3), INK);
    fill_rect(&mut img, IRect::new(1, 1, 2, 2), faint);
    assert_eq!(*img.get_pixel(1, 1), faint);
    assert_eq!(*img.get_pixel(0, 0), INK);
}

#[test]
fn filled_circle_is_symmetric_and_covers_center() {
    let mut img = RgbaImage::new(41, 41);
    fill_ellipse(&mut img, IRect::around(20, 20, 10), INK);
    assert_eq!(*img.get_pixel(20, 20), INK);
    assert_eq!(*img.get_pixel(30, 20), INK);
    assert_eq!(*img.get_pixel(31, 20), CLEAR);
    for y in 0..41 {
        for x in 0..41 {
            assert_eq!(img.get_pixel(x, y), img.get_pixel(40 - x, y));
            assert_eq!(img.get_pixel(x, y), img.get_pixel(y, x));
        }
    }
}

#[test]
fn stroked_circle_leaves_interior_untouched() {
    let mut img = RgbaImage::new(41, 41);
    stroke_ellipse(&mut img, IRect::around(20, 20, 15), 2, INK);
    assert_eq!(*img.get_pixel(20, 20), CLEAR);
    assert_eq!(*img.get_pixel(35, 20), INK);
    assert_eq!(*img.get_pixel(20, 5), INK);
    assert_eq!(*img.get_pixel(30, 20), CLEAR);
}

#[test]
fn thin_line_hits_both_endpoints() {
    let mut img = RgbaImage::new(20, 20);
    draw_line(&mut img, Point::new(1.0, 2.0), Point::new(17.0, 9.0), 1, INK);
    assert_eq!(*img.get_pixel(1, 2), INK);
    assert_eq!(*img.get_pixel(17, 9), INK);
    // One pixel per column for a shallow line.
    assert_eq!(count(&img, INK), 17);
}

#[test]
fn wide_line_has_requested_thickness() {
    let mut img = RgbaImage::new(30, 30);
    draw_line(&mut img, Point::new(5.0, 15.0), Point::new(25.0, 15.0), 3, INK);
    for y in 14..=16 {
        assert_eq!(*img.get_pixel(15, y), INK);
    }
    assert_eq!(*img.get_pixel(15, 13), CLEAR);
    assert_eq!(*img.get_pixel(15, 17), CLEAR);
}

#[test]
fn offscreen_line_does_not_panic() {
    let mut img = RgbaImage::new(10, 10);
    draw_line(&mut img, Point::new(-20.0, 0.0), Point::new(0.0, 20.0), 1, INK);
    draw_line(&mut img, Point::new(-5.0, 0.0), Point::new(5.0, 10.0), 1, INK);
    assert_eq!(*img.get_pixel(0, 5), INK);
}

#[test]
fn triangle_fill_covers_interior_and_vertices() {
    let mut img = RgbaImage::new(30, 30);
    let tri = [
        Point::new(15.0, 2.0),
        Point::new(3.0, 25.0),
        Point::new(27.0, 25.0),
    ];
    fill_polygon(&mut img, &tri, INK);
    assert_eq!(*img.get_pixel(15, 15), INK);
    assert_eq!(*img.get_pixel(15, 2), INK);
    assert_eq!(*img.get_pixel(3, 25), INK);
    assert_eq!(*img.get_pixel(27, 25), INK);
    assert_eq!(*img.get_pixel(3, 5), CLEAR);
    assert_eq!(*img.get_pixel(15, 26), CLEAR);
}

#[test]
fn irect_helpers() {
    let r = IRect::around(10, 10, 4);
    assert_eq!(r, IRect::new(6, 6, 14, 14));
    assert_eq!(r.inset(2), IRect::new(8, 8, 12, 12));
    assert!(r.contains(14, 6));
    assert!(!r.contains(15, 6));
    assert!(IRect::new(3, 0, 2, 0).is_empty());
}

#[test]
fn closed_polygon_with_repeated_first_vertex_still_fills() {
    let mut img = RgbaImage::new(20, 20);
    let square = [
        Point::new(2.0, 2.0),
        Point::new(12.0, 2.0),
        Point::new(12.0, 12.0),
        Point::new(2.0, 12.0),
        Point::new(2.0, 2.0),
    ];
    fill_polygon(&mut img, &square, INK);
    assert_eq!(count(&img, INK), 121);
}

#[test]
fn degenerate_shapes_draw_lines_or_dots() {
    let mut img = RgbaImage::new(20, 20);
    fill_ellipse(&mut img, IRect::new(2, 5, 12, 5), INK);
    assert_eq!(count(&img, INK), 11);

    let mut img = RgbaImage::new(20, 20);
    fill_polygon(&mut img, &[Point::new(4.0, 4.0), Point::new(4.2, 3.9)], INK);
    assert_eq!(count(&img, INK), 1);

    let mut img = RgbaImage::new(20, 20);
    draw_line(&mut img, Point::new(9.0, 9.0), Point::new(9.0, 9.0), 3, INK);
    assert_eq!(count(&img, INK), 9);
}

#[test]
fn filled_ellipse_respects_distinct_radii() {
    let mut img = RgbaImage::new(40, 40);
    fill_ellipse(&mut img, IRect::new(5, 15, 35, 25), INK);
    assert_eq!(*img.get_pixel(5, 20), INK);
    assert_eq!(*img.get_pixel(35, 20), INK);
    assert_eq!(*img.get_pixel(20, 15), INK);
    assert_eq!(*img.get_pixel(20, 13), CLEAR);
    assert_eq!(*img.get_pixel(6, 16), CLEAR);
}
