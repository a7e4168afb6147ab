//! Aliased raster primitives over `imageproc::drawing`.
//!
//! All primitives replace the pixels they cover (no blending; the last draw wins) and silently
//! clip to the canvas. Rectangle and ellipse bounds are inclusive on both ends, so
//! `IRect::new(0, 0, 0, 0)` covers exactly one pixel. Shape vertices are rounded to the pixel
//! grid before drawing.

use image::GenericImage;
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut,
    draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point as PixelPoint;
use imageproc::rect::Rect;
use kurbo::{Point, Vec2};

/// Inclusive integer rectangle `[x0, x1] x [y0, y1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IRect {
    /// Left column.
    pub x0: i32,
    /// Top row.
    pub y0: i32,
    /// Right column (inclusive).
    pub x1: i32,
    /// Bottom row (inclusive).
    pub y1: i32,
}

impl IRect {
    /// Build from inclusive corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square bounding box of a circle.
    pub const fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(
            cx.saturating_sub(r),
            cy.saturating_sub(r),
            cx.saturating_add(r),
            cy.saturating_add(r),
        )
    }

    /// `true` when the rectangle covers no pixel.
    pub const fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Shrink every side by `d`.
    pub const fn inset(self, d: i32) -> Self {
        Self::new(
            self.x0.saturating_add(d),
            self.y0.saturating_add(d),
            self.x1.saturating_sub(d),
            self.y1.saturating_sub(d),
        )
    }

    /// Whether `(x, y)` lies inside.
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Intersection with a `w x h` canvas as an imageproc rectangle.
    fn clipped_to(self, w: u32, h: u32) -> Option<Rect> {
        let max_x = i32::try_from(w).unwrap_or(i32::MAX).saturating_sub(1);
        let max_y = i32::try_from(h).unwrap_or(i32::MAX).saturating_sub(1);
        let r = Self::new(self.x0.max(0), self.y0.max(0), self.x1.min(max_x), self.y1.min(max_y));
        if r.is_empty() {
            return None;
        }
        let w = u32::try_from(r.x1 - r.x0 + 1).ok()?;
        let h = u32::try_from(r.y1 - r.y0 + 1).ok()?;
        Some(Rect::at(r.x0, r.y0).of_size(w, h))
    }

    /// Integer center and radii of the inscribed ellipse.
    fn ellipse_frame(self) -> ((i32, i32), i32, i32) {
        let span = |a: i32, b: i32| {
            let (a, b) = (i64::from(a), i64::from(b));
            ((a + b).div_euclid(2), (b - a) / 2)
        };
        let (cx, rx) = span(self.x0, self.x1);
        let (cy, ry) = span(self.y0, self.y1);
        // Both halves of an inclusive i32 range fit back into i32.
        ((cx as i32, cy as i32), rx as i32, ry as i32)
    }
}

fn snap(p: Point) -> PixelPoint<i32> {
    PixelPoint::new(p.x.round() as i32, p.y.round() as i32)
}

fn to_f32(p: PixelPoint<i32>) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

/// Fill an inclusive rectangle.
pub fn fill_rect<I: GenericImage>(img: &mut I, r: IRect, color: I::Pixel) {
    let (w, h) = img.dimensions();
    if let Some(rect) = r.clipped_to(w, h) {
        draw_filled_rect_mut(img, rect, color);
    }
}

/// Fill a closed polygon, edges included.
pub fn fill_polygon<I: GenericImage>(img: &mut I, points: &[Point], color: I::Pixel) {
    let mut poly: Vec<PixelPoint<i32>> = Vec::with_capacity(points.len());
    for p in points.iter().copied().map(snap) {
        if poly.last() != Some(&p) {
            poly.push(p);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }

    match poly.len() {
        0 => {}
        1 => fill_rect(img, IRect::new(poly[0].x, poly[0].y, poly[0].x, poly[0].y), color),
        2 => draw_line_segment_mut(img, to_f32(poly[0]), to_f32(poly[1]), color),
        _ => draw_polygon_mut(img, &poly, color),
    }
}

/// Fill the ellipse inscribed in an inclusive bounding box.
pub fn fill_ellipse<I: GenericImage>(img: &mut I, bounds: IRect, color: I::Pixel) {
    if bounds.is_empty() {
        return;
    }
    let (center, rx, ry) = bounds.ellipse_frame();
    if rx == 0 || ry == 0 {
        fill_rect(img, bounds, color);
        return;
    }
    draw_filled_ellipse_mut(img, center, rx, ry, color);
}

/// Outline the ellipse inscribed in `bounds` with a ring `width` pixels thick, drawn inward.
pub fn stroke_ellipse<I: GenericImage>(img: &mut I, bounds: IRect, width: i32, color: I::Pixel) {
    if width <= 0 || bounds.is_empty() {
        return;
    }
    let (center, rx, ry) = bounds.ellipse_frame();
    for k in 0..width {
        let (ax, ay) = (rx - k, ry - k);
        if ax <= 0 || ay <= 0 {
            let (ax, ay) = (ax.max(0), ay.max(0));
            let core = IRect::new(center.0 - ax, center.1 - ay, center.0 + ax, center.1 + ay);
            fill_ellipse(img, core, color);
            return;
        }
        draw_hollow_ellipse_mut(img, center, ax, ay, color);
        // Off-by-one rings close the diagonal gaps between concentric outlines.
        if k + 1 < width && ax > 1 && ay > 1 {
            draw_hollow_ellipse_mut(img, center, ax - 1, ay, color);
            draw_hollow_ellipse_mut(img, center, ax, ay - 1, color);
        }
    }
}

/// Draw a straight line. Width 1 is a Bresenham segment; wider lines are filled quads
/// `width` pixels across with flat ends.
pub fn draw_line<I: GenericImage>(img: &mut I, p0: Point, p1: Point, width: i32, color: I::Pixel) {
    if width <= 1 {
        draw_line_segment_mut(img, to_f32(snap(p0)), to_f32(snap(p1)), color);
        return;
    }

    let half = f64::from(width - 1) / 2.0;
    let seg = p1 - p0;
    let len = seg.hypot();
    if len == 0.0 {
        let c = snap(p0);
        let d = half.round() as i32;
        fill_rect(img, IRect::new(c.x - d, c.y - d, c.x + d, c.y + d), color);
        return;
    }
    let n = Vec2::new(-seg.y, seg.x) * (half / len);
    fill_polygon(img, &[p0 + n, p1 + n, p1 - n, p0 - n], color);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/primitives.rs"]
mod tests;
