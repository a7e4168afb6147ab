use image::GenericImage;
use kurbo::Point;

use crate::foundation::core::Direction;
use crate::raster::primitives::{IRect, draw_line, fill_ellipse, fill_polygon, stroke_ellipse};

pub(crate) fn pt(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Point `dist` pixels from `center` along a screen-space bearing, truncated toward zero.
pub(crate) fn polar(center: (i32, i32), dist: i32, bearing_deg: f64) -> (i32, i32) {
    let (s, c) = bearing_deg.to_radians().sin_cos();
    let d = f64::from(dist);
    (
        center.0 + (d * c).trunc() as i32,
        center.1 + (d * s).trunc() as i32,
    )
}

/// Circle at `center`, optionally filled and/or outlined with `(color, width)`.
pub fn circle<I: GenericImage>(
    img: &mut I,
    center: (i32, i32),
    radius: i32,
    fill: Option<I::Pixel>,
    outline: Option<(I::Pixel, i32)>,
) {
    let bounds = IRect::around(center.0, center.1, radius);
    if let Some(color) = fill {
        fill_ellipse(img, bounds, color);
    }
    if let Some((color, width)) = outline {
        stroke_ellipse(img, bounds, width, color);
    }
}

/// Teardrop: a round lobe of radius `size / 2` below `center` and a point `size` above it.
pub fn water_drop<I: GenericImage>(img: &mut I, center: (i32, i32), size: i32, color: I::Pixel) {
    let (cx, cy) = center;
    let r = size / 2;
    circle(img, (cx, cy + r / 2), r, Some(color), None);
    fill_polygon(
        img,
        &[
            pt(cx, cy - size),
            pt(cx - r, cy + r / 2),
            pt(cx + r, cy + r / 2),
        ],
        color,
    );
}

/// Colors and proportions of a [`map_pin`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinStyle<P> {
    /// Head and tip color.
    pub head: P,
    /// Inner dot color.
    pub dot: P,
    /// How far the tip's upper corners sit inside the head's silhouette.
    pub tip_inset: i32,
}

impl<P> PinStyle<P> {
    /// Pin with the standard tip inset of 5 pixels.
    pub fn new(head: P, dot: P) -> Self {
        Self {
            head,
            dot,
            tip_inset: 5,
        }
    }

    /// Override the tip inset.
    pub fn with_tip_inset(mut self, tip_inset: i32) -> Self {
        self.tip_inset = tip_inset;
        self
    }

    /// Convert the colors, e.g. from [`Rgba8`](crate::Rgba8) config to canvas pixels.
    pub fn map<Q>(self, f: impl Fn(P) -> Q) -> PinStyle<Q> {
        PinStyle {
            head: f(self.head),
            dot: f(self.dot),
            tip_inset: self.tip_inset,
        }
    }
}

/// Location marker: round head at `center`, downward tip, small inner dot.
pub fn map_pin<I: GenericImage>(
    img: &mut I,
    center: (i32, i32),
    size: i32,
    style: &PinStyle<I::Pixel>,
) {
    let (cx, cy) = center;
    let r = size / 2;
    circle(img, center, r, Some(style.head), None);
    fill_polygon(
        img,
        &[
            pt(cx - r + style.tip_inset, cy + r / 2),
            pt(cx, cy + size + r / 2),
            pt(cx + r - style.tip_inset, cy + r / 2),
        ],
        style.head,
    );
    circle(img, center, r / 3, Some(style.dot), None);
}

/// Secondary ring drawn inside the compass ring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InnerRing<P> {
    /// Distance inward from the outer ring.
    pub inset: i32,
    /// Ring color.
    pub color: P,
    /// Ring thickness.
    pub width: i32,
}

/// Dots at the four compass points outside the ring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardinalMarks<P> {
    /// Distance outward from the ring.
    pub offset: i32,
    /// Dot radius.
    pub radius: i32,
    /// Color of the mark matching the indicated direction.
    pub active: P,
    /// Color of the other marks.
    pub idle: P,
}

/// Geometry and colors of a [`compass`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompassStyle<P> {
    /// Ring radius.
    pub radius: i32,
    /// Ring, arrow and dot color.
    pub color: P,
    /// Ring thickness.
    pub ring_width: i32,
    /// Optional inner ring.
    pub inner_ring: Option<InnerRing<P>>,
    /// Arrow length is `radius - arrow_inset`.
    pub arrow_inset: i32,
    /// Arrow line thickness.
    pub arrow_width: i32,
    /// Arrowhead dot radius.
    pub tip_radius: i32,
    /// Center dot radius.
    pub hub_radius: i32,
    /// Optional cardinal marks.
    pub marks: Option<CardinalMarks<P>>,
}

impl<P> CompassStyle<P> {
    /// Plain indicator of diameter `size`: 3px ring, arrow 8px short of it, no extras.
    pub fn simple(size: i32, color: P) -> Self {
        Self {
            radius: size / 2,
            color,
            ring_width: 3,
            inner_ring: None,
            arrow_inset: 8,
            arrow_width: 3,
            tip_radius: 5,
            hub_radius: 4,
            marks: None,
        }
    }

    /// Convert the colors, keeping the geometry.
    pub fn map<Q>(self, f: impl Fn(P) -> Q) -> CompassStyle<Q> {
        CompassStyle {
            radius: self.radius,
            color: f(self.color),
            ring_width: self.ring_width,
            inner_ring: self.inner_ring.map(|r| InnerRing {
                inset: r.inset,
                color: f(r.color),
                width: r.width,
            }),
            arrow_inset: self.arrow_inset,
            arrow_width: self.arrow_width,
            tip_radius: self.tip_radius,
            hub_radius: self.hub_radius,
            marks: self.marks.map(|m| CardinalMarks {
                offset: m.offset,
                radius: m.radius,
                active: f(m.active),
                idle: f(m.idle),
            }),
        }
    }
}

/// Compass indicator pointing toward `direction`.
pub fn compass<I: GenericImage>(
    img: &mut I,
    center: (i32, i32),
    direction: Direction,
    style: &CompassStyle<I::Pixel>,
) {
    let r = style.radius;
    circle(img, center, r, None, Some((style.color, style.ring_width)));
    if let Some(inner) = style.inner_ring {
        circle(img, center, r - inner.inset, None, Some((inner.color, inner.width)));
    }

    let tip = polar(center, r - style.arrow_inset, direction.bearing_degrees());
    draw_line(
        img,
        pt(center.0, center.1),
        pt(tip.0, tip.1),
        style.arrow_width,
        style.color,
    );
    circle(img, tip, style.tip_radius, Some(style.color), None);
    circle(img, center, style.hub_radius, Some(style.color), None);

    if let Some(marks) = style.marks {
        for cardinal in Direction::CARDINALS {
            let at = polar(center, r + marks.offset, cardinal.bearing_degrees());
            let color = if cardinal == direction {
                marks.active
            } else {
                marks.idle
            };
            circle(img, at, marks.radius, Some(color), None);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/shapes.rs"]
mod tests;
