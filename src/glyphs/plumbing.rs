use image::{GenericImage, Rgb};

use crate::foundation::core::Rgb8;
use crate::foundation::math::scaled;
use crate::paint::palette::{PRIMARY, PRIMARY_DARK, lighten, shade};
use crate::raster::primitives::{IRect, fill_ellipse, fill_rect};

/// Unscaled proportions of a wrench silhouette, relative to the top-left of the handle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WrenchGeometry {
    /// Handle length along +x.
    pub handle_len: f64,
    /// Handle thickness along +y.
    pub handle_thick: f64,
    /// Head block as `[x0, y0, x1, y1]`.
    pub head: [f64; 4],
    /// Jaw opening as `[x0, y0, x1, y1]`, drawn over the head.
    pub jaw: [f64; 4],
}

impl WrenchGeometry {
    /// Compact open-ended wrench.
    pub const STANDARD: WrenchGeometry = WrenchGeometry {
        handle_len: 80.0,
        handle_thick: 16.0,
        head: [80.0, -12.0, 110.0, 28.0],
        jaw: [88.0, 2.0, 105.0, 14.0],
    };

    /// Longer handle with an overlapping head, used for the large banner watermarks.
    pub const HEAVY: WrenchGeometry = WrenchGeometry {
        handle_len: 100.0,
        handle_thick: 18.0,
        head: [85.0, -14.0, 120.0, 32.0],
        jaw: [92.0, 2.0, 112.0, 16.0],
    };
}

fn scaled_rect(anchor: (i32, i32), r: [f64; 4], s: f64) -> IRect {
    IRect::new(
        anchor.0 + scaled(r[0], s),
        anchor.1 + scaled(r[1], s),
        anchor.0 + scaled(r[2], s),
        anchor.1 + scaled(r[3], s),
    )
}

/// Wrench silhouette anchored at the top-left of its handle.
pub fn wrench<I: GenericImage>(
    img: &mut I,
    anchor: (i32, i32),
    scale: f64,
    geometry: &WrenchGeometry,
    body: I::Pixel,
    jaw: I::Pixel,
) {
    let handle = [0.0, 0.0, geometry.handle_len, geometry.handle_thick];
    fill_rect(img, scaled_rect(anchor, handle, scale), body);
    fill_rect(img, scaled_rect(anchor, geometry.head, scale), body);
    fill_rect(img, scaled_rect(anchor, geometry.jaw, scale), jaw);
}

/// Default jaw-opening color: the dark primary pushed further toward black.
pub fn jaw_shadow() -> Rgb8 {
    shade(PRIMARY_DARK, 0.3)
}

/// Body, highlight and thickness of a pipe segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipeStyle<P> {
    /// Pipe thickness (inclusive extent).
    pub thickness: i32,
    /// Pipe body color.
    pub body: P,
    /// Highlight band color.
    pub highlight: P,
    /// Highlight band as `(start, end)` offsets across the pipe, inclusive.
    pub band: (i32, i32),
}

impl<P> PipeStyle<P> {
    /// Pipe with the standard highlight band 2..=5 pixels in from the leading edge.
    pub fn new(thickness: i32, body: P, highlight: P) -> Self {
        Self {
            thickness,
            body,
            highlight,
            band: (2, 5),
        }
    }

    /// Override the highlight band.
    pub fn with_band(mut self, start: i32, end: i32) -> Self {
        self.band = (start, end);
        self
    }
}

impl PipeStyle<Rgb<u8>> {
    /// Opaque pipe shaded from `base`: highlight is `base` lightened by 30%.
    pub fn shaded(base: Rgb8, thickness: i32) -> Self {
        Self::new(thickness, base.into(), lighten(base, 0.3).into())
    }
}

/// Default pipe color: primary lightened by 15%.
pub fn default_pipe_color() -> Rgb8 {
    lighten(PRIMARY, 0.15)
}

/// Joint color for a pipe: slightly lighter than the pipe itself.
pub fn joint_tint(pipe: Rgb8) -> Rgb8 {
    lighten(pipe, 0.1)
}

/// Horizontal pipe starting at `origin` (top-left), `length` pixels long.
pub fn pipe_horizontal<I: GenericImage>(
    img: &mut I,
    origin: (i32, i32),
    length: i32,
    style: &PipeStyle<I::Pixel>,
) {
    let (x, y) = origin;
    fill_rect(
        img,
        IRect::new(x, y, x + length, y + style.thickness),
        style.body,
    );
    fill_rect(
        img,
        IRect::new(x, y + style.band.0, x + length, y + style.band.1),
        style.highlight,
    );
}

/// Vertical pipe starting at `origin` (top-left), `length` pixels long.
pub fn pipe_vertical<I: GenericImage>(
    img: &mut I,
    origin: (i32, i32),
    length: i32,
    style: &PipeStyle<I::Pixel>,
) {
    let (x, y) = origin;
    fill_rect(
        img,
        IRect::new(x, y, x + style.thickness, y + length),
        style.body,
    );
    fill_rect(
        img,
        IRect::new(x + style.band.0, y, x + style.band.1, y + length),
        style.highlight,
    );
}

/// Round joint over the crossing of two pipes whose top-left corner is `joint`.
///
/// The joint extends `overhang` pixels past the pipe on every side.
pub fn pipe_elbow<I: GenericImage>(
    img: &mut I,
    joint: (i32, i32),
    thickness: i32,
    overhang: i32,
    color: I::Pixel,
) {
    let (x, y) = joint;
    fill_ellipse(
        img,
        IRect::new(
            x - overhang,
            y - overhang,
            x + thickness + overhang,
            y + thickness + overhang,
        ),
        color,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/plumbing.rs"]
mod tests;
