//! Decoration layers shared by several scenes.

use image::{Rgba, RgbaImage};

use crate::foundation::core::{MAX_COORD, Rgba8};
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::glyphs::shapes::{PinStyle, circle, map_pin, pt};
use crate::raster::primitives::draw_line;

/// Evenly spaced 1px horizontal and vertical lines, map-paper style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridLines {
    /// Distance between lines.
    pub spacing: i32,
    /// Line color.
    pub color: Rgba8,
}

impl GridLines {
    pub(crate) fn validate(&self) -> ForgeResult<()> {
        positive("grid spacing", self.spacing)
    }

    /// Draw the grid across the whole overlay.
    pub fn draw(&self, overlay: &mut RgbaImage) {
        let (w, h) = (overlay.width() as i32, overlay.height() as i32);
        let color: Rgba<u8> = self.color.into();
        for x in stepped(0, w, self.spacing) {
            draw_line(overlay, pt(x, 0), pt(x, h), 1, color);
        }
        for y in stepped(0, h, self.spacing) {
            draw_line(overlay, pt(0, y), pt(w, y), 1, color);
        }
    }
}

/// Parallel 45-degree hairlines covering the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineTexture {
    /// Horizontal distance between lines.
    pub spacing: i32,
    /// Line color.
    pub color: Rgba8,
}

impl LineTexture {
    pub(crate) fn validate(&self) -> ForgeResult<()> {
        positive("texture spacing", self.spacing)
    }

    /// Draw lines from `(i, 0)` to `(i + h, h)` for `i` in `-h..w + h`.
    pub fn draw(&self, overlay: &mut RgbaImage) {
        let (w, h) = (overlay.width() as i32, overlay.height() as i32);
        let color: Rgba<u8> = self.color.into();
        for i in stepped(-h, w + h, self.spacing) {
            draw_line(overlay, pt(i, 0), pt(i + h, h), 1, color);
        }
    }
}

/// Circle outline position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ring {
    /// Center.
    pub center: (i32, i32),
    /// Radius.
    pub radius: i32,
}

/// Second, thinner outline inside each ring of a [`RingSet`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingEcho {
    /// Distance inward from the main ring.
    pub inset: i32,
    /// Outline color.
    pub color: Rgba8,
    /// Outline thickness.
    pub width: i32,
}

/// Decorative circle outlines.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingSet {
    /// Ring positions, drawn in order.
    pub rings: Vec<Ring>,
    /// Outline color.
    pub color: Rgba8,
    /// Outline thickness.
    pub width: i32,
    /// Optional inner echo of every ring.
    #[serde(default)]
    pub echo: Option<RingEcho>,
}

impl RingSet {
    /// Draw every ring (and its echo right after it).
    pub fn draw(&self, overlay: &mut RgbaImage) {
        for ring in &self.rings {
            circle(
                overlay,
                ring.center,
                ring.radius,
                None,
                Some((self.color.into(), self.width)),
            );
            if let Some(echo) = self.echo {
                circle(
                    overlay,
                    ring.center,
                    ring.radius - echo.inset,
                    None,
                    Some((echo.color.into(), echo.width)),
                );
            }
        }
    }
}

/// Map pins sharing one style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinSet {
    /// Head centers.
    pub positions: Vec<(i32, i32)>,
    /// Pin size (head diameter).
    pub size: i32,
    /// Pin colors.
    pub style: PinStyle<Rgba8>,
}

impl PinSet {
    pub(crate) fn validate(&self) -> ForgeResult<()> {
        positive("pin size", self.size)
    }

    /// Draw every pin.
    pub fn draw(&self, overlay: &mut RgbaImage) {
        let style = self.style.map(Rgba::<u8>::from);
        for &at in &self.positions {
            map_pin(overlay, at, self.size, &style);
        }
    }
}

pub(crate) fn positive(what: &str, v: i32) -> ForgeResult<()> {
    if v <= 0 {
        return Err(ForgeError::configuration(format!(
            "{what} must be positive, got {v}"
        )));
    }
    Ok(())
}

pub(crate) fn within(what: &str, v: i32) -> ForgeResult<()> {
    if !(-MAX_COORD..=MAX_COORD).contains(&v) {
        return Err(ForgeError::configuration(format!(
            "{what} {v} is outside -{MAX_COORD}..={MAX_COORD}"
        )));
    }
    Ok(())
}

pub(crate) fn stepped(start: i32, end: i32, step: i32) -> impl Iterator<Item = i32> {
    (start..end).step_by(step.max(1) as usize)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/decor.rs"]
mod tests;
