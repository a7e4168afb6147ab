//! Home page banner: a translucent pipe network with joints, scattered droplets, wrench
//! watermarks and decorative rings over a primary-colored gradient.

use image::{Rgba, RgbImage, RgbaImage};
use rand::{Rng, RngCore};

use crate::foundation::core::{CanvasSize, Rgb8, Rgba8};
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::glyphs::plumbing::{
    PipeStyle, WrenchGeometry, pipe_elbow, pipe_horizontal, pipe_vertical, wrench,
};
use crate::glyphs::shapes::pt;
use crate::paint::gradient::GradientSpec;
use crate::raster::primitives::{IRect, fill_ellipse, fill_polygon};
use crate::scene::composer::{Composer, check_name};
use crate::scene::decor::{LineTexture, RingSet, positive};

/// Full-width and full-height pipes with a round joint at every crossing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipeNetwork {
    /// Top edges of the horizontal pipes.
    pub rows: Vec<i32>,
    /// Left edges of the vertical pipes.
    pub columns: Vec<i32>,
    /// Pipe thickness.
    pub thickness: i32,
    /// Pipe body color.
    pub body: Rgba8,
    /// Highlight band color.
    pub highlight: Rgba8,
    /// Highlight band offsets across the pipe.
    pub band: (i32, i32),
    /// Joint color.
    pub joint: Rgba8,
    /// How far a joint extends past the pipe on each side.
    pub overhang: i32,
}

impl PipeNetwork {
    /// Horizontal pipes, then vertical pipes, then joints.
    pub fn draw(&self, overlay: &mut RgbaImage) {
        let (w, h) = (overlay.width() as i32, overlay.height() as i32);
        let style: PipeStyle<Rgba<u8>> =
            PipeStyle::new(self.thickness, self.body.into(), self.highlight.into())
                .with_band(self.band.0, self.band.1);

        for &y in &self.rows {
            pipe_horizontal(overlay, (0, y), w, &style);
        }
        for &x in &self.columns {
            pipe_vertical(overlay, (x, 0), h, &style);
        }
        for &x in &self.columns {
            for &y in &self.rows {
                pipe_elbow(overlay, (x, y), self.thickness, self.overhang, self.joint.into());
            }
        }
    }
}

/// Randomly placed translucent teardrops.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DropletField {
    /// Number of droplets.
    pub count: u32,
    /// Minimum distance of a droplet anchor from the canvas edge.
    pub margin: i32,
    /// Inclusive droplet size range.
    pub size: (i32, i32),
    /// Droplet color.
    pub color: Rgb8,
    /// Inclusive alpha range, drawn per droplet.
    pub alpha: (u8, u8),
}

impl DropletField {
    fn validate(&self, canvas: CanvasSize) -> ForgeResult<()> {
        if canvas.w() - self.margin < self.margin || canvas.h() - self.margin < self.margin {
            return Err(ForgeError::configuration(format!(
                "droplet margin {} leaves no room on a {}x{} canvas",
                self.margin, canvas.width, canvas.height
            )));
        }
        if self.size.0 > self.size.1 || self.size.0 < 0 {
            return Err(ForgeError::configuration(format!(
                "droplet size range {:?} is empty",
                self.size
            )));
        }
        if self.alpha.0 > self.alpha.1 {
            return Err(ForgeError::configuration(format!(
                "droplet alpha range {:?} is empty",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Draw `count` droplets. Each droplet consumes four draws from `rng`: x, y, size, alpha.
    pub fn draw(&self, overlay: &mut RgbaImage, rng: &mut dyn RngCore) {
        let (w, h) = (overlay.width() as i32, overlay.height() as i32);
        for _ in 0..self.count {
            let dx = rng.random_range(self.margin..=w - self.margin);
            let dy = rng.random_range(self.margin..=h - self.margin);
            let ds = rng.random_range(self.size.0..=self.size.1);
            let alpha = rng.random_range(self.alpha.0..=self.alpha.1);
            droplet(overlay, (dx, dy), ds, self.color.with_alpha(alpha).into());
        }
    }
}

// Lobe hangs below the anchor, point rises half a size above it.
fn droplet(overlay: &mut RgbaImage, at: (i32, i32), size: i32, color: Rgba<u8>) {
    let (dx, dy) = at;
    let r = size / 2;
    fill_ellipse(overlay, IRect::new(dx - r, dy, dx + r, dy + size), color);
    fill_polygon(
        overlay,
        &[
            pt(dx, dy - size / 2),
            pt(dx - r, dy + r / 2),
            pt(dx + r, dy + r / 2),
        ],
        color,
    );
}

/// Where one wrench watermark sits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WrenchPlacement {
    /// Top-left of the handle.
    pub anchor: (i32, i32),
    /// Scale applied to the geometry.
    pub scale: f64,
}

/// Wrench watermarks sharing one geometry and color pair.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WrenchSet {
    /// Proportions.
    pub geometry: WrenchGeometry,
    /// Placements, drawn in order.
    pub placements: Vec<WrenchPlacement>,
    /// Handle and head color.
    pub body: Rgba8,
    /// Jaw opening color.
    pub jaw: Rgba8,
}

impl WrenchSet {
    /// Draw every wrench.
    pub fn draw(&self, overlay: &mut RgbaImage) {
        for p in &self.placements {
            wrench(
                overlay,
                p.anchor,
                p.scale,
                &self.geometry,
                self.body.into(),
                self.jaw.into(),
            );
        }
    }
}

/// Layout of the home page banner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroHomeScene {
    /// Output file stem.
    pub name: String,
    /// Canvas size.
    pub canvas: CanvasSize,
    /// Base gradient.
    pub gradient: GradientSpec,
    /// Pipe grid.
    pub pipes: PipeNetwork,
    /// Seeded droplets.
    pub droplets: DropletField,
    /// Wrench watermarks.
    pub wrenches: WrenchSet,
    /// Double decorative rings.
    pub rings: RingSet,
    /// Diagonal texture.
    pub texture: LineTexture,
}

impl Composer for HeroHomeScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    fn validate(&self) -> ForgeResult<()> {
        check_name(&self.name)?;
        let canvas = self.canvas.validated()?;
        positive("pipe thickness", self.pipes.thickness)?;
        self.droplets.validate(canvas)?;
        self.texture.validate()
    }

    fn paint_base(&self, base: &mut RgbImage) {
        self.gradient.paint(base);
    }

    fn paint_overlay(&self, overlay: &mut RgbaImage, rng: &mut dyn RngCore) {
        self.pipes.draw(overlay);
        self.droplets.draw(overlay, rng);
        self.wrenches.draw(overlay);
        self.rings.draw(overlay);
        self.texture.draw(overlay);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero_home.rs"]
mod tests;
