//! Locations page banner: map grid, city skyline, a suspension bridge and scattered pins.

use std::f64::consts::PI;

use image::{Rgba, RgbImage, RgbaImage};
use rand::{Rng, RngCore};

use crate::foundation::core::{CanvasSize, MAX_COORD, Rgba8};
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::glyphs::building::{Building, BuildingStyle, RoofStyle, Windows, building};
use crate::glyphs::shapes::pt;
use crate::paint::gradient::GradientSpec;
use crate::raster::primitives::{IRect, draw_line, fill_rect};
use crate::scene::composer::{Composer, check_name};
use crate::scene::decor::{
    GridLines, LineTexture, PinSet, RingSet, positive, stepped, within,
};

/// One skyline building before its width is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkylineLot {
    /// Left edge.
    pub x: i32,
    /// Body height above the base line.
    pub height: i32,
}

/// Row of silhouettes with randomized widths along the bottom edge.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Skyline {
    /// Distance of the base line above the bottom edge.
    pub base_inset: i32,
    /// Lots, drawn left to right in this order.
    pub lots: Vec<SkylineLot>,
    /// Inclusive width range; one draw per lot.
    pub width: (i32, i32),
    /// Buildings strictly taller than this get a peaked roof.
    pub roof_above: i32,
    /// Roof proportions.
    pub roof: RoofStyle,
    /// Silhouette color.
    pub color: Rgba8,
}

impl Skyline {
    fn validate(&self) -> ForgeResult<()> {
        if self.width.0 > self.width.1 || self.width.0 < 0 {
            return Err(ForgeError::configuration(format!(
                "skyline width range {:?} is empty",
                self.width
            )));
        }
        within("skyline base inset", self.base_inset)?;
        within("skyline width", self.width.1)?;
        for lot in &self.lots {
            within("skyline lot x", lot.x)?;
            within("skyline lot height", lot.height)?;
        }
        Ok(())
    }

    /// Draw every lot. Consumes exactly one width draw from `rng` per lot.
    pub fn draw(&self, overlay: &mut RgbaImage, rng: &mut dyn RngCore) {
        let base_y = overlay.height() as i32 - self.base_inset;
        let style = BuildingStyle {
            body: Rgba::from(self.color),
            roof: self.roof,
            windows: Windows::None,
        };
        for lot in &self.lots {
            let width = rng.random_range(self.width.0..=self.width.1);
            let b = Building::new(lot.x, width, lot.height, lot.height > self.roof_above);
            building(overlay, &b, base_y, &style);
        }
    }
}

/// Two towers, a deck, vertical hangers and a sagging main cable.
///
/// Heights are measured upward from the skyline base line. The span runs from the right edge
/// of the first tower to the left edge of the second.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SuspensionBridge {
    /// Left edges of the two towers.
    pub towers: [i32; 2],
    /// Tower width.
    pub tower_width: i32,
    /// Tower top and cable anchor height.
    pub top: i32,
    /// Tower foot height.
    pub foot: i32,
    /// Deck top and bottom heights.
    pub deck: (i32, i32),
    /// Horizontal distance between hangers.
    pub hanger_spacing: i32,
    /// Height where hangers end.
    pub hanger_foot: i32,
    /// Cable sag at mid-span.
    pub sag: f64,
    /// Horizontal step between cable segments.
    pub cable_step: i32,
    /// Cable segment thickness.
    pub cable_thickness: i32,
    /// Fill color.
    pub color: Rgba8,
}

impl SuspensionBridge {
    fn validate(&self) -> ForgeResult<()> {
        let [t0, t1] = self.towers;
        for (what, v) in [
            ("bridge tower", t0),
            ("bridge tower", t1),
            ("bridge tower width", self.tower_width),
            ("bridge top", self.top),
            ("bridge foot", self.foot),
            ("bridge deck", self.deck.0),
            ("bridge deck", self.deck.1),
            ("bridge hanger foot", self.hanger_foot),
            ("bridge cable thickness", self.cable_thickness),
        ] {
            within(what, v)?;
        }
        if !self.sag.is_finite() || self.sag.abs() > f64::from(MAX_COORD) {
            return Err(ForgeError::configuration(format!(
                "bridge sag {} is out of range",
                self.sag
            )));
        }
        if self.span() <= 0 {
            return Err(ForgeError::configuration(format!(
                "bridge towers {:?} leave no span",
                self.towers
            )));
        }
        positive("hanger spacing", self.hanger_spacing)?;
        positive("cable step", self.cable_step)
    }

    fn span(&self) -> i32 {
        self.towers[1] - (self.towers[0] + self.tower_width)
    }

    /// Cable drop below the anchor height at `offset` pixels into the span.
    pub fn sag_at(&self, offset: i32) -> i32 {
        (self.sag * (PI * f64::from(offset) / f64::from(self.span())).sin()).trunc() as i32
    }

    /// Draw the bridge with its base line at `base_y`.
    pub fn draw(&self, overlay: &mut RgbaImage, base_y: i32) {
        let color: Rgba<u8> = self.color.into();
        let left = self.towers[0] + self.tower_width;
        let right = self.towers[1];
        let anchor = base_y - self.top;

        for tx in self.towers {
            let tower = IRect::new(tx, anchor, tx + self.tower_width, base_y - self.foot);
            fill_rect(overlay, tower, color);
        }
        fill_rect(
            overlay,
            IRect::new(left, base_y - self.deck.0, right, base_y - self.deck.1),
            color,
        );

        for offset in stepped(0, self.span(), self.hanger_spacing) {
            let x = left + offset;
            let top = anchor + self.sag_at(offset);
            draw_line(overlay, pt(x, top), pt(x, base_y - self.hanger_foot), 1, color);
        }
        for x in stepped(left, right, self.cable_step) {
            let y = anchor + self.sag_at(x - left);
            let segment = IRect::new(x, y, x + self.cable_thickness, y + self.cable_thickness);
            fill_rect(overlay, segment, color);
        }
    }
}

/// Layout of the locations page banner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroLocationsScene {
    /// Output file stem.
    pub name: String,
    /// Canvas size.
    pub canvas: CanvasSize,
    /// Base gradient.
    pub gradient: GradientSpec,
    /// Map grid.
    pub grid: GridLines,
    /// Skyline silhouettes.
    pub skyline: Skyline,
    /// Bridge, standing on the skyline base line.
    pub bridge: SuspensionBridge,
    /// Location pins.
    pub pins: PinSet,
    /// Compass-rose rings.
    pub rings: RingSet,
    /// Diagonal texture.
    pub texture: LineTexture,
}

impl Composer for HeroLocationsScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    fn validate(&self) -> ForgeResult<()> {
        check_name(&self.name)?;
        self.canvas.validated()?;
        self.grid.validate()?;
        self.skyline.validate()?;
        self.bridge.validate()?;
        self.pins.validate()?;
        self.texture.validate()
    }

    fn paint_base(&self, base: &mut RgbImage) {
        self.gradient.paint(base);
    }

    fn paint_overlay(&self, overlay: &mut RgbaImage, rng: &mut dyn RngCore) {
        let base_y = overlay.height() as i32 - self.skyline.base_inset;
        self.grid.draw(overlay);
        self.skyline.draw(overlay, rng);
        self.bridge.draw(overlay, base_y);
        self.pins.draw(overlay);
        self.rings.draw(overlay);
        self.texture.draw(overlay);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero_locations.rs"]
mod tests;
