//! Location card: tinted gradient, building row with lit windows, a compass pointing at the
//! area and a single pin.

use image::{Rgba, RgbImage, RgbaImage};
use rand::RngCore;

use crate::foundation::core::{CanvasSize, Direction, Rgb8, Rgba8};
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::glyphs::building::{Building, BuildingStyle, RoofStyle, WindowGrid, Windows, building};
use crate::glyphs::shapes::{CompassStyle, compass};
use crate::paint::gradient::GradientSpec;
use crate::paint::palette::lerp;
use crate::scene::composer::{Composer, check_name};
use crate::scene::decor::{GridLines, LineTexture, PinSet, RingSet, within};

/// Gradient whose two stops are each pulled toward the card's tint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TintedGradient {
    /// Untinted start color.
    pub from: Rgb8,
    /// Untinted end color.
    pub to: Rgb8,
    /// How far `from` moves toward the tint.
    pub from_mix: f64,
    /// How far `to` moves toward the tint.
    pub to_mix: f64,
    /// Gradient direction in degrees.
    pub angle_deg: f64,
}

impl TintedGradient {
    /// Concrete gradient for one tint.
    pub fn resolve(&self, tint: Rgb8) -> GradientSpec {
        GradientSpec::new(
            lerp(self.from, tint, self.from_mix),
            lerp(self.to, tint, self.to_mix),
            self.angle_deg,
        )
    }
}

/// How the building row is drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BuildingRow {
    /// Distance of the base line above the bottom edge.
    pub base_inset: i32,
    /// Body and roof color.
    pub color: Rgba8,
    /// Roof proportions for buildings that have one.
    pub roof: RoofStyle,
    /// Window grid shared by every building.
    pub windows: WindowGrid,
    /// Window color.
    pub window_color: Rgba8,
}

impl BuildingRow {
    fn style(&self) -> BuildingStyle<Rgba<u8>> {
        BuildingStyle {
            body: self.color.into(),
            roof: self.roof,
            windows: Windows::Grid(self.windows, self.window_color.into()),
        }
    }
}

/// Everything about a card except its name, direction, tint and buildings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardLayout {
    /// Canvas size.
    pub canvas: CanvasSize,
    /// Base gradient before tinting.
    pub gradient: TintedGradient,
    /// Background grid.
    pub grid: GridLines,
    /// Building row rendering.
    pub row: BuildingRow,
    /// Compass center.
    pub compass_at: (i32, i32),
    /// Compass geometry and colors.
    pub compass: CompassStyle<Rgba8>,
    /// Faded decorative circle.
    pub halo: RingSet,
    /// Diagonal texture.
    pub texture: LineTexture,
    /// The card's pin.
    pub pin: PinSet,
}

/// One location card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocationCardScene {
    /// Output file stem.
    pub name: String,
    /// Direction the compass points to.
    pub direction: Direction,
    /// Tint mixed into the base gradient.
    pub tint: Rgb8,
    /// Building row, drawn in order.
    pub buildings: Vec<Building>,
    /// Shared card layout.
    #[serde(default)]
    pub layout: CardLayout,
}

impl LocationCardScene {
    /// Base line of the building row.
    pub fn base_y(&self) -> i32 {
        self.layout.canvas.h() - self.layout.row.base_inset
    }
}

impl Composer for LocationCardScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn canvas(&self) -> CanvasSize {
        self.layout.canvas
    }

    fn validate(&self) -> ForgeResult<()> {
        check_name(&self.name)?;
        self.layout.canvas.validated()?;
        self.layout.grid.validate()?;
        self.layout.texture.validate()?;
        self.layout.pin.validate()?;
        within("building row base inset", self.layout.row.base_inset)?;
        if let Some(b) = self.buildings.iter().find(|b| b.width < 0 || b.height < 0) {
            return Err(ForgeError::configuration(format!(
                "card '{}' has a building with negative extent at x={}",
                self.name, b.x
            )));
        }
        for b in &self.buildings {
            within("building x", b.x)?;
            within("building width", b.width)?;
            within("building height", b.height)?;
        }
        Ok(())
    }

    fn paint_base(&self, base: &mut RgbImage) {
        self.layout.gradient.resolve(self.tint).paint(base);
    }

    fn paint_overlay(&self, overlay: &mut RgbaImage, _rng: &mut dyn RngCore) {
        let layout = &self.layout;
        layout.grid.draw(overlay);

        let base_y = self.base_y();
        let style = layout.row.style();
        for b in &self.buildings {
            building(overlay, b, base_y, &style);
        }

        let compass_style = layout.compass.map(Rgba::<u8>::from);
        compass(overlay, layout.compass_at, self.direction, &compass_style);

        layout.halo.draw(overlay);
        layout.texture.draw(overlay);
        layout.pin.draw(overlay);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/location_card.rs"]
mod tests;
