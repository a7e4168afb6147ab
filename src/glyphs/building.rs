use image::GenericImage;

use crate::foundation::core::Rgb8;
use crate::glyphs::shapes::pt;
use crate::paint::palette::{ACCENT, lerp};
use crate::raster::primitives::{IRect, fill_polygon, fill_rect};

/// One building in a row: left edge, footprint and whether it carries a peaked roof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Building {
    /// Left edge.
    pub x: i32,
    /// Body width.
    pub width: i32,
    /// Body height above the base line.
    pub height: i32,
    /// Draw a triangular roof on top.
    #[serde(default)]
    pub roof: bool,
}

impl Building {
    /// Build a descriptor.
    pub const fn new(x: i32, width: i32, height: i32, roof: bool) -> Self {
        Self {
            x,
            width,
            height,
            roof,
        }
    }
}

/// How tall a roof rises above the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofRise {
    /// Fixed number of pixels.
    Fixed(i32),
    /// `height / n` of the building.
    Fraction(i32),
}

/// Roof proportions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoofStyle {
    /// Apex height above the body top.
    pub rise: RoofRise,
    /// How far the eaves stick out past each wall.
    pub overhang: i32,
}

impl RoofStyle {
    fn rise_for(self, b: &Building) -> i32 {
        match self.rise {
            RoofRise::Fixed(px) => px,
            RoofRise::Fraction(n) if n > 0 => b.height / n,
            RoofRise::Fraction(_) => 0,
        }
    }
}

/// Where window columns start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnAlign {
    /// Fit as many columns as the width allows and center the block.
    Centered,
    /// Step from the side inset while the origin stays inside the right inset and the window
    /// ends more than `wall_margin` pixels short of the right wall.
    FromInset {
        /// Minimum gap between a window's right edge and the wall.
        wall_margin: i32,
    },
}

/// Window tiling for a building facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WindowGrid {
    /// Window width (inclusive extent).
    pub window_w: i32,
    /// Window height (inclusive extent).
    pub window_h: i32,
    /// Horizontal distance between window origins.
    pub pitch_x: i32,
    /// Vertical distance between window origins.
    pub pitch_y: i32,
    /// First row offset below the body top.
    pub top_inset: i32,
    /// Horizontal margin inside the walls.
    pub side_inset: i32,
    /// Windows must end strictly above `base_y - base_clearance`.
    pub base_clearance: i32,
    /// Column placement.
    pub align: ColumnAlign,
}

impl WindowGrid {
    /// Grid sized from the building itself; `None` for buildings 20px wide or narrower.
    pub fn proportional(b: &Building) -> Option<Self> {
        if b.width <= 20 {
            return None;
        }
        let window_w = (b.width / 6).max(4);
        let window_h = (b.height / 8).max(6);
        Some(Self {
            window_w,
            window_h,
            pitch_x: window_w + 6,
            pitch_y: window_h + 8,
            top_inset: 15,
            side_inset: 5,
            base_clearance: 5,
            align: ColumnAlign::Centered,
        })
    }

    fn columns(&self, b: &Building) -> Vec<i32> {
        match self.align {
            ColumnAlign::Centered => {
                let inner = b.width.saturating_sub(self.side_inset.saturating_mul(2));
                let cols = (inner / self.pitch_x).max(1);
                let block = cols.saturating_mul(self.pitch_x);
                let x_start = b.x.saturating_add(b.width.saturating_sub(block) / 2);
                std::iter::successors(Some(x_start), |wx| wx.checked_add(self.pitch_x))
                    .take(cols as usize)
                    .collect()
            }
            ColumnAlign::FromInset { wall_margin } => {
                let right = b.x.saturating_add(b.width);
                let stop = right.saturating_sub(self.side_inset);
                let wall = right.saturating_sub(wall_margin);
                let first = b.x.saturating_add(self.side_inset);
                std::iter::successors(Some(first), |wx| wx.checked_add(self.pitch_x))
                    .take_while(|&wx| wx < stop && wx.saturating_add(self.window_w) < wall)
                    .collect()
            }
        }
    }

    fn rows(&self, b: &Building, base_y: i32) -> Vec<i32> {
        let limit = base_y.saturating_sub(self.base_clearance);
        let first = base_y.saturating_sub(b.height).saturating_add(self.top_inset);
        std::iter::successors(Some(first), |wy| wy.checked_add(self.pitch_y))
            .take_while(|&wy| wy.saturating_add(self.window_h) < limit)
            .collect()
    }

    /// Window rectangles for `b` standing on `base_y`, row-major.
    pub fn cells(&self, b: &Building, base_y: i32) -> Vec<IRect> {
        if self.pitch_x <= 0 || self.pitch_y <= 0 || self.window_w < 0 || self.window_h < 0 {
            return Vec::new();
        }
        let cols = self.columns(b);
        self.rows(b, base_y)
            .into_iter()
            .flat_map(|wy| {
                cols.iter().map(move |&wx| {
                    IRect::new(
                        wx,
                        wy,
                        wx.saturating_add(self.window_w),
                        wy.saturating_add(self.window_h),
                    )
                })
            })
            .collect()
    }
}

/// Window treatment of a [`BuildingStyle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Windows<P> {
    /// Plain silhouette.
    None,
    /// [`WindowGrid::proportional`] per building.
    Proportional(P),
    /// The same grid for every building.
    Grid(WindowGrid, P),
}

/// Body color, roof and windows of a [`building`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingStyle<P> {
    /// Body and roof color.
    pub body: P,
    /// Roof proportions, used when [`Building::roof`] is set.
    pub roof: RoofStyle,
    /// Window treatment.
    pub windows: Windows<P>,
}

/// Window color for a body color: tinted 40% toward the accent.
pub fn window_tint(body: Rgb8) -> Rgb8 {
    lerp(body, ACCENT, 0.4)
}

/// Building silhouette standing on `base_y`.
pub fn building<I: GenericImage>(
    img: &mut I,
    b: &Building,
    base_y: i32,
    style: &BuildingStyle<I::Pixel>,
) {
    let top = base_y.saturating_sub(b.height);
    fill_rect(img, IRect::new(b.x, top, b.x.saturating_add(b.width), base_y), style.body);

    if b.roof {
        let rise = style.roof.rise_for(b);
        let o = style.roof.overhang;
        fill_polygon(
            img,
            &[
                pt(b.x.saturating_sub(o), top),
                pt(b.x.saturating_add(b.width / 2), top.saturating_sub(rise)),
                pt(b.x.saturating_add(b.width).saturating_add(o), top),
            ],
            style.body,
        );
    }

    let (grid, color) = match style.windows {
        Windows::None => return,
        Windows::Proportional(color) => match WindowGrid::proportional(b) {
            Some(grid) => (grid, color),
            None => return,
        },
        Windows::Grid(grid, color) => (grid, color),
    };
    for cell in grid.cells(b, base_y) {
        fill_rect(img, cell, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/building.rs"]
mod tests;
