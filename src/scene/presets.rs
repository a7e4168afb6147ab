//! Layout data for the Bristol asset set.

use crate::foundation::core::{CanvasSize, Direction, Rgb8};
use crate::glyphs::building::{Building, ColumnAlign, RoofRise, RoofStyle, WindowGrid};
use crate::glyphs::plumbing::WrenchGeometry;
use crate::glyphs::shapes::{CardinalMarks, CompassStyle, InnerRing, PinStyle};
use crate::paint::gradient::GradientSpec;
use crate::paint::palette::{
    ACCENT, DEEP_HARBOUR, LIGHT_BLUE, PRIMARY, PRIMARY_DARK, SECONDARY, WHITE, lerp, lighten,
    shade,
};
use crate::scene::decor::{GridLines, LineTexture, PinSet, Ring, RingEcho, RingSet};
use crate::scene::hero_home::{
    DropletField, HeroHomeScene, PipeNetwork, WrenchPlacement, WrenchSet,
};
use crate::scene::hero_locations::{HeroLocationsScene, Skyline, SkylineLot, SuspensionBridge};
use crate::scene::location_card::{BuildingRow, CardLayout, LocationCardScene, TintedGradient};
use crate::scene::plan::BatchPlan;

const fn canvas(width: u32, height: u32) -> CanvasSize {
    CanvasSize { width, height }
}

impl BatchPlan {
    /// The seven published images: two banners and one card per area of Bristol.
    pub fn bristol() -> Self {
        Self {
            hero_home: hero_home(),
            hero_locations: hero_locations(),
            cards: Direction::ALL.into_iter().map(card).collect(),
        }
    }
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self::bristol()
    }
}

fn hero_home() -> HeroHomeScene {
    HeroHomeScene {
        name: "hero-emergency-plumber-bristol".to_string(),
        canvas: canvas(1920, 800),
        gradient: GradientSpec::new(PRIMARY, PRIMARY_DARK, 135.0),
        pipes: PipeNetwork {
            rows: vec![120, 280, 480, 650],
            columns: vec![200, 500, 900, 1300, 1700],
            thickness: 24,
            body: lighten(PRIMARY, 0.08).with_alpha(60),
            highlight: WHITE.with_alpha(15),
            band: (3, 6),
            joint: lighten(PRIMARY, 0.12).with_alpha(70),
            overhang: 8,
        },
        droplets: DropletField {
            count: 25,
            margin: 50,
            size: (15, 35),
            color: LIGHT_BLUE,
            alpha: (30, 70),
        },
        wrenches: WrenchSet {
            geometry: WrenchGeometry::HEAVY,
            placements: vec![
                WrenchPlacement {
                    anchor: (150, 350),
                    scale: 2.5,
                },
                WrenchPlacement {
                    anchor: (1400, 150),
                    scale: 3.0,
                },
                WrenchPlacement {
                    anchor: (800, 550),
                    scale: 2.0,
                },
            ],
            body: WHITE.with_alpha(25),
            jaw: PRIMARY_DARK.with_alpha(40),
        },
        rings: RingSet {
            rings: vec![
                Ring {
                    center: (1600, 200),
                    radius: 180,
                },
                Ring {
                    center: (300, 600),
                    radius: 150,
                },
                Ring {
                    center: (1000, 100),
                    radius: 120,
                },
            ],
            color: LIGHT_BLUE.with_alpha(30),
            width: 2,
            echo: Some(RingEcho {
                inset: 20,
                color: WHITE.with_alpha(20),
                width: 1,
            }),
        },
        texture: LineTexture {
            spacing: 80,
            color: WHITE.with_alpha(8),
        },
    }
}

const SKYLINE: [(i32, i32); 27] = [
    (50, 120),
    (110, 90),
    (160, 150),
    (230, 80),
    (290, 130),
    (350, 170),
    (430, 100),
    (490, 140),
    (560, 110),
    (620, 160),
    (700, 95),
    (760, 180),
    (840, 120),
    (900, 85),
    (960, 145),
    (1030, 130),
    (1100, 170),
    (1180, 100),
    (1240, 155),
    (1320, 90),
    (1380, 140),
    (1450, 115),
    (1520, 165),
    (1600, 95),
    (1680, 130),
    (1750, 110),
    (1830, 145),
];

fn hero_locations() -> HeroLocationsScene {
    HeroLocationsScene {
        name: "hero-locations-bristol".to_string(),
        canvas: canvas(1920, 600),
        gradient: GradientSpec::new(
            lerp(PRIMARY, PRIMARY_DARK, 0.3),
            lerp(PRIMARY_DARK, DEEP_HARBOUR, 0.5),
            150.0,
        ),
        grid: GridLines {
            spacing: 60,
            color: WHITE.with_alpha(12),
        },
        skyline: Skyline {
            base_inset: 20,
            lots: SKYLINE
                .iter()
                .map(|&(x, height)| SkylineLot { x, height })
                .collect(),
            width: (40, 65),
            roof_above: 120,
            roof: RoofStyle {
                rise: RoofRise::Fixed(20),
                overhang: 2,
            },
            color: shade(PRIMARY_DARK, 0.3).with_alpha(50),
        },
        bridge: SuspensionBridge {
            towers: [750, 1150],
            tower_width: 20,
            top: 220,
            foot: 80,
            deck: (100, 90),
            hanger_spacing: 30,
            hanger_foot: 95,
            sag: 40.0,
            cable_step: 3,
            cable_thickness: 2,
            color: lighten(PRIMARY, 0.15).with_alpha(45),
        },
        pins: PinSet {
            positions: vec![(300, 180), (600, 250), (960, 150), (1300, 200), (1650, 170)],
            size: 30,
            style: PinStyle::new(SECONDARY.with_alpha(80), WHITE.with_alpha(80)),
        },
        rings: RingSet {
            rings: [200, 160, 120]
                .into_iter()
                .map(|radius| Ring {
                    center: (960, 300),
                    radius,
                })
                .collect(),
            color: ACCENT.with_alpha(20),
            width: 1,
            echo: None,
        },
        texture: LineTexture {
            spacing: 100,
            color: WHITE.with_alpha(6),
        },
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            canvas: canvas(600, 400),
            gradient: TintedGradient {
                from: PRIMARY,
                to: PRIMARY_DARK,
                from_mix: 0.15,
                to_mix: 0.1,
                angle_deg: 140.0,
            },
            grid: GridLines {
                spacing: 40,
                color: WHITE.with_alpha(10),
            },
            row: BuildingRow {
                base_inset: 15,
                color: shade(PRIMARY_DARK, 0.4).with_alpha(60),
                roof: RoofStyle {
                    rise: RoofRise::Fixed(15),
                    overhang: 2,
                },
                windows: WindowGrid {
                    window_w: 8,
                    window_h: 12,
                    pitch_x: 18,
                    pitch_y: 25,
                    top_inset: 15,
                    side_inset: 8,
                    base_clearance: 0,
                    align: ColumnAlign::FromInset { wall_margin: 5 },
                },
                window_color: ACCENT.with_alpha(35),
            },
            compass_at: (480, 100),
            compass: CompassStyle {
                radius: 45,
                color: ACCENT.with_alpha(100),
                ring_width: 2,
                inner_ring: Some(InnerRing {
                    inset: 8,
                    color: WHITE.with_alpha(40),
                    width: 1,
                }),
                arrow_inset: 12,
                arrow_width: 3,
                tip_radius: 5,
                hub_radius: 4,
                marks: Some(CardinalMarks {
                    offset: 12,
                    radius: 3,
                    active: ACCENT.with_alpha(120),
                    idle: WHITE.with_alpha(50),
                }),
            },
            halo: RingSet {
                rings: vec![Ring {
                    center: (100, 80),
                    radius: 80,
                }],
                color: LIGHT_BLUE.with_alpha(25),
                width: 2,
                echo: None,
            },
            texture: LineTexture {
                spacing: 60,
                color: WHITE.with_alpha(5),
            },
            pin: PinSet {
                positions: vec![(150, 200)],
                size: 25,
                style: PinStyle::new(SECONDARY.with_alpha(90), WHITE.with_alpha(90))
                    .with_tip_inset(4),
            },
        }
    }
}

fn card(direction: Direction) -> LocationCardScene {
    let (tint, buildings) = card_data(direction);
    LocationCardScene {
        name: format!("location-{}-bristol", direction.slug()),
        direction,
        tint,
        buildings,
        layout: CardLayout::default(),
    }
}

fn row(data: &[(i32, i32, i32, bool)]) -> Vec<Building> {
    data.iter()
        .map(|&(x, width, height, roof)| Building::new(x, width, height, roof))
        .collect()
}

fn card_data(direction: Direction) -> (Rgb8, Vec<Building>) {
    match direction {
        // Semi-detached, modern.
        Direction::North => (
            Rgb8::new(40, 120, 160),
            row(&[
                (20, 55, 100, true),
                (90, 50, 80, true),
                (155, 60, 120, false),
                (230, 45, 70, true),
                (290, 55, 95, true),
                (360, 65, 110, false),
                (440, 50, 85, true),
                (505, 55, 100, true),
            ]),
        ),
        // Victorian terraces: narrow, uniform, evenly spaced.
        Direction::South => {
            let heights = [110, 115, 108, 112, 118, 105, 110, 115, 108, 112, 118, 105, 110];
            let buildings = (15..)
                .step_by(45)
                .zip(heights)
                .map(|(x, height)| Building::new(x, 35, height, true))
                .collect();
            (Rgb8::new(80, 90, 130), buildings)
        }
        Direction::East => (
            Rgb8::new(50, 100, 140),
            row(&[
                (10, 60, 90, true),
                (85, 40, 130, false),
                (140, 55, 80, true),
                (210, 70, 110, false),
                (295, 45, 95, true),
                (355, 55, 140, false),
                (425, 50, 75, true),
                (490, 65, 105, true),
                (555, 40, 85, false),
            ]),
        ),
        // Georgian: wide and even.
        Direction::West => (
            Rgb8::new(30, 80, 120),
            row(&[
                (20, 80, 130, true),
                (115, 75, 125, true),
                (205, 85, 135, true),
                (305, 70, 120, true),
                (390, 80, 130, true),
                (485, 75, 125, true),
            ]),
        ),
        // Mixed commercial: flat towers between peaked houses.
        Direction::Central => (
            Rgb8::new(60, 85, 110),
            row(&[
                (10, 50, 160, false),
                (75, 65, 100, true),
                (155, 45, 180, false),
                (215, 70, 90, true),
                (300, 55, 150, false),
                (370, 60, 120, true),
                (445, 80, 170, false),
                (540, 50, 95, true),
            ]),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
