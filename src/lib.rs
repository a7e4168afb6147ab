//! heroforge procedurally generates the decorative raster images of a local-business website.
//!
//! Every image is a diagonal gradient base with a transparent overlay of simple shapes
//! (pipes, droplets, buildings, pins, a compass) composited on top and encoded to lossy WebP.
//! Output is fully deterministic for a given plan and seed:
//!
//! - Describe the scenes with a [`BatchPlan`] (or use [`BatchPlan::bristol`])
//! - Pick [`BatchSettings`] (output directory, seed, format, quality)
//! - Call [`run_batch`] with an [`ImageSink`] such as [`FsSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod batch;
/// Raster encoding and output sinks.
pub mod encode;
pub(crate) mod glyphs;
pub(crate) mod paint;
pub(crate) mod raster;
pub(crate) mod render;
pub(crate) mod scene;

pub use crate::foundation::core::{CanvasSize, Direction, Rgb8, Rgba8};
pub use crate::foundation::error::{ForgeError, ForgeResult};

pub use crate::paint::gradient::{
    GradientSpec, diagonal_gradient, diagonal_gradient_fast, gradient_t,
};
pub use crate::paint::palette::{
    ACCENT, BLACK, DEEP_HARBOUR, LIGHT_BLUE, PRIMARY, PRIMARY_DARK, SECONDARY, WHITE, lerp,
    lighten, shade,
};
pub use crate::raster::primitives::{
    IRect, draw_line, fill_ellipse, fill_polygon, fill_rect, stroke_ellipse,
};

pub use crate::glyphs::building::{
    Building, BuildingStyle, ColumnAlign, RoofRise, RoofStyle, WindowGrid, Windows, building,
    window_tint,
};
pub use crate::glyphs::plumbing::{
    PipeStyle, WrenchGeometry, default_pipe_color, jaw_shadow, joint_tint, pipe_elbow,
    pipe_horizontal, pipe_vertical, wrench,
};
pub use crate::glyphs::shapes::{
    CardinalMarks, CompassStyle, InnerRing, PinStyle, circle, compass, map_pin, water_drop,
};

pub use crate::render::composite::{
    blend, composite_in_place, composite_overlay, new_base, new_overlay,
};

pub use crate::encode::raster::{DEFAULT_QUALITY, OutputFormat, encode_rgb};
pub use crate::encode::sink::{FsSink, ImageSink, InMemorySink};

pub use crate::scene::composer::{Composer, compose};
pub use crate::scene::decor::{GridLines, LineTexture, PinSet, Ring, RingEcho, RingSet};
pub use crate::scene::hero_home::{
    DropletField, HeroHomeScene, PipeNetwork, WrenchPlacement, WrenchSet,
};
pub use crate::scene::hero_locations::{
    HeroLocationsScene, Skyline, SkylineLot, SuspensionBridge,
};
pub use crate::scene::location_card::{
    BuildingRow, CardLayout, LocationCardScene, TintedGradient,
};
pub use crate::scene::plan::BatchPlan;

pub use crate::batch::driver::{
    BatchReport, BatchSettings, DEFAULT_SEED, WrittenImage, generate, run_batch,
};
