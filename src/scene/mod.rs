//! Scene composers and their layout data.
//!
//! A scene is plain data describing what to draw; [`composer::compose`] turns any scene into
//! an image by painting the gradient base, drawing the overlay and compositing the two.

pub(crate) mod composer;
pub(crate) mod decor;
pub(crate) mod hero_home;
pub(crate) mod hero_locations;
pub(crate) mod location_card;
pub(crate) mod plan;
pub(crate) mod presets;
