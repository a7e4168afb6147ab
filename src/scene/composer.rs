use image::{RgbImage, RgbaImage};
use rand::RngCore;

use crate::foundation::core::CanvasSize;
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::render::composite::{composite_in_place, new_base, new_overlay};

/// A scene that produces one opaque image from a gradient base and a drawn overlay.
///
/// Implementations hold plain layout data; the drawing stages are split so each can be tested
/// on its own.
pub trait Composer {
    /// File stem of the produced image, e.g. `hero-locations-bristol`.
    fn name(&self) -> &str;

    /// Canvas dimensions.
    fn canvas(&self) -> CanvasSize;

    /// Reject layout data that cannot be drawn.
    fn validate(&self) -> ForgeResult<()> {
        self.canvas().validated().map(|_| ())
    }

    /// Fill the opaque base layer.
    fn paint_base(&self, base: &mut RgbImage);

    /// Draw the decorations onto a fully transparent overlay. All randomness comes from `rng`.
    fn paint_overlay(&self, overlay: &mut RgbaImage, rng: &mut dyn RngCore);
}

/// Validate, paint both layers and composite them into the final image.
#[tracing::instrument(skip(scene, rng), fields(scene = scene.name()))]
pub fn compose(scene: &dyn Composer, rng: &mut dyn RngCore) -> ForgeResult<RgbImage> {
    scene.validate()?;
    let size = scene.canvas();

    let mut base = new_base(size);
    scene.paint_base(&mut base);

    let mut overlay = new_overlay(size);
    scene.paint_overlay(&mut overlay, rng);

    composite_in_place(&mut base, &overlay)?;
    tracing::debug!(width = size.width, height = size.height, "scene composed");
    Ok(base)
}

/// File stems must be non-empty and must not contain path separators or an extension.
pub(crate) fn check_name(name: &str) -> ForgeResult<()> {
    if name.trim().is_empty() {
        return Err(ForgeError::configuration("scene name must be non-empty"));
    }
    if name.contains(['/', '\\', '.']) {
        return Err(ForgeError::configuration(format!(
            "scene name '{name}' must be a bare file stem"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
