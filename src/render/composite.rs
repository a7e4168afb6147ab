use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::foundation::core::CanvasSize;
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::foundation::math::mix_div255;

/// Opaque black base canvas of the given size.
pub fn new_base(size: CanvasSize) -> RgbImage {
    RgbImage::new(size.width, size.height)
}

/// Fully transparent overlay canvas of the given size.
pub fn new_overlay(size: CanvasSize) -> RgbaImage {
    RgbaImage::from_pixel(size.width, size.height, Rgba([0, 0, 0, 0]))
}

/// Straight-alpha "over" onto an opaque pixel: `base * (1 - a) + over * a`, `a = alpha / 255`.
pub fn blend(base: Rgb<u8>, over: Rgba<u8>) -> Rgb<u8> {
    let a = over[3];
    match a {
        0 => base,
        255 => Rgb([over[0], over[1], over[2]]),
        _ => Rgb([
            mix_div255(base[0], over[0], a),
            mix_div255(base[1], over[1], a),
            mix_div255(base[2], over[2], a),
        ]),
    }
}

/// Blend `overlay` onto `base` in place.
pub fn composite_in_place(base: &mut RgbImage, overlay: &RgbaImage) -> ForgeResult<()> {
    if base.dimensions() != overlay.dimensions() {
        let (bw, bh) = base.dimensions();
        let (ow, oh) = overlay.dimensions();
        return Err(ForgeError::configuration(format!(
            "overlay {ow}x{oh} does not match base {bw}x{bh}"
        )));
    }
    for (dst, src) in base.pixels_mut().zip(overlay.pixels()) {
        *dst = blend(*dst, *src);
    }
    Ok(())
}

/// Blend `overlay` onto a copy of `base`.
pub fn composite_overlay(base: &RgbImage, overlay: &RgbaImage) -> ForgeResult<RgbImage> {
    let mut out = base.clone();
    composite_in_place(&mut out, overlay)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
