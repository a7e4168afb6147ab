//! Diagonal linear gradients for the opaque base layer.
//!
//! Two variants exist. [`diagonal_gradient`] projects every pixel onto the gradient direction.
//! [`diagonal_gradient_fast`] evaluates the projection only at the left and right edge of each
//! row and interpolates horizontally between those two colors in 4-pixel blocks. The fast
//! variant loses true diagonal banding away from the row edges; scene composers use it so the
//! published assets keep their established look.

use image::{Rgb, RgbImage};

use crate::foundation::core::Rgb8;
use crate::paint::palette::lerp;

const FAST_BLOCK: u32 = 4;

/// Two-stop diagonal gradient description.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    /// Color at `t = 0`.
    pub from: Rgb8,
    /// Color at `t = 1`.
    pub to: Rgb8,
    /// Direction of increasing `t`, in degrees (0 = +x, 90 = +y).
    pub angle_deg: f64,
}

impl GradientSpec {
    /// Build a gradient description.
    pub fn new(from: Rgb8, to: Rgb8, angle_deg: f64) -> Self {
        Self {
            from,
            to,
            angle_deg,
        }
    }

    /// Fill `canvas` the way scene composers do (row-edge approximation).
    pub fn paint(&self, canvas: &mut RgbImage) {
        diagonal_gradient_fast(canvas, self.from, self.to, self.angle_deg);
    }
}

/// Normalized gradient position of `(x, y)` on a `width` x `height` canvas.
///
/// The point is projected onto `(cos, sin)` of the angle and divided by the largest projection
/// magnitude the canvas allows, then shifted so the canvas origin sits at 0.5. The result is
/// clamped to `[0, 1]`. A degenerate canvas (no projection extent) yields 0.5.
pub fn gradient_t(x: f64, y: f64, width: u32, height: u32, angle_deg: f64) -> f64 {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    let max_d = (f64::from(width) * cos_a).abs() + (f64::from(height) * sin_a).abs();
    if max_d <= f64::EPSILON {
        return 0.5;
    }
    ((x * cos_a + y * sin_a) / max_d + 0.5).clamp(0.0, 1.0)
}

/// Exact per-pixel diagonal gradient.
pub fn diagonal_gradient(canvas: &mut RgbImage, from: Rgb8, to: Rgb8, angle_deg: f64) {
    let (w, h) = canvas.dimensions();
    for (x, y, px) in canvas.enumerate_pixels_mut() {
        let t = gradient_t(f64::from(x), f64::from(y), w, h, angle_deg);
        *px = lerp(from, to, t).into();
    }
}

/// Row-edge approximation of [`diagonal_gradient`].
///
/// Output differs from the exact variant away from the row edges; keep it as-is so regenerated
/// assets stay pixel-identical to the published ones.
pub fn diagonal_gradient_fast(canvas: &mut RgbImage, from: Rgb8, to: Rgb8, angle_deg: f64) {
    let (w, h) = canvas.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    for y in 0..h {
        let yf = f64::from(y);
        let left = lerp(from, to, gradient_t(0.0, yf, w, h, angle_deg));
        let right = lerp(from, to, gradient_t(f64::from(w), yf, w, h, angle_deg));
        for x0 in (0..w).step_by(FAST_BLOCK as usize) {
            let c: Rgb<u8> = lerp(left, right, f64::from(x0) / f64::from(w)).into();
            for x in x0..(x0 + FAST_BLOCK).min(w) {
                canvas.put_pixel(x, y, c);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/gradient.rs"]
mod tests;
