//! Site palette and color interpolation.

use crate::foundation::core::Rgb8;
use crate::foundation::math::lerp_channel;

/// `#1a5f7a`
pub const PRIMARY: Rgb8 = Rgb8::new(26, 95, 122);
/// `#134b61`
pub const PRIMARY_DARK: Rgb8 = Rgb8::new(19, 75, 97);
/// `#e63946`
pub const SECONDARY: Rgb8 = Rgb8::new(230, 57, 70);
/// `#f4a261`
pub const ACCENT: Rgb8 = Rgb8::new(244, 162, 97);
/// `#ffffff`
pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
/// `#4fc3f7`
pub const LIGHT_BLUE: Rgb8 = Rgb8::new(79, 195, 247);
/// `#000000`
pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
/// Deep harbour blue the locations banner fades toward.
pub const DEEP_HARBOUR: Rgb8 = Rgb8::new(10, 40, 60);

/// Per-channel linear interpolation: `round(c1 + (c2 - c1) * t)`, `t` clamped to `[0, 1]`.
pub fn lerp(c1: Rgb8, c2: Rgb8, t: f64) -> Rgb8 {
    Rgb8::new(
        lerp_channel(c1.r, c2.r, t),
        lerp_channel(c1.g, c2.g, t),
        lerp_channel(c1.b, c2.b, t),
    )
}

/// Lighten toward white by `t`.
pub fn lighten(c: Rgb8, t: f64) -> Rgb8 {
    lerp(c, WHITE, t)
}

/// Darken toward black by `t`.
pub fn shade(c: Rgb8, t: f64) -> Rgb8 {
    lerp(c, BLACK, t)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/palette.rs"]
mod tests;
