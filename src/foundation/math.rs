/// Weighted mix of two channels by an 8-bit weight, rounded once:
/// `(a * (255 - w) + b * w) / 255`.
pub(crate) fn mix_div255(a: u8, b: u8, w: u8) -> u8 {
    let w = u32::from(w);
    let num = u32::from(a) * (255 - w) + u32::from(b) * w;
    ((num + 127) / 255) as u8
}

/// Linear interpolation of one channel, `t` clamped to `[0, 1]`, rounded to nearest.
pub(crate) fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Scale a layout length and truncate toward zero.
pub(crate) fn scaled(v: f64, scale: f64) -> i32 {
    (v * scale).trunc() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
