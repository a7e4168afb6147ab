use super::*;

#[test]
fn lerp_endpoints_return_inputs() {
    let samples = [PRIMARY, PRIMARY_DARK, SECONDARY, ACCENT, WHITE, LIGHT_BLUE, BLACK];
    for &a in &samples {
        for &b in &samples {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }
}

#[test]
fn lerp_rounds_to_nearest() {
    // 26 + (255 - 26) * 0.15 = 60.35, 95 + 160 * 0.15 = 119, 122 + 133 * 0.15 = 141.95
    assert_eq!(lighten(PRIMARY, 0.15), Rgb8::new(60, 119, 142));
    assert_eq!(shade(PRIMARY_DARK, 0.3), Rgb8::new(13, 53, 68));
}

#[test]
fn lerp_clamps_out_of_range_t() {
    assert_eq!(lerp(PRIMARY, WHITE, -1.0), PRIMARY);
    assert_eq!(lerp(PRIMARY, WHITE, 2.0), WHITE);
}
