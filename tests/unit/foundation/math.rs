use super::*;

#[test]
fn mix_endpoints_select_one_side() {
    for (a, b) in [(0u8, 255u8), (19, 230), (255, 0), (77, 77)] {
        assert_eq!(mix_div255(a, b, 0), a);
        assert_eq!(mix_div255(a, b, 255), b);
    }
}

#[test]
fn mix_never_overflows() {
    for w in [0u8, 1, 127, 128, 254, 255] {
        assert!(mix_div255(255, 255, w) == 255);
        assert!(mix_div255(0, 0, w) == 0);
    }
}

#[test]
fn lerp_channel_rounds_and_clamps() {
    assert_eq!(lerp_channel(0, 255, 0.5), 128);
    assert_eq!(lerp_channel(10, 20, -3.0), 10);
    assert_eq!(lerp_channel(10, 20, 7.0), 20);
    assert_eq!(lerp_channel(10, 20, f64::NAN), 10);
}

#[test]
fn scaled_truncates_toward_zero() {
    assert_eq!(scaled(-12.0, 2.5), -30);
    assert_eq!(scaled(16.0, 2.5), 40);
    assert_eq!(scaled(-5.0, 0.9), -4);
}
