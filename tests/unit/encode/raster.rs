use super::*;
use image::Rgb;

fn sample() -> RgbImage {
    RgbImage::from_fn(64, 48, |x, y| Rgb([(x * 4) as u8, (y * 5) as u8, 120]))
}

#[test]
fn webp_output_has_riff_container() {
    let bytes = encode_rgb(&sample(), OutputFormat::Webp, DEFAULT_QUALITY).unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WEBP");
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
}

#[test]
fn jpeg_output_has_soi_marker() {
    let bytes = encode_rgb(&sample(), OutputFormat::Jpeg, DEFAULT_QUALITY).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
}

#[test]
fn encoding_is_deterministic() {
    let a = encode_rgb(&sample(), OutputFormat::Webp, 80).unwrap();
    let b = encode_rgb(&sample(), OutputFormat::Webp, 80).unwrap();
    assert_eq!(a, b);
}

#[test]
fn out_of_range_quality_is_rejected() {
    for q in [0u8, 101, 255] {
        let err = encode_rgb(&sample(), OutputFormat::Webp, q).unwrap_err();
        assert!(matches!(err, ForgeError::Configuration(_)));
    }
}

#[test]
fn extensions_match_format() {
    assert_eq!(OutputFormat::default().extension(), "webp");
    assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
}
