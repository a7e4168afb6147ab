use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;

use crate::foundation::error::{ForgeError, ForgeResult};

/// Quality used for every published asset.
pub const DEFAULT_QUALITY: u8 = 80;

/// Lossy output container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy WebP (libwebp).
    #[default]
    Webp,
    /// Baseline JPEG.
    Jpeg,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// Encode an opaque canvas at `quality` (1..=100).
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn encode_rgb(img: &RgbImage, format: OutputFormat, quality: u8) -> ForgeResult<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(ForgeError::configuration(format!(
            "quality must be in 1..=100, got {quality}"
        )));
    }
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(ForgeError::encoding("cannot encode an empty canvas"));
    }

    match format {
        OutputFormat::Webp => {
            let encoded = webp::Encoder::from_rgb(img.as_raw(), w, h)
                .encode_simple(false, f32::from(quality))
                .map_err(|e| ForgeError::encoding(format!("webp: {e:?}")))?;
            Ok(encoded.to_vec())
        }
        OutputFormat::Jpeg => {
            let mut out = Vec::new();
            JpegEncoder::new_with_quality(&mut out, quality)
                .encode(img.as_raw(), w, h, image::ExtendedColorType::Rgb8)
                .map_err(|e| ForgeError::encoding(format!("jpeg: {e}")))?;
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/raster.rs"]
mod tests;
