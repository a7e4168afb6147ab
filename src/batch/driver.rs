use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::encode::raster::{DEFAULT_QUALITY, OutputFormat, encode_rgb};
use crate::encode::sink::ImageSink;
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::scene::composer::{Composer, compose};
use crate::scene::plan::BatchPlan;

/// Seed of the published asset set.
pub const DEFAULT_SEED: u64 = 42;

/// Where and how a batch writes its images.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchSettings {
    /// Output directory, created if missing.
    pub out_dir: PathBuf,
    /// Seed of the single RNG shared by every scene of the batch.
    pub seed: u64,
    /// Output container.
    pub format: OutputFormat,
    /// Encoder quality, 1..=100.
    pub quality: u8,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("assets/images"),
            seed: DEFAULT_SEED,
            format: OutputFormat::default(),
            quality: DEFAULT_QUALITY,
        }
    }
}

/// One file produced by a batch.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WrittenImage {
    /// Destination path.
    pub path: PathBuf,
    /// Stored size in bytes.
    pub bytes: u64,
}

impl WrittenImage {
    /// File name component of the path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Outcome of a successful batch, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchReport {
    /// Written files, in the order they were produced.
    pub images: Vec<WrittenImage>,
}

impl BatchReport {
    /// Written files sorted by file name, like a directory listing.
    pub fn listing(&self) -> Vec<&WrittenImage> {
        let mut out: Vec<&WrittenImage> = self.images.iter().collect();
        out.sort_by_key(|img| img.file_name());
        out
    }

    /// Sum of all file sizes.
    pub fn total_bytes(&self) -> u64 {
        self.images.iter().map(|img| img.bytes).sum()
    }
}

/// Compose one scene, encode it and hand it to `sink`.
///
/// Any failure is reported as [`ForgeError::Output`] naming `path`.
#[tracing::instrument(skip(scene, rng, sink), fields(scene = scene.name()))]
pub fn generate(
    path: &Path,
    scene: &dyn Composer,
    rng: &mut dyn RngCore,
    format: OutputFormat,
    quality: u8,
    sink: &mut dyn ImageSink,
) -> ForgeResult<WrittenImage> {
    let bytes =
        produce(path, scene, rng, format, quality, sink).map_err(|e| e.for_output(path))?;
    tracing::info!(path = %path.display(), bytes, "created image");
    Ok(WrittenImage {
        path: path.to_path_buf(),
        bytes,
    })
}

fn produce(
    path: &Path,
    scene: &dyn Composer,
    rng: &mut dyn RngCore,
    format: OutputFormat,
    quality: u8,
    sink: &mut dyn ImageSink,
) -> ForgeResult<u64> {
    let image = compose(scene, rng)?;
    let bytes = encode_rgb(&image, format, quality)?;
    sink.write(path, &bytes)
}

/// Generate every scene of `plan` into `settings.out_dir`.
///
/// The output directory is ensured first, then one RNG seeded from `settings.seed` is threaded
/// through the scenes in plan order. The first failure aborts the batch.
#[tracing::instrument(skip_all, fields(out_dir = %settings.out_dir.display(), seed = settings.seed))]
pub fn run_batch(
    plan: &BatchPlan,
    settings: &BatchSettings,
    sink: &mut dyn ImageSink,
) -> ForgeResult<BatchReport> {
    if !(1..=100).contains(&settings.quality) {
        return Err(ForgeError::configuration(format!(
            "quality must be in 1..=100, got {}",
            settings.quality
        )));
    }
    plan.validate()?;
    sink.ensure_dir(&settings.out_dir)?;

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut report = BatchReport::default();
    for scene in plan.scenes() {
        let path = settings
            .out_dir
            .join(format!("{}.{}", scene.name(), settings.format.extension()));
        let written = generate(
            &path,
            scene,
            &mut rng,
            settings.format,
            settings.quality,
            sink,
        )?;
        report.images.push(written);
    }
    tracing::info!(
        count = report.images.len(),
        total_bytes = report.total_bytes(),
        "batch complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/batch/driver.rs"]
mod tests;
