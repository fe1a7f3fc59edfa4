pub mod preprocessing;
pub mod contours;
pub mod masking;
pub mod steps;

use image::DynamicImage;
use std::path::Path;
use crate::pipeline::{Outcome, Pipeline};

/// Decode an image file into memory
pub fn load_image(path: &Path) -> anyhow::Result<DynamicImage> {
    image::ImageReader::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open image {}: {}", path.display(), e))?
        .with_guessed_format()
        .map_err(|e| anyhow::anyhow!("Failed to read image {}: {}", path.display(), e))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))
}

/// Build the standard isolation pipeline
pub fn build_standard_pipeline(verbose: bool) -> Pipeline {
    use crate::detection::steps::*;
    use std::sync::Arc;

    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Arc::new(GrayscaleStep))
        .add_step(Arc::new(AdaptiveThresholdStep::default()))
        .add_step(Arc::new(LargestContourStep))
        .add_step(Arc::new(MaskCropStep))
}

/// Isolate the largest dark object in `img`
pub fn isolate(img: DynamicImage, verbose: bool) -> anyhow::Result<Outcome> {
    build_standard_pipeline(verbose).isolate(img)
}
