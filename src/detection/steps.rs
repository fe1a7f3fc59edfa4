use crate::pipeline::{PipelineData, PipelineStep, PipelineContext, MetadataValue};
use crate::detection::{preprocessing, contours, masking};
use anyhow::Result;

/// Convert image to grayscale
pub struct GrayscaleStep;

impl PipelineStep for GrayscaleStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let gray = preprocessing::to_grayscale(&item.image);
            result.push(item.with_image(image::DynamicImage::ImageLuma8(gray)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Grayscale Conversion"
    }
}

/// Inverted mean adaptive threshold (dark object on a light background)
pub struct AdaptiveThresholdStep {
    pub block_size: u32,
    pub offset: i32,
}

impl Default for AdaptiveThresholdStep {
    fn default() -> Self {
        Self {
            block_size: preprocessing::BLOCK_SIZE,
            offset: preprocessing::OFFSET,
        }
    }
}

impl PipelineStep for AdaptiveThresholdStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        anyhow::ensure!(
            self.block_size % 2 == 1 && self.block_size > 1,
            "Block size must be odd and greater than 1, got {}",
            self.block_size
        );

        let mut result = Vec::new();
        for item in data {
            let gray = item.image.to_luma8();
            let binary = preprocessing::adaptive_threshold_inv(&gray, self.block_size, self.offset);
            result.push(item.with_image(image::DynamicImage::ImageLuma8(binary)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Adaptive Threshold"
    }
}

/// Keep only the external contour with the largest area.
///
/// An item with no foreground contour is dropped, so the step can end the
/// pipeline with nothing to show.
pub struct LargestContourStep;

impl PipelineStep for LargestContourStep {
    fn process(&self, data: Vec<PipelineData>, context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let binary = item.image.to_luma8();
            let found = contours::find_external_contours(&binary);

            if context.verbose {
                println!("  Found {} external contours", found.len());
            }

            let Some(largest) = contours::largest_contour(&found) else {
                continue;
            };

            if context.verbose {
                let bbox = largest.bounding_box();
                println!("  Largest contour: area={:.1}, points={}, box=({}, {}, {}, {})",
                        largest.area(), largest.len(), bbox.x, bbox.y, bbox.width, bbox.height);
            }

            let mut new_item = item
                .with_metadata("contour_count", MetadataValue::Int(found.len() as i64))
                .with_metadata("contour_area", MetadataValue::Float(largest.area()));
            new_item.contour = Some(largest.clone());
            result.push(new_item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Contour Selection"
    }
}

/// Fill the contour into a mask, crop image and mask to its bounding box and
/// black out everything outside the contour
pub struct MaskCropStep;

impl PipelineStep for MaskCropStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let contour = item.contour.as_ref()
                .ok_or_else(|| anyhow::anyhow!("Missing contour, run Contour Selection first"))?;

            let (width, height) = (item.original.width(), item.original.height());
            let mask = masking::rasterize_contour(contour, width, height);
            let bbox = contour.bounding_box();

            let color = item.original.to_rgb8();
            let image_roi = masking::crop(&color, &bbox);
            let mask_roi = masking::crop(&mask, &bbox);
            let masked = masking::apply_mask(&image_roi, &mask_roi)?;

            let mut new_item = item.with_image(image::DynamicImage::ImageRgb8(masked));
            new_item.bbox = Some(bbox);
            new_item.mask = Some(mask);
            result.push(new_item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Mask and Crop"
    }
}
