use image::{DynamicImage, GrayImage};
use std::sync::Arc;
use std::collections::HashMap;
use anyhow::Result;
use crate::models::{BoundingBox, Contour, Isolation};

/// Data that flows through the pipeline
#[derive(Clone)]
pub struct PipelineData {
    /// The current image (grayscale, binary or color depending on the stage)
    pub image: DynamicImage,

    /// Reference to the decoded input (shared efficiently via Arc)
    pub original: Arc<DynamicImage>,

    /// Region of the original this item covers (None means full image)
    pub bbox: Option<BoundingBox>,

    /// Contour selected for this item, in original image coordinates
    pub contour: Option<Contour>,

    /// Full-size filled mask of `contour`
    pub mask: Option<GrayImage>,

    /// Metadata for tracking properties (e.g. "contour_area", "contour_count")
    pub metadata: HashMap<String, MetadataValue>,
}

/// Metadata value types
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Float(f64),
    Int(i64),
}

impl PipelineData {
    /// Create PipelineData for a full image
    pub fn from_image(image: DynamicImage) -> Self {
        let original = Arc::new(image.clone());
        Self {
            image,
            original,
            bbox: None,
            contour: None,
            mask: None,
            metadata: HashMap::new(),
        }
    }

    /// Same item with a different image
    pub fn with_image(&self, image: DynamicImage) -> Self {
        Self {
            image,
            ..self.clone()
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: MetadataValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Get metadata as float
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get metadata as integer
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Turn a fully processed item into an [`Isolation`].
    ///
    /// Fails if the item has not been through mask and crop.
    pub fn into_isolation(self) -> Result<Isolation> {
        let contour = self.contour
            .ok_or_else(|| anyhow::anyhow!("Missing contour"))?;
        let bbox = self.bbox
            .ok_or_else(|| anyhow::anyhow!("Missing bounding box"))?;
        let mask = self.mask
            .ok_or_else(|| anyhow::anyhow!("Missing mask"))?;
        let mask_roi = crate::detection::masking::crop(&mask, &bbox);
        let image_roi = self.image.to_rgb8();

        anyhow::ensure!(
            image_roi.dimensions() == mask_roi.dimensions(),
            "Image ROI and mask ROI differ in size"
        );

        Ok(Isolation {
            contour,
            bbox,
            mask,
            mask_roi,
            image_roi,
        })
    }
}

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub verbose: bool,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Process data and return transformed data
    /// Steps can filter (one → none) or transform (one → one)
    fn process(&self, data: Vec<PipelineData>, context: &PipelineContext) -> Result<Vec<PipelineData>>;

    /// Human-readable name for this step (used in verbose output)
    fn name(&self) -> &str;
}

/// What a run of the isolation pipeline produced
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The largest foreground object, masked and cropped
    Isolated(Isolation),
    /// No foreground contour was found; nothing further to show
    NoForeground,
}

impl Outcome {
    pub fn is_isolated(&self) -> bool {
        matches!(self, Outcome::Isolated(_))
    }

    pub fn isolation(&self) -> Option<&Isolation> {
        match self {
            Outcome::Isolated(isolation) => Some(isolation),
            Outcome::NoForeground => None,
        }
    }
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run every step sequentially on an input image
    pub fn run(&self, input: DynamicImage) -> Result<Vec<PipelineData>> {
        self.run_partial(input, self.steps.len())
    }

    /// Run the pipeline but stop after `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, input: DynamicImage, num_steps: usize) -> Result<Vec<PipelineData>> {
        let mut data = vec![PipelineData::from_image(input)];

        for (i, step) in self.steps.iter().take(num_steps).enumerate() {
            if self.context.verbose {
                println!("Running step {}: {} (processing {} items)", i + 1, step.name(), data.len());
            }
            data = step.process(data, &self.context)?;
            if self.context.verbose {
                println!("  → {} items", data.len());
            }
            if data.is_empty() {
                break;
            }
        }

        Ok(data)
    }

    /// Run the full pipeline and classify the result
    pub fn isolate(&self, input: DynamicImage) -> Result<Outcome> {
        let mut results = self.run(input)?;
        match results.len() {
            0 => Ok(Outcome::NoForeground),
            1 => Ok(Outcome::Isolated(results.remove(0).into_isolation()?)),
            n => Err(anyhow::anyhow!("Expected a single isolated object, pipeline produced {}", n)),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
