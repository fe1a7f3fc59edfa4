pub mod detection;
pub mod display;
pub mod frames;
pub mod models;
pub mod pipeline;
pub mod rotation;

pub use models::{BoundingBox, Contour, Isolation};
pub use detection::{build_standard_pipeline, isolate, load_image};
pub use display::{Panel, Stage};
pub use frames::{Frame, FrameKind, Frames, RotationDemo};
pub use pipeline::{
    MetadataValue, Outcome, Pipeline, PipelineContext, PipelineData, PipelineStep,
};

#[cfg(feature = "gui")]
pub mod gui;
