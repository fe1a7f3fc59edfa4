//! The sequence of images shown for an isolated object.
//!
//! Frames are rendered on demand: nothing is rotated until the consumer asks
//! for the next frame, and [`RotationDemo::frames`] can be called again to
//! start over.

use image::DynamicImage;
use std::sync::Arc;
use crate::models::Isolation;
use crate::rotation::{self, ANGLE_STEP};

/// What a frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Filled contour mask over the whole input
    Mask,
    /// Mask cropped to the bounding box
    MaskRoi,
    /// Masked color region
    ImageRoi,
    /// Region rotated on a canvas of unchanged size
    RotatedFixed { angle: u32 },
    /// Region rotated on a canvas grown to fit
    RotatedExpanded { angle: u32 },
}

impl FrameKind {
    /// Name of the window this frame is shown in
    pub fn window(&self) -> &'static str {
        match self {
            FrameKind::Mask => "Mask",
            FrameKind::MaskRoi => "Mask ROI",
            FrameKind::ImageRoi => "Image ROI",
            FrameKind::RotatedFixed { .. } => "Rotated (Fixed Canvas)",
            FrameKind::RotatedExpanded { .. } => "Rotated (Expanded Canvas)",
        }
    }

    /// Rotated frames hold the display until a key is pressed
    pub fn waits_for_key(&self) -> bool {
        matches!(self, FrameKind::RotatedFixed { .. } | FrameKind::RotatedExpanded { .. })
    }

    pub fn angle(&self) -> Option<u32> {
        match self {
            FrameKind::RotatedFixed { angle } | FrameKind::RotatedExpanded { angle } => Some(*angle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub kind: FrameKind,
    pub image: DynamicImage,
}

impl Frame {
    pub fn window(&self) -> &'static str {
        self.kind.window()
    }

    pub fn waits_for_key(&self) -> bool {
        self.kind.waits_for_key()
    }
}

/// Rotation showcase for one isolated object
#[derive(Debug, Clone)]
pub struct RotationDemo {
    isolation: Arc<Isolation>,
    angle_step: u32,
}

impl RotationDemo {
    pub fn new(isolation: Isolation) -> Self {
        Self {
            isolation: Arc::new(isolation),
            angle_step: ANGLE_STEP,
        }
    }

    /// Use a different angle increment (degrees, clamped to at least 1)
    pub fn with_angle_step(mut self, angle_step: u32) -> Self {
        self.angle_step = angle_step.max(1);
        self
    }

    pub fn isolation(&self) -> &Isolation {
        &self.isolation
    }

    /// Every frame kind in display order
    pub fn kinds(&self) -> Vec<FrameKind> {
        let mut kinds = vec![FrameKind::Mask, FrameKind::MaskRoi, FrameKind::ImageRoi];
        kinds.extend(rotation::angles(self.angle_step).map(|angle| FrameKind::RotatedFixed { angle }));
        kinds.extend(rotation::angles(self.angle_step).map(|angle| FrameKind::RotatedExpanded { angle }));
        kinds
    }

    /// A fresh pass over all frames
    pub fn frames(&self) -> Frames {
        Frames {
            isolation: Arc::clone(&self.isolation),
            kinds: self.kinds(),
            cursor: 0,
        }
    }

    /// Render a single frame
    pub fn render(&self, kind: FrameKind) -> Frame {
        render(&self.isolation, kind)
    }
}

fn render(isolation: &Isolation, kind: FrameKind) -> Frame {
    let image = match kind {
        FrameKind::Mask => DynamicImage::ImageLuma8(isolation.mask.clone()),
        FrameKind::MaskRoi => DynamicImage::ImageLuma8(isolation.mask_roi.clone()),
        FrameKind::ImageRoi => DynamicImage::ImageRgb8(isolation.image_roi.clone()),
        FrameKind::RotatedFixed { angle } => {
            DynamicImage::ImageRgb8(rotation::rotate_fixed(&isolation.image_roi, angle as f64))
        }
        FrameKind::RotatedExpanded { angle } => {
            DynamicImage::ImageRgb8(rotation::rotate_bound(&isolation.image_roi, angle as f64))
        }
    };
    Frame { kind, image }
}

/// Lazily rendered frames of a [`RotationDemo`]
#[derive(Debug, Clone)]
pub struct Frames {
    isolation: Arc<Isolation>,
    kinds: Vec<FrameKind>,
    cursor: usize,
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let kind = *self.kinds.get(self.cursor)?;
        self.cursor += 1;
        Some(render(&self.isolation, kind))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.kinds.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames {}
