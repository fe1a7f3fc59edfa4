#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from pillrot for tests
pub use pillrot::{
    BoundingBox, Contour, Frame, FrameKind, Isolation, Outcome, RotationDemo, Stage,
};
