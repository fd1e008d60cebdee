// SPDX-License-Identifier: MPL-2.0
//! Viewer state types shared across components.

pub mod pointers;
pub mod transform;

pub use pointers::PointerTracker;
pub use transform::{
    StageGeometry, StageTransform, Transform2D, TransformOptions, ZoomDirection,
};
