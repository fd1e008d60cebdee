// SPDX-License-Identifier: MPL-2.0
//! Gesture sub-components owned by the viewer component.
//!
//! Each sub-component follows the State/Message/Effect pattern: the component
//! forwards stage-local events in, and applies the returned effect to the
//! shared [`crate::ui::state::StageTransform`].

pub mod drag;
pub mod pinch;
