// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::ui::viewer::component;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional plan image or plan directory to open on startup.
    pub path: Option<String>,
    /// Session override for the multiplicative zoom step.
    pub zoom_step: Option<f32>,
    /// Session override for the pan overscroll margin, in pixels.
    pub margin: Option<f32>,
}

/// Top-level messages consumed by [`super::App::update`]. The variants
/// forward viewer messages while keeping a single update entrypoint for the
/// keyboard commands.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    NavigateNext,
    NavigatePrevious,
    StepZoomIn,
    StepZoomOut,
    ResetZoom,
    Exit,
}
