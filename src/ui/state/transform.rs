// SPDX-License-Identifier: MPL-2.0
//! Stage transform state: focal-point-preserving zoom, pan, and fit.
//!
//! [`StageTransform`] owns the scale/translate transform for one
//! (stage, plan) attachment. Every mutation is a pure function of the current
//! state plus the supplied [`StageGeometry`], so the whole module is testable
//! without a window. Two invariants hold after every operation:
//!
//! - the scale stays within the configured `[min_scale, max_scale]` range;
//! - on each axis, the plan is centered when it fits the stage and otherwise
//!   clamped so at most `overscroll_margin` pixels can be dragged past an edge.

use crate::config::{
    DEFAULT_OVERSCROLL_MARGIN, DEFAULT_ZOOM_STEP, FIT_SNAP_RATIO, MAGNIFY_SCALE, MAX_SCALE,
    MIN_SCALE,
};
use iced::{Point, Size, Vector};

/// Direction of a step zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Transform descriptor applied to the plan when drawing: translate by `pan`,
/// then scale by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub pan: Vector,
    pub scale: f32,
}

/// Bounds and step sizes for one attachment, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Multiplicative step: a step zooms by `1 ± step`.
    pub step: f32,
    /// Permitted pan excess past each stage edge, in pixels.
    pub overscroll_margin: f32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            step: DEFAULT_ZOOM_STEP,
            overscroll_margin: DEFAULT_OVERSCROLL_MARGIN,
        }
    }
}

impl TransformOptions {
    fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Stage and plan geometry known to the viewer.
///
/// The natural size is `None` until the plan's decode completes; geometry
/// operations are no-ops until both sizes are positive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageGeometry {
    pub stage: Size,
    pub natural: Option<Size>,
}

impl StageGeometry {
    #[must_use]
    pub fn new(stage: Size, natural: Option<Size>) -> Self {
        Self { stage, natural }
    }

    /// Natural plan size, provided both it and the stage are usable.
    #[must_use]
    pub fn plan(&self) -> Option<Size> {
        if self.stage.width <= 0.0 || self.stage.height <= 0.0 {
            return None;
        }
        self.natural
            .filter(|n| n.width > 0.0 && n.height > 0.0)
    }

    /// Geometric center of the stage, the default focal point.
    #[must_use]
    pub fn stage_center(&self) -> Point {
        Point::new(self.stage.width / 2.0, self.stage.height / 2.0)
    }
}

/// Mutable view state for one stage/plan attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTransform {
    scale: f32,
    pan: Vector,
    base_fit: f32,
    options: TransformOptions,
}

impl Default for StageTransform {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}

impl StageTransform {
    #[must_use]
    pub fn new(options: TransformOptions) -> Self {
        Self {
            scale: 1.0,
            pan: Vector::new(0.0, 0.0),
            base_fit: 1.0,
            options,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    /// Scale at which the plan last fit the stage exactly on one axis.
    #[must_use]
    pub fn base_fit(&self) -> f32 {
        self.base_fit
    }

    #[must_use]
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    #[must_use]
    pub fn transform(&self) -> Transform2D {
        Transform2D {
            pan: self.pan,
            scale: self.scale,
        }
    }

    /// Current zoom as a display percentage (fit scale independent).
    #[must_use]
    pub fn zoom_percent(&self) -> f32 {
        self.scale * 100.0
    }

    /// Whether the current scale counts as "at fit" for the magnify toggle.
    #[must_use]
    pub fn is_near_fit(&self) -> bool {
        self.scale <= self.base_fit * FIT_SNAP_RATIO
    }

    /// Fits the whole plan inside the stage and centers it.
    ///
    /// Recomputes `base_fit` from the supplied geometry. Skipped entirely when
    /// the geometry is unusable (plan not decoded, zero-area stage), leaving
    /// the previous transform intact. Returns whether the state changed.
    pub fn fit_to_stage(&mut self, geometry: StageGeometry) -> bool {
        let Some(plan) = geometry.plan() else {
            return false;
        };

        let fit = self
            .options
            .clamp_scale((geometry.stage.width / plan.width).min(geometry.stage.height / plan.height));
        let pan = Vector::new(
            (geometry.stage.width - plan.width * fit) / 2.0,
            (geometry.stage.height - plan.height * fit) / 2.0,
        );

        let changed = self.base_fit != fit
            || self.scale != fit
            || self.pan.x != pan.x
            || self.pan.y != pan.y;
        self.base_fit = fit;
        self.scale = fit;
        self.pan = pan;
        changed
    }

    /// Alias used by explicit reset commands.
    pub fn reset_to_fit(&mut self, geometry: StageGeometry) -> bool {
        self.fit_to_stage(geometry)
    }

    /// Applies a multiplicative scale change anchored at a stage-local point.
    ///
    /// The pixel under `focal` stays visually stationary: with
    /// `k = new_scale / old_scale`, the pan becomes `(1 − k)·focal + k·pan`.
    /// A factor whose clamped result equals the current scale is a no-op, so
    /// callers at a zoom bound do not trigger redundant transform writes.
    pub fn zoom_at(&mut self, geometry: StageGeometry, factor: f32, focal: Point) -> bool {
        if geometry.plan().is_none() {
            return false;
        }

        let next = self.options.clamp_scale(self.scale * factor);
        if next == self.scale {
            return false;
        }

        let k = next / self.scale;
        self.pan = Vector::new(
            (1.0 - k) * focal.x + k * self.pan.x,
            (1.0 - k) * focal.y + k * self.pan.y,
        );
        self.scale = next;
        self.clamp_pan(geometry);
        true
    }

    /// One zoom step toward `direction`, anchored at `center` or, if absent,
    /// the stage's geometric center.
    pub fn step(
        &mut self,
        geometry: StageGeometry,
        direction: ZoomDirection,
        center: Option<Point>,
    ) -> bool {
        let focal = center.unwrap_or_else(|| geometry.stage_center());
        let factor = match direction {
            ZoomDirection::In => 1.0 + self.options.step,
            ZoomDirection::Out => 1.0 - self.options.step,
        };
        self.zoom_at(geometry, factor, focal)
    }

    /// Double-click/double-tap behavior: magnify to 2× anchored at `focal`
    /// when at (or near) the fit scale, otherwise return to the fit scale.
    ///
    /// The return trip also goes through [`Self::zoom_at`]; recentering falls
    /// out of the pan clamp once the plan fits the stage again.
    pub fn toggle_magnify(&mut self, geometry: StageGeometry, focal: Point) -> bool {
        if geometry.plan().is_none() {
            return false;
        }

        let target = if self.is_near_fit() {
            MAGNIFY_SCALE.min(self.options.max_scale)
        } else {
            self.base_fit
        };
        self.zoom_at(geometry, target / self.scale, focal)
    }

    /// Sets the pan outright (drag: anchor pan plus cumulative pointer delta),
    /// then clamps. Returns whether the clamped pan differs from the previous.
    pub fn pan_to(&mut self, geometry: StageGeometry, pan: Vector) -> bool {
        if geometry.plan().is_none() {
            return false;
        }

        let previous = self.pan;
        self.pan = pan;
        self.clamp_pan(geometry);
        self.pan.x != previous.x || self.pan.y != previous.y
    }

    /// Moves the pan by a delta (touch pan), then clamps.
    pub fn pan_by(&mut self, geometry: StageGeometry, delta: Vector) -> bool {
        self.pan_to(
            geometry,
            Vector::new(self.pan.x + delta.x, self.pan.y + delta.y),
        )
    }

    /// Per-axis pan rule: center the plan on any axis where it fits the
    /// stage; otherwise keep the visible content within `overscroll_margin`
    /// of the stage bounds. Idempotent.
    pub fn clamp_pan(&mut self, geometry: StageGeometry) {
        let Some(plan) = geometry.plan() else {
            return;
        };

        let margin = self.options.overscroll_margin;
        self.pan = Vector::new(
            clamp_axis(self.pan.x, plan.width * self.scale, geometry.stage.width, margin),
            clamp_axis(self.pan.y, plan.height * self.scale, geometry.stage.height, margin),
        );
    }
}

fn clamp_axis(pan: f32, scaled: f32, stage: f32, margin: f32) -> f32 {
    if scaled <= stage {
        (stage - scaled) / 2.0
    } else {
        pan.clamp(stage - scaled - margin, margin)
    }
}
