// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for the numeric bounds used across the viewer.
//!
//! # Categories
//!
//! - **Scale**: zoom factor bounds and the double-tap magnify target
//! - **Step**: multiplicative zoom step bounds
//! - **Pan**: overscroll margin bounds

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Minimum allowed zoom factor.
pub const MIN_SCALE: f32 = 0.2;

/// Maximum allowed zoom factor.
pub const MAX_SCALE: f32 = 4.0;

/// Target zoom factor for the double-click/double-tap magnify toggle.
pub const MAGNIFY_SCALE: f32 = 2.0;

/// Scales within this ratio of the fit scale count as "at fit" when the
/// magnify toggle decides its direction.
pub const FIT_SNAP_RATIO: f32 = 1.05;

// ==========================================================================
// Step Defaults
// ==========================================================================

/// Default multiplicative zoom step (wheel tick, `+`/`-` buttons): 1 ± 0.2.
pub const DEFAULT_ZOOM_STEP: f32 = 0.2;

/// Minimum allowed zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.05;

/// Maximum allowed zoom step. Stays below 1.0 so a zoom-out factor of
/// `1 - step` can never collapse the scale to zero in one tick.
pub const MAX_ZOOM_STEP: f32 = 0.9;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Default overscroll margin in pixels: how far the plan may be dragged past
/// a stage edge before the clamp stops it.
pub const DEFAULT_OVERSCROLL_MARGIN: f32 = 30.0;

/// Minimum overscroll margin.
pub const MIN_OVERSCROLL_MARGIN: f32 = 0.0;

/// Maximum overscroll margin.
pub const MAX_OVERSCROLL_MARGIN: f32 = 120.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(MAGNIFY_SCALE >= MIN_SCALE);
    assert!(MAGNIFY_SCALE <= MAX_SCALE);
    assert!(FIT_SNAP_RATIO >= 1.0);

    // Step validation
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(MAX_ZOOM_STEP < 1.0);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    // Pan validation
    assert!(MIN_OVERSCROLL_MARGIN >= 0.0);
    assert!(MAX_OVERSCROLL_MARGIN >= MIN_OVERSCROLL_MARGIN);
    assert!(DEFAULT_OVERSCROLL_MARGIN >= MIN_OVERSCROLL_MARGIN);
    assert!(DEFAULT_OVERSCROLL_MARGIN <= MAX_OVERSCROLL_MARGIN);
};
