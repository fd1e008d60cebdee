// SPDX-License-Identifier: MPL-2.0
//! Stage and window theming derived from the configured [`StageTheme`].

use crate::config::StageTheme;
use iced::{Color, Theme};

/// Light stage surface behind the plan.
const LIGHT_SURFACE: Color = Color::from_rgb(0.92, 0.92, 0.93);

/// Dark stage surface behind the plan.
const DARK_SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.13);

/// Color of the stage surface the plan floats on.
#[must_use]
pub fn stage_surface_color(theme: StageTheme) -> Color {
    if theme.prefers_dark() {
        DARK_SURFACE
    } else {
        LIGHT_SURFACE
    }
}

/// Window-level Iced theme matching the stage surface.
#[must_use]
pub fn app_theme(theme: StageTheme) -> Theme {
    if theme.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}
