//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Preferences cover the zoom step, the pan overscroll margin, and the stage
//! theme. The transform itself is never persisted; every session starts from a
//! fresh fit.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlanLens";

/// Stage surface theme shown behind the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageTheme {
    /// Follow the system preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl StageTheme {
    /// Resolves `Auto` against the system preference.
    #[must_use]
    pub fn prefers_dark(self) -> bool {
        match self {
            StageTheme::Light => false,
            StageTheme::Dark => true,
            StageTheme::Auto => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Multiplicative zoom step applied by wheel ticks and the +/- controls.
    #[serde(default)]
    pub zoom_step: Option<f32>,
    /// How far the plan may be dragged past a stage edge, in pixels.
    #[serde(default)]
    pub overscroll_margin: Option<f32>,
    #[serde(default)]
    pub theme: Option<StageTheme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            overscroll_margin: Some(DEFAULT_OVERSCROLL_MARGIN),
            theme: Some(StageTheme::Auto),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
