// SPDX-License-Identifier: MPL-2.0
//! Plan image loading and decoding.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};

/// Image extensions the viewer accepts as floor plans.
const PLAN_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// A decoded floor plan ready for the stage.
#[derive(Debug, Clone)]
pub struct PlanData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl PlanData {
    /// Creates a new `PlanData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Intrinsic pixel dimensions, the stage geometry's natural size.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Checks whether a path looks like a plan image by extension.
#[must_use]
pub fn is_plan_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| PLAN_EXTENSIONS.contains(&ext.as_str()))
}

/// Decodes a plan image from disk.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<PlanData> {
    let decoded = image_rs::open(path.as_ref())?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image(format!(
            "plan has no pixels: {}",
            path.as_ref().display()
        )));
    }

    let pixels = decoded.to_rgba8().into_vec();
    Ok(PlanData::from_rgba(width, height, pixels))
}

/// Decode off the UI thread; the result re-enters the update loop as a
/// `PlanLoaded` message.
pub async fn load_plan_async(path: PathBuf) -> Result<PlanData> {
    tokio::task::spawn_blocking(move || load_plan(&path))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}
