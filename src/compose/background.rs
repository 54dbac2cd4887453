use std::path::Path;

use anyhow::Context;

use crate::foundation::error::HeatbrushResult;

/// A decoded background image, stretched over the output on composition.
#[derive(Clone, Debug)]
pub struct Background {
    image: image::RgbaImage,
}

impl Background {
    /// Wrap an already-decoded image.
    pub fn from_image(image: image::RgbaImage) -> Self {
        Self { image }
    }

    /// Decode encoded image bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> HeatbrushResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode background image")?;
        Ok(Self {
            image: dyn_img.to_rgba8(),
        })
    }

    /// Read and decode an image file.
    pub fn from_path(path: impl AsRef<Path>) -> HeatbrushResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read background image '{}'", path.display()))?;
        Self::from_bytes(&bytes)
    }

    /// Load a background, treating any failure as "no background".
    pub fn load_or_none(path: impl AsRef<Path>) -> Option<Self> {
        match Self::from_path(path.as_ref()) {
            Ok(bg) => Some(bg),
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "background image unavailable; composing without it"
                );
                None
            }
        }
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub(crate) fn image(&self) -> &image::RgbaImage {
        &self.image
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/background.rs"]
mod tests;
