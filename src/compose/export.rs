use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::render::frame::FrameRGBA;

/// Pixels per millimetre used when sizing output for label printers.
pub const PRINT_PX_PER_MM: f64 = 8.0;
/// Largest side an output raster may have.
pub const MAX_OUTPUT_SIDE: u32 = 4096;

/// Device-independent output resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OutputSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl OutputSize {
    /// 810×810 square.
    pub const SQUARE_810: Self = Self::new(810, 810);
    /// 810×1080 portrait.
    pub const PORTRAIT_810: Self = Self::new(810, 1080);
    /// 1400×1867 high-resolution portrait.
    pub const PORTRAIT_1400: Self = Self::new(1400, 1867);

    /// An unchecked size; see [`OutputSize::validate`].
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject empty sizes and sides above [`MAX_OUTPUT_SIDE`].
    pub fn validate(self) -> HeatbrushResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(HeatbrushError::validation("output size must be non-zero"));
        }
        if self.width > MAX_OUTPUT_SIDE || self.height > MAX_OUTPUT_SIDE {
            return Err(HeatbrushError::validation(format!(
                "output size {}x{} exceeds {MAX_OUTPUT_SIDE}px",
                self.width, self.height
            )));
        }
        Ok(self)
    }

    /// Size for a physical print of `width_mm` × `height_mm`, scaled down proportionally if a
    /// side would exceed [`MAX_OUTPUT_SIDE`].
    pub fn from_print_mm(width_mm: f64, height_mm: f64) -> HeatbrushResult<Self> {
        if !(width_mm.is_finite() && height_mm.is_finite()) || width_mm <= 0.0 || height_mm <= 0.0
        {
            return Err(HeatbrushError::validation(
                "print size must be finite and > 0 mm",
            ));
        }
        let mut w = (width_mm * PRINT_PX_PER_MM).round();
        let mut h = (height_mm * PRINT_PX_PER_MM).round();
        let max = f64::from(MAX_OUTPUT_SIDE);
        if w > max || h > max {
            let k = (max / w).min(max / h);
            w = (w * k).floor();
            h = (h * k).floor();
        }
        Self::new(w.max(1.0) as u32, h.max(1.0) as u32).validate()
    }
}

/// Encoded file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Baseline JPEG at [`ExportOptions::quality`].
    #[default]
    Jpeg,
    /// Lossless PNG.
    Png,
}

impl ExportFormat {
    /// Pick a format from a file extension; anything unknown is JPEG.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Self::Png,
            _ => Self::Jpeg,
        }
    }
}

/// Everything needed to turn a composed frame into an encoded file.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportOptions {
    /// Target resolution.
    pub size: OutputSize,
    /// Encoding.
    pub format: ExportFormat,
    /// Lossy quality in `(0, 1]`; ignored for PNG.
    pub quality: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            size: OutputSize::PORTRAIT_810,
            format: ExportFormat::Jpeg,
            quality: 0.9,
        }
    }
}

impl ExportOptions {
    /// Options for quick previews: same size, lower quality.
    pub fn snapshot(size: OutputSize) -> Self {
        Self {
            size,
            format: ExportFormat::Jpeg,
            quality: 0.8,
        }
    }

    /// Check size and quality.
    pub fn validate(&self) -> HeatbrushResult<()> {
        self.size.validate()?;
        if !self.quality.is_finite() || self.quality <= 0.0 || self.quality > 1.0 {
            return Err(HeatbrushError::validation(format!(
                "export quality must be in (0, 1], got {}",
                self.quality
            )));
        }
        Ok(())
    }

    fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

/// Encode `frame` in the requested format.
pub fn encode(frame: &FrameRGBA, opts: &ExportOptions) -> HeatbrushResult<Vec<u8>> {
    opts.validate()?;
    let img = frame.clone().into_image()?;
    let mut buf = Vec::new();
    match opts.format {
        ExportFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, opts.jpeg_quality())
                .encode_image(&rgb)
                .map_err(|e| HeatbrushError::export(format!("encode jpeg: {e}")))?;
        }
        ExportFormat::Png => {
            image::DynamicImage::ImageRgba8(img)
                .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                .map_err(|e| HeatbrushError::export(format!("encode png: {e}")))?;
        }
    }
    Ok(buf)
}

/// Write encoded bytes to `path`, creating parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) -> HeatbrushResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))
            .map_err(|e| HeatbrushError::export(format!("{e:#}")))?;
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("write '{}'", path.display()))
        .map_err(|e| HeatbrushError::export(format!("{e:#}")))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/export.rs"]
mod tests;
