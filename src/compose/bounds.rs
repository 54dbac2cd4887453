use crate::foundation::core::Rgba8;
use crate::render::frame::FrameRGBA;

/// An integer pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Tuning for blank-margin cropping on export.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropPolicy {
    /// Sampling grid step in device pixels.
    pub stride: u32,
    /// A sample whose r, g and b are all at least this is "near white".
    pub near_white_min: u8,
    /// Crop only when content covers strictly less than this fraction of samples.
    pub max_coverage: f64,
    /// Crop only when the content box is strictly smaller than this fraction of each side.
    pub max_extent: f64,
    /// Margin kept around the content box, in device pixels.
    pub padding: u32,
}

impl Default for CropPolicy {
    fn default() -> Self {
        Self {
            stride: 8,
            near_white_min: 240,
            max_coverage: 0.85,
            max_extent: 0.95,
            padding: 16,
        }
    }
}

/// Result of sampling a colour-mapped heat layer on a coarse grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentScan {
    /// Grid samples taken.
    pub samples: usize,
    /// Samples classified as content.
    pub content_samples: usize,
    /// Box covering every content sample's grid cell, unpadded.
    pub bounds: Option<PixelRect>,
}

impl ContentScan {
    /// Fraction of samples that are content; 0 for an empty layer.
    pub fn coverage(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.content_samples as f64 / self.samples as f64
    }
}

fn is_content(px: Rgba8, policy: &CropPolicy) -> bool {
    px.a > 0 && !px.is_near_white(policy.near_white_min)
}

/// Sample `layer` every `policy.stride` pixels in both directions and box the content.
pub fn scan_content(layer: &FrameRGBA, policy: &CropPolicy) -> ContentScan {
    let stride = policy.stride.max(1);
    let mut samples = 0usize;
    let mut content_samples = 0usize;
    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0u32, 0u32);

    for y in (0..layer.height).step_by(stride as usize) {
        for x in (0..layer.width).step_by(stride as usize) {
            samples += 1;
            let Some(px) = layer.pixel(x, y) else {
                continue;
            };
            if !is_content(px, policy) {
                continue;
            }
            content_samples += 1;
            min = (min.0.min(x), min.1.min(y));
            max = (
                max.0.max((x + stride).min(layer.width)),
                max.1.max((y + stride).min(layer.height)),
            );
        }
    }

    let bounds = (content_samples > 0).then(|| PixelRect {
        x: min.0,
        y: min.1,
        width: max.0 - min.0,
        height: max.1 - min.1,
    });
    ContentScan {
        samples,
        content_samples,
        bounds,
    }
}

/// Decide whether to crop `layer`, returning the padded region to keep.
///
/// `None` means "use the full layer": there is no content, the canvas is mostly filled, or the
/// content already spans nearly the whole canvas.
pub fn crop_region(layer: &FrameRGBA, policy: &CropPolicy) -> Option<PixelRect> {
    let scan = scan_content(layer, policy);
    let bounds = scan.bounds?;
    if scan.coverage() >= policy.max_coverage {
        return None;
    }
    let w = f64::from(layer.width);
    let h = f64::from(layer.height);
    if f64::from(bounds.width) >= policy.max_extent * w
        || f64::from(bounds.height) >= policy.max_extent * h
    {
        return None;
    }

    let x0 = bounds.x.saturating_sub(policy.padding);
    let y0 = bounds.y.saturating_sub(policy.padding);
    let x1 = (bounds.x + bounds.width)
        .saturating_add(policy.padding)
        .min(layer.width);
    let y1 = (bounds.y + bounds.height)
        .saturating_add(policy.padding)
        .min(layer.height);
    tracing::debug!(
        coverage = scan.coverage(),
        x = x0,
        y = y0,
        width = x1 - x0,
        height = y1 - y0,
        "cropping blank margins"
    );
    Some(PixelRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/bounds.rs"]
mod tests;
