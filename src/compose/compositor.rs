use std::path::Path;

use image::imageops::{self, FilterType};

use crate::compose::background::Background;
use crate::compose::blend::{over_opaque_in_place, premultiply_in_place};
use crate::compose::bounds::{CropPolicy, crop_region};
use crate::compose::export::{ExportOptions, OutputSize, encode, write_file};
use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::palette::lut::Palette;
use crate::render::colorize::colorize;
use crate::render::frame::FrameRGBA;
use crate::stroke::buffer::AccumulationBuffer;

/// Flattens heat, background and paper into a fixed-resolution raster for save and print.
///
/// Layer order: opaque white, then the optional background stretched to the output, then the
/// colour-mapped heat layer (optionally cropped to its content) stretched to the output and
/// anchored at the origin.
#[derive(Clone, Debug)]
pub struct Compositor {
    palette: Palette,
    crop: Option<CropPolicy>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(Palette::heat())
    }
}

impl Compositor {
    /// A compositor using `palette`, with default cropping.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            crop: Some(CropPolicy::default()),
        }
    }

    /// `None` disables blank-margin cropping.
    pub fn with_crop(mut self, crop: Option<CropPolicy>) -> Self {
        self.crop = crop;
        self
    }

    /// Active crop policy, if any.
    pub fn crop(&self) -> Option<&CropPolicy> {
        self.crop.as_ref()
    }

    /// Flatten paper, `background` and `heat` into an opaque `output`-sized frame.
    #[tracing::instrument(skip(self, heat, background), fields(has_background = background.is_some()))]
    pub fn compose(
        &self,
        heat: &AccumulationBuffer,
        background: Option<&Background>,
        output: OutputSize,
    ) -> HeatbrushResult<FrameRGBA> {
        let output = output.validate()?;
        let (w, h) = (output.width, output.height);

        let mut base = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));

        if let Some(bg) = background {
            let (bw, bh) = bg.dimensions();
            if bw > 0 && bh > 0 {
                let stretched = stretch_premultiplied(bg.image().clone(), w, h);
                over_opaque_in_place(&mut base, &stretched)?;
            }
        }

        if !heat.size().is_empty() {
            let layer = colorize(heat, &self.palette)?;
            let region = self.crop.as_ref().and_then(|p| crop_region(&layer, p));
            let mut layer = layer
                .into_image()
                .map_err(|e| HeatbrushError::export(format!("heat layer readback: {e}")))?;
            if let Some(r) = region {
                layer = imageops::crop_imm(&layer, r.x, r.y, r.width, r.height).to_image();
            }
            let stretched = stretch_premultiplied(layer, w, h);
            over_opaque_in_place(&mut base, &stretched)?;
        }

        Ok(FrameRGBA::from_image(base))
    }

    /// Compose and encode to bytes.
    pub fn export(
        &self,
        heat: &AccumulationBuffer,
        background: Option<&Background>,
        opts: &ExportOptions,
    ) -> HeatbrushResult<Vec<u8>> {
        opts.validate()?;
        let frame = self.compose(heat, background, opts.size)?;
        encode(&frame, opts)
    }

    /// Compose, encode and write to `path`.
    #[tracing::instrument(skip(self, heat, background, opts), fields(path = %path.display()))]
    pub fn export_to_path(
        &self,
        heat: &AccumulationBuffer,
        background: Option<&Background>,
        opts: &ExportOptions,
        path: &Path,
    ) -> HeatbrushResult<()> {
        let bytes = self.export(heat, background, opts)?;
        write_file(path, &bytes)?;
        tracing::info!(bytes = bytes.len(), "exported artwork");
        Ok(())
    }
}

fn stretch_premultiplied(mut layer: image::RgbaImage, w: u32, h: u32) -> image::RgbaImage {
    premultiply_in_place(&mut layer);
    imageops::resize(&layer, w, h, FilterType::Triangle)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
