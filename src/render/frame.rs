use crate::foundation::core::{PixelSize, Rgba8};
use crate::foundation::error::{HeatbrushError, HeatbrushResult};

/// A rendered surface as straight (non-premultiplied) RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// A fully transparent frame.
    pub fn transparent(size: PixelSize) -> HeatbrushResult<Self> {
        Ok(Self {
            width: size.width,
            height: size.height,
            data: vec![0; size.rgba_len()?],
        })
    }

    /// A frame filled with `color`.
    pub fn filled(size: PixelSize, color: Rgba8) -> HeatbrushResult<Self> {
        let mut f = Self::transparent(size)?;
        for px in f.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
        Ok(f)
    }

    /// Wrap raw RGBA8 bytes; the length must match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> HeatbrushResult<Self> {
        let expected = PixelSize::new(width, height).rgba_len()?;
        if data.len() != expected {
            return Err(HeatbrushError::render(format!(
                "frame {width}x{height} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame dimensions.
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.data[i..i + 4];
        Some(Rgba8::new(p[0], p[1], p[2], p[3]))
    }

    /// Convert into an `image` buffer without copying.
    pub fn into_image(self) -> HeatbrushResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| HeatbrushError::render("frame buffer does not match its dimensions"))
    }

    /// Take ownership of an `image` buffer.
    pub fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
