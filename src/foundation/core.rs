use crate::foundation::error::{HeatbrushError, HeatbrushResult};

pub use kurbo::{Point, Rect};

/// Largest side, in device pixels, of any heat buffer or live surface.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Logical drawing surface: size in points plus the device pixel ratio.
///
/// Stamps are recorded in logical points so a Strokes-Log replays identically on any density;
/// pixel buffers are allocated in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in logical points.
    pub width: f64,
    /// Height in logical points.
    pub height: f64,
    /// Device pixels per logical point.
    #[serde(default = "unit_scale")]
    pub scale: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl Canvas {
    /// Build a validated canvas; see [`Canvas::validate`].
    pub fn new(width: f64, height: f64, scale: f64) -> HeatbrushResult<Self> {
        let canvas = Self {
            width,
            height,
            scale,
        };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that the canvas is finite and its device size stays within [`MAX_CANVAS_SIDE`].
    pub fn validate(&self) -> HeatbrushResult<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(HeatbrushError::validation(
                "canvas width/height must be finite and >= 0",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(HeatbrushError::validation("canvas scale must be finite and > 0"));
        }
        let max = f64::from(MAX_CANVAS_SIDE);
        if (self.width * self.scale).ceil() > max || (self.height * self.scale).ceil() > max {
            return Err(HeatbrushError::validation(format!(
                "canvas {}x{} at scale {} exceeds {MAX_CANVAS_SIDE} device pixels per side",
                self.width, self.height, self.scale
            )));
        }
        Ok(())
    }

    /// Size of the backing pixel buffer, in device pixels.
    pub fn device_size(self) -> PixelSize {
        PixelSize {
            width: (self.width * self.scale).ceil() as u32,
            height: (self.height * self.scale).ceil() as u32,
        }
    }
}

/// A size in whole device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// A `width`×`height` size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels (saturating).
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub(crate) fn rgba_len(self) -> HeatbrushResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| HeatbrushError::render("rgba buffer size overflow"))
    }
}

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Build from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from CSS-style `rgba(r, g, b, alpha)` where alpha is in `[0, 1]`.
    pub fn from_css(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::new(r, g, b, crate::foundation::math::unit_to_u8(alpha))
    }

    /// `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when r, g and b are all at least `min_channel`.
    pub fn is_near_white(self, min_channel: u8) -> bool {
        self.r >= min_channel && self.g >= min_channel && self.b >= min_channel
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
