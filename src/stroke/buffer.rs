use crate::foundation::core::{MAX_CANVAS_SIDE, PixelSize, Rect};
use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::foundation::math::{alpha_over, unit_to_u8};
use crate::stroke::model::Stamp;

/// How a stamp's alpha combines with heat already in the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatBlend {
    /// `a + d·(1 − a)`: overlapping dabs build heat and saturate towards opaque.
    #[default]
    SourceOver,
    /// Saturating add.
    Lighter,
    /// The last dab to touch a pixel wins.
    Replace,
}

impl HeatBlend {
    #[inline]
    fn apply(self, dst: u8, src: u8) -> u8 {
        match self {
            Self::SourceOver => alpha_over(dst, src),
            Self::Lighter => dst.saturating_add(src),
            Self::Replace => src,
        }
    }
}

/// Off-screen alpha-only buffer recording cumulative brush heat, in device pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct AccumulationBuffer {
    size: PixelSize,
    scale: f64,
    blend: HeatBlend,
    alpha: Vec<u8>,
}

impl AccumulationBuffer {
    /// `scale` maps logical stamp coordinates to device pixels.
    pub fn new(size: PixelSize, scale: f64, blend: HeatBlend) -> HeatbrushResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(HeatbrushError::validation("buffer scale must be finite and > 0"));
        }
        check_side_limit(size)?;
        Ok(Self {
            size,
            scale,
            blend,
            alpha: vec![0; size.pixel_count()],
        })
    }

    /// Wrap an existing alpha plane (one byte per pixel, row-major).
    pub fn from_alpha(size: PixelSize, alpha: Vec<u8>) -> HeatbrushResult<Self> {
        check_side_limit(size)?;
        if alpha.len() != size.pixel_count() {
            return Err(HeatbrushError::validation(format!(
                "alpha plane expects {} bytes, got {}",
                size.pixel_count(),
                alpha.len()
            )));
        }
        Ok(Self {
            size,
            scale: 1.0,
            blend: HeatBlend::default(),
            alpha,
        })
    }

    /// Buffer dimensions in device pixels.
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Device pixels per logical point.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Blend mode for new dabs.
    pub fn blend(&self) -> HeatBlend {
        self.blend
    }

    /// Row-major heat values.
    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    /// Heat at `(x, y)`; 0 outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.size.width || y >= self.size.height {
            return 0;
        }
        self.alpha[(y as usize) * (self.size.width as usize) + (x as usize)]
    }

    /// True when no pixel holds heat.
    pub fn is_blank(&self) -> bool {
        self.alpha.iter().all(|&a| a == 0)
    }

    /// Zero every pixel.
    pub fn clear(&mut self) {
        self.alpha.fill(0);
    }

    /// Device-pixel rectangle a stamp can touch, clipped to the buffer. `None` if empty.
    pub fn stamp_bounds(&self, stamp: &Stamp) -> Option<Rect> {
        let r = stamp.radius * self.scale;
        if r <= 0.0 || stamp.opacity <= 0.0 {
            return None;
        }
        let cx = stamp.x * self.scale;
        let cy = stamp.y * self.scale;
        let x0 = (cx - r).floor().max(0.0);
        let y0 = (cy - r).floor().max(0.0);
        let x1 = (cx + r).ceil().min(f64::from(self.size.width));
        let y1 = (cy + r).ceil().min(f64::from(self.size.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Rect::new(x0, y0, x1, y1))
    }

    /// Rasterize a soft radial dab: alpha falls linearly from `opacity` at the centre to 0 at
    /// the radius, sampled at pixel centres.
    pub fn stamp(&mut self, stamp: &Stamp) {
        let Some(bounds) = self.stamp_bounds(stamp) else {
            return;
        };
        let r = stamp.radius * self.scale;
        let cx = stamp.x * self.scale;
        let cy = stamp.y * self.scale;
        let opacity = stamp.opacity.clamp(0.0, 1.0);
        let width = self.size.width as usize;

        for y in (bounds.y0 as u32)..(bounds.y1 as u32) {
            let dy = f64::from(y) + 0.5 - cy;
            let row = (y as usize) * width;
            for x in (bounds.x0 as u32)..(bounds.x1 as u32) {
                let dx = f64::from(x) + 0.5 - cx;
                let d = (dx * dx + dy * dy).sqrt();
                if d >= r {
                    continue;
                }
                let src = unit_to_u8(opacity * (1.0 - d / r));
                if src == 0 {
                    continue;
                }
                let px = &mut self.alpha[row + x as usize];
                *px = self.blend.apply(*px, src);
            }
        }
    }
}

fn check_side_limit(size: PixelSize) -> HeatbrushResult<()> {
    if size.width > MAX_CANVAS_SIDE || size.height > MAX_CANVAS_SIDE {
        return Err(HeatbrushError::validation(format!(
            "heat buffer {}x{} exceeds {MAX_CANVAS_SIDE} pixels per side",
            size.width, size.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/buffer.rs"]
mod tests;
