use crate::foundation::core::Rgba8;
use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::foundation::math::lerp_u8;

/// One colour stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Colour at this offset.
    pub color: Rgba8,
}

impl ColorStop {
    /// A stop at `offset`.
    pub const fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// A horizontal linear gradient over the unit interval.
///
/// Stops must be sorted by offset. Positions before the first stop take its colour, positions
/// after the last stop take the last colour.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Validate and build. Stops must be non-empty, within `[0, 1]` and sorted.
    pub fn new(stops: Vec<ColorStop>) -> HeatbrushResult<Self> {
        if stops.is_empty() {
            return Err(HeatbrushError::validation("gradient needs at least one stop"));
        }
        for s in &stops {
            if !s.offset.is_finite() || !(0.0..=1.0).contains(&s.offset) {
                return Err(HeatbrushError::validation(format!(
                    "gradient stop offset {} outside [0, 1]",
                    s.offset
                )));
            }
        }
        if stops.windows(2).any(|w| w[1].offset < w[0].offset) {
            return Err(HeatbrushError::validation(
                "gradient stops must be sorted by offset",
            ));
        }
        Ok(Self { stops })
    }

    /// Built-in stop tables skip validation.
    pub(crate) fn from_sorted(stops: Vec<ColorStop>) -> Self {
        debug_assert!(Self::new(stops.clone()).is_ok());
        Self { stops }
    }

    /// The colour stops, in order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Colour at position `t`, interpolating straight RGBA channels.
    pub fn sample(&self, t: f64) -> Rgba8 {
        let first = self.stops[0];
        if t <= first.offset {
            return first.color;
        }
        for w in self.stops.windows(2) {
            let (a, b) = (w[0], w[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.color;
                }
                let k = (t - a.offset) / span;
                return Rgba8::new(
                    lerp_u8(a.color.r, b.color.r, k),
                    lerp_u8(a.color.g, b.color.g, k),
                    lerp_u8(a.color.b, b.color.b, k),
                    lerp_u8(a.color.a, b.color.a, k),
                );
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// Rasterize into a `width`×1 row of RGBA8 bytes, sampling at pixel centres.
    pub fn rasterize_row(&self, width: u32) -> Vec<u8> {
        let mut row = Vec::with_capacity(width as usize * 4);
        let w = f64::from(width.max(1));
        for x in 0..width {
            let t = (f64::from(x) + 0.5) / w;
            row.extend_from_slice(&self.sample(t).to_array());
        }
        row
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/gradient.rs"]
mod tests;
