use crate::foundation::core::Rgba8;
use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::palette::gradient::{ColorStop, LinearGradient};

/// Number of entries in a heat palette; one per 8-bit intensity.
pub const PALETTE_LEN: usize = 256;

/// Transparent → blue → cyan → green → yellow → orange → red.
pub fn heat_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Rgba8::from_css(0, 0, 0, 0.0)),
        ColorStop::new(0.2, Rgba8::from_css(0, 0, 255, 0.2)),
        ColorStop::new(0.3, Rgba8::from_css(43, 111, 231, 0.3)),
        ColorStop::new(0.4, Rgba8::from_css(2, 192, 241, 0.4)),
        ColorStop::new(0.6, Rgba8::from_css(44, 222, 148, 0.6)),
        ColorStop::new(0.8, Rgba8::from_css(254, 237, 83, 0.8)),
        ColorStop::new(0.9, Rgba8::from_css(255, 118, 50, 0.9)),
        ColorStop::new(1.0, Rgba8::from_css(255, 10, 0, 0.95)),
    ]
}

/// Immutable 256-entry intensity → RGBA lookup table.
///
/// Entry 0 is always fully transparent so that untouched pixels never pick up colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Box<[[u8; 4]; PALETTE_LEN]>,
}

impl Palette {
    /// The default heat palette.
    pub fn heat() -> Self {
        Self::from_gradient(&LinearGradient::from_sorted(heat_stops()))
    }

    /// Rasterize `gradient` into a 256×1 row and read it back as the table.
    pub fn from_gradient(gradient: &LinearGradient) -> Self {
        let row = gradient.rasterize_row(PALETTE_LEN as u32);
        let mut entries = Box::new([[0u8; 4]; PALETTE_LEN]);
        for (dst, px) in entries.iter_mut().zip(row.chunks_exact(4)) {
            dst.copy_from_slice(px);
        }
        entries[0] = [0, 0, 0, 0];
        Self { entries }
    }

    /// Build from raw RGBA bytes (exactly 256 * 4 of them).
    pub fn from_rgba_bytes(bytes: &[u8]) -> HeatbrushResult<Self> {
        if bytes.len() != PALETTE_LEN * 4 {
            return Err(HeatbrushError::validation(format!(
                "palette expects {} bytes, got {}",
                PALETTE_LEN * 4,
                bytes.len()
            )));
        }
        let mut entries = Box::new([[0u8; 4]; PALETTE_LEN]);
        for (dst, px) in entries.iter_mut().zip(bytes.chunks_exact(4)) {
            dst.copy_from_slice(px);
        }
        entries[0] = [0, 0, 0, 0];
        Ok(Self { entries })
    }

    /// RGBA for a heat intensity.
    #[inline]
    pub fn lookup(&self, intensity: u8) -> [u8; 4] {
        self.entries[usize::from(intensity)]
    }

    /// Same as [`Palette::lookup`], as an [`Rgba8`].
    pub fn color(&self, intensity: u8) -> Rgba8 {
        let [r, g, b, a] = self.lookup(intensity);
        Rgba8::new(r, g, b, a)
    }

    /// All 256 entries.
    pub fn entries(&self) -> &[[u8; 4]; PALETTE_LEN] {
        &self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::heat()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/lut.rs"]
mod tests;
