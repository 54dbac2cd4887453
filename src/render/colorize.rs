use rayon::prelude::*;

use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::palette::lut::Palette;
use crate::render::frame::FrameRGBA;
use crate::stroke::buffer::AccumulationBuffer;

/// Map every pixel's heat through `palette` into `dst`.
///
/// Intensity is used directly as the palette index; zero-heat pixels stay fully transparent.
pub fn colorize_into(
    heat: &AccumulationBuffer,
    palette: &Palette,
    dst: &mut FrameRGBA,
) -> HeatbrushResult<()> {
    let size = heat.size();
    if dst.size() != size {
        return Err(HeatbrushError::render(format!(
            "colorize target is {}x{}, heat buffer is {}x{}",
            dst.width, dst.height, size.width, size.height
        )));
    }
    let width = size.width as usize;
    if width == 0 || size.height == 0 {
        return Ok(());
    }

    dst.data
        .par_chunks_exact_mut(width * 4)
        .zip(heat.alpha().par_chunks_exact(width))
        .for_each(|(out_row, heat_row)| {
            for (px, &a) in out_row.chunks_exact_mut(4).zip(heat_row) {
                let c = if a == 0 { [0; 4] } else { palette.lookup(a) };
                px.copy_from_slice(&c);
            }
        });
    Ok(())
}

/// Allocate a frame and colour-map `heat` into it.
pub fn colorize(heat: &AccumulationBuffer, palette: &Palette) -> HeatbrushResult<FrameRGBA> {
    let mut out = FrameRGBA::transparent(heat.size())?;
    colorize_into(heat, palette, &mut out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/colorize.rs"]
mod tests;
