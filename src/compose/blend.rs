use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::foundation::math::mul_div255_u8;

/// Convert straight RGBA8 to premultiplied RGBA8 in place.
///
/// Layers are premultiplied before any resampling so that transparent texels carry no colour
/// into the filtered edge.
pub fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

/// Premultiplied source-over onto an opaque destination pixel. The result stays opaque.
pub fn over_opaque(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return [src[0], src[1], src[2], 255];
    }
    let inv = 255 - sa;
    let mut out = [0u8, 0, 0, 255];
    for i in 0..3 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Blend the premultiplied `src` over the opaque RGBA8 buffer `dst`, pixel for pixel.
pub fn over_opaque_in_place(dst: &mut [u8], src: &[u8]) -> HeatbrushResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(HeatbrushError::export(
            "over_opaque_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over_opaque([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
