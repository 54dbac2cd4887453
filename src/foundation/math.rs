pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Convert a unit-interval value to an 8-bit channel, rounding to nearest.
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let af = f64::from(a);
    let bf = f64::from(b);
    (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
}

/// Source-over for an alpha-only destination.
pub(crate) fn alpha_over(dst: u8, src: u8) -> u8 {
    let inv = 255u16 - u16::from(src);
    src.saturating_add(mul_div255_u8(u16::from(dst), inv))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
