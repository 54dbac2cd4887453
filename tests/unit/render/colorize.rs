use super::*;
use crate::foundation::core::PixelSize;

#[test]
fn each_pixel_uses_its_alpha_as_index() {
    let heat = AccumulationBuffer::from_alpha(PixelSize::new(4, 1), vec![0, 1, 128, 255]).unwrap();
    let palette = Palette::heat();
    let out = colorize(&heat, &palette).unwrap();

    assert_eq!(&out.data[0..4], &[0, 0, 0, 0]);
    assert_eq!(&out.data[4..8], &palette.lookup(1));
    assert_eq!(&out.data[8..12], &palette.lookup(128));
    assert_eq!(&out.data[12..16], &palette.lookup(255));
}

#[test]
fn colorize_into_overwrites_stale_pixels() {
    let heat = AccumulationBuffer::from_alpha(PixelSize::new(2, 2), vec![0, 0, 0, 200]).unwrap();
    let palette = Palette::heat();
    let mut out = FrameRGBA::filled(PixelSize::new(2, 2), crate::foundation::core::Rgba8::WHITE)
        .unwrap();
    colorize_into(&heat, &palette, &mut out).unwrap();
    assert_eq!(&out.data[0..4], &[0, 0, 0, 0]);
    assert_eq!(&out.data[12..16], &palette.lookup(200));
}

#[test]
fn size_mismatch_is_an_error() {
    let heat = AccumulationBuffer::from_alpha(PixelSize::new(2, 2), vec![0; 4]).unwrap();
    let mut out = FrameRGBA::transparent(PixelSize::new(3, 2)).unwrap();
    let err = colorize_into(&heat, &Palette::heat(), &mut out).unwrap_err();
    assert!(matches!(err, HeatbrushError::Render(_)));
}

#[test]
fn empty_buffer_is_ok() {
    let heat = AccumulationBuffer::from_alpha(PixelSize::new(0, 5), vec![]).unwrap();
    let out = colorize(&heat, &Palette::heat()).unwrap();
    assert!(out.data.is_empty());
}
