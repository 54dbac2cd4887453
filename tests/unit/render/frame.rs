use super::*;

#[test]
fn filled_and_pixel_access() {
    let f = FrameRGBA::filled(PixelSize::new(3, 2), Rgba8::WHITE).unwrap();
    assert_eq!(f.data.len(), 24);
    assert_eq!(f.pixel(2, 1), Some(Rgba8::WHITE));
    assert_eq!(f.pixel(3, 0), None);
}

#[test]
fn from_raw_checks_len() {
    assert!(FrameRGBA::from_raw(2, 2, vec![0; 15]).is_err());
    let f = FrameRGBA::from_raw(1, 1, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(f.pixel(0, 0), Some(Rgba8::new(1, 2, 3, 4)));
}

#[test]
fn image_conversion_keeps_pixels() {
    let f = FrameRGBA::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let img = f.clone().into_image().unwrap();
    assert_eq!(img.get_pixel(1, 0).0, [5, 6, 7, 8]);
    assert_eq!(FrameRGBA::from_image(img), f);
}
