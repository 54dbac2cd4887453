use super::*;

#[test]
fn transparent_source_keeps_destination() {
    assert_eq!(over_opaque([9, 8, 7, 255], [0, 0, 0, 0]), [9, 8, 7, 255]);
}

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over_opaque([255, 255, 255, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn half_alpha_mixes_with_white_paper() {
    let mut red = [255u8, 0, 0, 128];
    premultiply_in_place(&mut red);
    assert_eq!(red, [128, 0, 0, 128]);
    assert_eq!(over_opaque([255, 255, 255, 255], red), [255, 127, 127, 255]);
}

#[test]
fn premultiply_clears_colour_of_transparent_texels() {
    let mut px = vec![200u8, 100, 50, 0, 10, 20, 30, 255];
    premultiply_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0, 10, 20, 30, 255]);
}

#[test]
fn in_place_checks_lengths() {
    let mut dst = vec![255u8; 8];
    assert!(over_opaque_in_place(&mut dst, &[0u8; 4]).is_err());
    over_opaque_in_place(&mut dst, &[0, 0, 0, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![0, 0, 0, 255, 255, 255, 255, 255]);
}
