use super::*;

#[test]
fn heat_palette_endpoints() {
    let p = Palette::heat();
    assert_eq!(p.lookup(0), [0, 0, 0, 0]);

    let hot = p.color(255);
    assert_eq!(hot.r, 255);
    assert!(hot.g <= 20);
    assert!(hot.b <= 2);
    assert!(hot.a >= 235);
}

#[test]
fn heat_palette_alpha_is_non_decreasing() {
    let p = Palette::heat();
    let mut prev = 0u8;
    for (i, e) in p.entries().iter().enumerate() {
        assert!(e[3] >= prev, "alpha dropped at index {i}: {} < {prev}", e[3]);
        prev = e[3];
    }
}

#[test]
fn heat_palette_passes_through_blue_and_yellow() {
    let p = Palette::heat();
    // Sampled near the 0.2 and 0.8 stops.
    let blue = p.color(51);
    assert!(blue.b > 200 && blue.r < 10);
    let yellow = p.color(204);
    assert!(yellow.r > 240 && yellow.g > 220);
}

#[test]
fn from_rgba_bytes_validates_length_and_zeroes_entry0() {
    assert!(Palette::from_rgba_bytes(&[0u8; 10]).is_err());
    let bytes = vec![7u8; PALETTE_LEN * 4];
    let p = Palette::from_rgba_bytes(&bytes).unwrap();
    assert_eq!(p.lookup(0), [0, 0, 0, 0]);
    assert_eq!(p.lookup(1), [7, 7, 7, 7]);
}

#[test]
fn palette_is_deterministic() {
    assert_eq!(Palette::heat(), Palette::heat());
}
