//! Tests for the SST color ramp.

use renderer::colormap::{is_land, map_pixel, sst_color, Color, LAND_THRESHOLD};

#[test]
fn test_every_sea_value_maps_to_ramp() {
    for temp in 0..=LAND_THRESHOLD {
        let color = sst_color(temp).expect("sea value should have a color");
        assert_eq!(color, Color::new(temp, 0, 255 - temp, 255), "temp {temp}");
    }
}

#[test]
fn test_every_land_value_has_no_color() {
    for temp in (LAND_THRESHOLD + 1)..=u8::MAX {
        assert!(is_land(temp));
        assert_eq!(sst_color(temp), None, "temp {temp}");
    }
}

#[test]
fn test_land_copies_all_background_channels() {
    let backgrounds = [[0, 0, 0, 255], [255, 255, 255, 0], [12, 200, 7, 99]];
    for bg in backgrounds {
        for temp in [201u8, 230, 255] {
            assert_eq!(map_pixel(temp, bg), bg);
        }
    }
}

#[test]
fn test_sea_ignores_background() {
    assert_eq!(map_pixel(100, [1, 2, 3, 4]), [100, 0, 155, 255]);
}

#[test]
fn test_green_channel_always_zero() {
    for temp in 0..=LAND_THRESHOLD {
        assert_eq!(sst_color(temp).unwrap().g, 0);
    }
}

#[test]
fn test_color_to_array() {
    assert_eq!(Color::new(1, 2, 3, 4).to_array(), [1, 2, 3, 4]);
}
