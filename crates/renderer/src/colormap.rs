//! Sea-surface-temperature color mapping.
//!
//! Sea samples map onto a linear blue-to-red ramp keyed directly on the raw
//! byte: `(temp, 0, 255 - temp, 255)`. Land samples (above
//! [`LAND_THRESHOLD`]) have no color of their own and show the background.

pub use sst_grid::LAND_THRESHOLD;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// True if the sample marks land or missing data.
#[inline]
pub fn is_land(temp: u8) -> bool {
    temp > LAND_THRESHOLD
}

/// Color for a sea sample, `None` for land.
#[inline]
pub fn sst_color(temp: u8) -> Option<Color> {
    if is_land(temp) {
        None
    } else {
        Some(Color::new(temp, 0, 255 - temp, 255))
    }
}

/// Final RGBA value of an output pixel given its sample and the background
/// pixel underneath it.
#[inline]
pub fn map_pixel(temp: u8, background: [u8; 4]) -> [u8; 4] {
    match sst_color(temp) {
        Some(color) => color.to_array(),
        None => background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(sst_color(0), Some(Color::new(0, 0, 255, 255)));
        assert_eq!(sst_color(200), Some(Color::new(200, 0, 55, 255)));
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_land(200));
        assert!(is_land(201));
        assert_eq!(sst_color(201), None);
    }

    #[test]
    fn test_map_pixel_uses_background_for_land() {
        let bg = [12, 34, 56, 78];
        assert_eq!(map_pixel(255, bg), bg);
        assert_eq!(map_pixel(10, bg), [10, 0, 245, 255]);
    }
}
