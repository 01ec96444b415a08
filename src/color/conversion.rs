//! Color space conversion utilities
//!
//! Thin wrappers over the `palette` crate used by the classifier and the
//! presentation sorts. Hue is reported in positive degrees [0, 360),
//! saturation and value in [0, 1].

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

/// HSV coordinates of a color record, cached for presentation sorting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvCoords {
    /// Hue in degrees, [0, 360)
    pub hue_deg: f32,
    /// Saturation, [0, 1]
    pub saturation: f32,
    /// Value (brightness), [0, 1]
    pub value: f32,
}

/// Convert an RGB triple (0-255 per channel) to HSV coordinates
pub fn rgb_to_hsv(rgb: [u8; 3]) -> HsvCoords {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    let hsv = Hsv::from_color(srgb);
    HsvCoords {
        hue_deg: hsv.hue.into_positive_degrees(),
        saturation: hsv.saturation,
        value: hsv.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        let red = rgb_to_hsv([255, 0, 0]);
        assert!(red.hue_deg.abs() < 0.5);
        assert!((red.saturation - 1.0).abs() < 1e-6);
        assert!((red.value - 1.0).abs() < 1e-6);

        let green = rgb_to_hsv([0, 255, 0]);
        assert!((green.hue_deg - 120.0).abs() < 0.5);

        let blue = rgb_to_hsv([0, 0, 255]);
        assert!((blue.hue_deg - 240.0).abs() < 0.5);
    }

    #[test]
    fn test_achromatic() {
        let grey = rgb_to_hsv([128, 128, 128]);
        assert!(grey.saturation.abs() < 1e-6);

        let black = rgb_to_hsv([0, 0, 0]);
        assert!(black.value.abs() < 1e-6);
    }

    #[test]
    fn test_hue_in_positive_range() {
        for rgb in [[255u8, 0, 128], [10, 200, 30], [0, 0, 0], [255, 255, 255]] {
            let hsv = rgb_to_hsv(rgb);
            assert!((0.0..360.0).contains(&hsv.hue_deg) || hsv.hue_deg == 0.0);
            assert!((0.0..=1.0).contains(&hsv.saturation));
            assert!((0.0..=1.0).contains(&hsv.value));
        }
    }
}
