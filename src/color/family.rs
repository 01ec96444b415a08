//! Coarse hue-family classification
//!
//! Maps an RGB triple to one of nine perceptual hue buckets via HSV
//! thresholds. The classifier is total: every RGB triple in [0,255]^3
//! yields exactly one label.
//!
//! Algorithm tag: `algo-hsv-hue-bucketing`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::conversion::rgb_to_hsv;
use crate::constants::classifier;

/// The nine coarse hue families, plus a defensive `Other` bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Violet,
    Magenta,
    /// Achromatic or too dark to classify chromatically
    Grey,
    /// Unreachable given full hue coverage; kept so the contract is total
    Other,
}

impl HueFamily {
    /// Classify an RGB triple into its hue family
    ///
    /// Colors with saturation below 0.05 or value below 0.1 are grey;
    /// everything else is bucketed by hue degree with half-open intervals
    /// and a wrap-around red bucket.
    pub fn classify(rgb: [u8; 3]) -> Self {
        let hsv = rgb_to_hsv(rgb);
        if hsv.saturation < classifier::MIN_SATURATION || hsv.value < classifier::MIN_VALUE {
            return HueFamily::Grey;
        }
        let deg = hsv.hue_deg;
        if deg >= classifier::RED_WRAP_LOW || deg < classifier::RED_HIGH {
            HueFamily::Red
        } else if deg < classifier::ORANGE_HIGH {
            HueFamily::Orange
        } else if deg < classifier::YELLOW_HIGH {
            HueFamily::Yellow
        } else if deg < classifier::GREEN_HIGH {
            HueFamily::Green
        } else if deg < classifier::CYAN_HIGH {
            HueFamily::Cyan
        } else if deg < classifier::BLUE_HIGH {
            HueFamily::Blue
        } else if deg < classifier::VIOLET_HIGH {
            HueFamily::Violet
        } else if deg < classifier::RED_WRAP_LOW {
            HueFamily::Magenta
        } else {
            HueFamily::Other
        }
    }

    /// Lowercase label matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            HueFamily::Red => "red",
            HueFamily::Orange => "orange",
            HueFamily::Yellow => "yellow",
            HueFamily::Green => "green",
            HueFamily::Cyan => "cyan",
            HueFamily::Blue => "blue",
            HueFamily::Violet => "violet",
            HueFamily::Magenta => "magenta",
            HueFamily::Grey => "grey",
            HueFamily::Other => "other",
        }
    }
}

impl fmt::Display for HueFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
