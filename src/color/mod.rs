//! Color conversion and classification module
//!
//! This module handles RGB/HSV conversion and the coarse hue-family
//! classification used for diversification and page grouping.

pub mod conversion;
pub mod family;

pub use conversion::rgb_to_hsv;
pub use family::HueFamily;
