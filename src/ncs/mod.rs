//! NCS notation parsing and RGB approximation module
//!
//! This module handles decomposition of Natural Color System codes into
//! blackness/chroma/hue components and their conversion to approximate
//! display RGB values.

pub mod approx;
pub mod parse;

pub use approx::{hue_to_rgb, ncs_to_rgb, rgb_to_hex};
pub use parse::NcsCode;
