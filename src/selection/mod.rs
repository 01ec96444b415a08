//! Selection and ranking module
//!
//! This module combines per-adjective scores into a global ranking,
//! applies the strict multi-adjective filter, and re-interleaves the head
//! of the result across hue families.

pub mod diversify;
pub mod ranking;

pub use diversify::diversify;
pub use ranking::{annotate, rank, RankedColor};
