//! Approximate NCS to RGB conversion
//!
//! Computes a display RGB triple from a parsed NCS code as a convex
//! combination of a hue color, white and black, weighted by the code's
//! chroma, whiteness and blackness percentages. This is a screen/print
//! preview approximation, not a colorimetric transform against a
//! reference NCS chart.
//!
//! Algorithm tag: `algo-ncs-convex-approximation`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::ncs::FALLBACK_RGB;
use crate::ncs::parse::NcsCode;

/// Two-letter hue blend: `<A><pct><B>` with a 1-2 digit percentage
static BLEND_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([RGBY])(\d{1,2})([RGBY])$").expect("valid regex"));

/// Base colors of the NCS elementary letters, unit RGB.
/// `W` backs the whiteness component and the no-hue case, `S` (svart)
/// backs the blackness component.
fn base_color(letter: char) -> Option<[f32; 3]> {
    match letter {
        'R' => Some([1.0, 0.0, 0.0]),
        'Y' => Some([1.0, 1.0, 0.0]),
        'G' => Some([0.0, 1.0, 0.0]),
        'B' => Some([0.0, 0.0, 1.0]),
        'W' => Some([1.0, 1.0, 1.0]),
        'S' => Some([0.0, 0.0, 0.0]),
        _ => None,
    }
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Linear interpolation between two unit-RGB colors
fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        (1.0 - t) * a[0] + t * b[0],
        (1.0 - t) * a[1] + t * b[1],
        (1.0 - t) * a[2] + t * b[2],
    ]
}

/// Resolve a hue token to a unit-RGB color
///
/// Resolution order:
/// 1. empty or `N` -> white (no chromatic component)
/// 2. exact elementary letter -> its base color
/// 3. `<A><pct><B>` blend -> linear interpolation at pct/100
/// 4. malformed token with stray recognized letters -> mean of their bases
/// 5. anything else -> white
pub fn hue_to_rgb(hue: &str) -> [f32; 3] {
    let hue = hue.trim().to_uppercase();
    if hue.is_empty() || hue == "N" {
        return WHITE;
    }
    if hue.len() == 1 {
        if let Some(color) = hue.chars().next().and_then(base_color) {
            return color;
        }
    }
    if let Some(caps) = BLEND_PATTERN.captures(&hue) {
        let a = caps[1].chars().next().and_then(base_color);
        let b = caps[3].chars().next().and_then(base_color);
        if let (Some(a), Some(b)) = (a, b) {
            // 1-2 digit capture always parses
            let pct: f32 = caps[2].parse().unwrap_or(0.0);
            return mix(a, b, pct / 100.0);
        }
    }

    // Graceful degradation: average whatever recognized letters remain
    let bases: Vec<[f32; 3]> = hue.chars().filter_map(base_color).collect();
    if bases.is_empty() {
        return WHITE;
    }
    let n = bases.len() as f32;
    [
        bases.iter().map(|c| c[0]).sum::<f32>() / n,
        bases.iter().map(|c| c[1]).sum::<f32>() / n,
        bases.iter().map(|c| c[2]).sum::<f32>() / n,
    ]
}

/// Convert an NCS code string to an approximate RGB triple
///
/// Never fails: any code that does not match the canonical pattern maps to
/// the neutral-grey fallback `(200, 200, 200)`.
pub fn ncs_to_rgb(code: &str) -> [u8; 3] {
    let Some(ncs) = NcsCode::parse(code) else {
        return FALLBACK_RGB;
    };
    rgb_from_components(&ncs)
}

/// Compute the RGB approximation from parsed components
///
/// Each channel is an independent convex combination:
/// `chroma * hue + whiteness * white + blackness * black`. Inputs are
/// percentages so the result stays in [0, 1] per channel; the final clamp
/// only guards against out-of-range component sums.
pub fn rgb_from_components(ncs: &NcsCode) -> [u8; 3] {
    let hue_rgb = hue_to_rgb(&ncs.hue);
    let chroma = ncs.chroma as f32 / 100.0;
    let whiteness = ncs.whiteness() as f32 / 100.0;

    let mut out = [0u8; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        // black contributes zero to every channel
        let value = chroma * hue_rgb[i] + whiteness * WHITE[i];
        *slot = (value * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Format an RGB triple as an uppercase `#RRGGBB` hex string
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
