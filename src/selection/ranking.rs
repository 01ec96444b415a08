//! Scoring, filtering and global ranking
//!
//! Annotates every catalog record with its derived color data, scores it
//! against the three prioritized adjectives, applies the strict threshold
//! filter, and sorts by the weighted global score. The sort is stable so
//! that ties keep catalog iteration order and identical requests always
//! yield identical output.
//!
//! Algorithm tag: `algo-weighted-priority-ranking`

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, ColorRecord};
use crate::color::conversion::{rgb_to_hsv, HsvCoords};
use crate::color::HueFamily;
use crate::config::PaletteRequest;
use crate::constants::ranking::{SATURATION_BONUS, WEIGHT_1, WEIGHT_2, WEIGHT_3};
use crate::ncs::{ncs_to_rgb, rgb_to_hex};
use crate::scoring;

/// A catalog record annotated with derived color data and request scores
///
/// Records are never mutated in place; ranking produces a fresh annotated
/// copy of each surviving record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedColor {
    /// The original catalog record
    pub record: ColorRecord,
    /// Approximate display RGB derived from the NCS code
    pub rgb: [u8; 3],
    /// Uppercase `#RRGGBB` form of `rgb`
    pub hex: String,
    /// Coarse hue family of `rgb`
    pub family: HueFamily,
    /// HSV coordinates of `rgb`, used by the presentation sorts
    pub hsv: HsvCoords,
    /// Per-adjective scores in request priority order
    pub scores: [f32; 3],
    /// Priority-weighted combination of the adjective scores
    pub global_score: f32,
}

/// Annotate one record with its derived color data, without scoring
pub fn annotate(record: &ColorRecord) -> ([u8; 3], String, HueFamily, HsvCoords) {
    let rgb = ncs_to_rgb(&record.ncs_code);
    let hex = rgb_to_hex(rgb);
    let family = HueFamily::classify(rgb);
    let hsv = rgb_to_hsv(rgb);
    (rgb, hex, family, hsv)
}

/// Score, filter and rank the catalog for one request
///
/// In strict mode only records with all three scores at or above the
/// threshold survive; an empty result is a defined terminal state, not an
/// error. In loose mode the whole catalog is ranked.
pub fn rank(catalog: &Catalog, request: &PaletteRequest) -> Vec<RankedColor> {
    let [adj1, adj2, adj3] = request.adjectives;

    let mut entries: Vec<RankedColor> = catalog
        .records()
        .iter()
        .filter_map(|record| {
            let scores = [
                scoring::score(record, adj1),
                scoring::score(record, adj2),
                scoring::score(record, adj3),
            ];
            if request.strict && scores.iter().any(|s| *s < request.threshold) {
                return None;
            }
            let (rgb, hex, family, hsv) = annotate(record);
            let global_score = WEIGHT_1 * scores[0]
                + WEIGHT_2 * scores[1]
                + WEIGHT_3 * scores[2]
                + SATURATION_BONUS * (record.saturation_pct / 100.0);
            Some(RankedColor {
                record: record.clone(),
                rgb,
                hex,
                family,
                hsv,
                scores,
                global_score,
            })
        })
        .collect();

    // Stable sort: ties keep catalog iteration order
    entries.sort_by(|a, b| b.global_score.total_cmp(&a.global_score));

    debug!(
        kept = entries.len(),
        total = catalog.len(),
        strict = request.strict,
        threshold = request.threshold,
        "ranking computed"
    );
    entries
}
