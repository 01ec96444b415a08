//! # Nuancier NCS
//!
//! A Rust crate for matching NCS (Natural Color System) colors against
//! descriptive adjectives and composing ranked, family-balanced palettes.
//!
//! This library provides the full palette engine:
//! - Parsing NCS codes and approximating display RGB values
//! - Classifying colors into coarse hue families
//! - Scoring a catalog against three prioritized adjectives
//! - Strict-threshold filtering and weighted global ranking
//! - Round-robin diversification across hue families
//! - Family-grouped ordering for grid display and document export
//!
//! The conversion is a deliberate screen/print approximation, not a
//! colorimetric transform against a reference NCS chart.
//!
//! ## Example
//!
//! ```
//! use nuancier_ncs::{compose_palette, Adjective, Catalog, ColorRecord, PaletteRequest};
//!
//! let catalog = Catalog::from_records(vec![ColorRecord {
//!     ncs_code: "S1040-Y30R".to_string(),
//!     name: "Abricot doux".to_string(),
//!     blackness_pct: 10.0,
//!     saturation_pct: 40.0,
//!     hue_code: "Y30R".to_string(),
//!     temperature: "chaud".to_string(),
//!     clarity: "clair".to_string(),
//!     luminosity: "lumineux".to_string(),
//!     is_neutral: false,
//! }]);
//!
//! let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux);
//! let palette = compose_palette(&catalog, &request)?;
//! assert_eq!(palette.entries.len(), 1);
//! println!("{} -> {}", palette.entries[0].record.name, palette.entries[0].hex);
//! # Ok::<(), nuancier_ncs::PaletteError>(())
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod ncs;
pub mod present;
pub mod scoring;
pub mod selection;

pub use catalog::{Catalog, ColorRecord};
pub use color::HueFamily;
pub use config::PaletteRequest;
pub use error::{PaletteError, Result};
pub use ncs::{ncs_to_rgb, rgb_to_hex, NcsCode};
pub use present::{document_plan, grid_pages, presentation_order, DocumentPlan};
pub use scoring::Adjective;
pub use selection::{diversify, rank, RankedColor};

/// A composed palette: the diversified ranking for one request
#[derive(Debug, Clone)]
pub struct Palette {
    /// Final ordering: diversified head followed by the score-ordered tail
    pub entries: Vec<RankedColor>,
    /// The threshold the entries were filtered with
    pub threshold: f32,
    /// Whether strict filtering was applied
    pub strict: bool,
}

impl Palette {
    /// True when strict filtering eliminated every record
    ///
    /// This is a defined terminal state for the request; callers should
    /// offer the user a way to relax the threshold or adjectives.
    pub fn no_matches(&self) -> bool {
        self.entries.is_empty()
    }

    /// User-facing hint displayed when no color passes the strict filter
    pub fn no_match_message(&self) -> &'static str {
        "Aucune couleur ne dépasse le seuil fixé pour les trois adjectifs. \
         Modifie l'ordre/priorité ou choisis d'autres adjectifs."
    }

    /// Grouped, gradient-sorted display order shared by grid and document
    pub fn presentation_order(&self) -> Vec<RankedColor> {
        present::presentation_order(&self.entries)
    }

    /// Document layout plan for the exported palette
    pub fn document_plan(&self) -> DocumentPlan {
        present::document_plan(&self.entries)
    }

    /// `;`-separated detail table of the final ordering
    pub fn to_delimited(&self) -> Result<String> {
        export::to_delimited(&self.entries)
    }
}

/// Compose a palette for one request: score, filter, rank and diversify
///
/// This is the main entry point. One call performs the full recomputation
/// over the catalog snapshot; the same request tuple always yields the
/// same ordered result.
///
/// # Errors
///
/// Returns `PaletteError::InvalidParameter` when the request fails
/// validation. An empty result is NOT an error; check
/// [`Palette::no_matches`].
pub fn compose_palette(catalog: &Catalog, request: &PaletteRequest) -> Result<Palette> {
    request.validate()?;
    let ranked = selection::rank(catalog, request);
    let entries = selection::diversify(ranked, request.diversify_window);
    Ok(Palette {
        entries,
        threshold: request.threshold,
        strict: request.strict,
    })
}
