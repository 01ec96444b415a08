//! Fuzzy adjective scoring
//!
//! Computes a continuous 0..1 relevance score of a color record against
//! one descriptive adjective. Exact categorical matches score 1.0; graded
//! fallbacks reward records that approximate the adjective through their
//! blackness/saturation percentages. The scorer is total: unknown tokens
//! and missing fields score 0 instead of raising.
//!
//! Algorithm tag: `algo-graded-adjective-match`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::ColorRecord;

/// The fixed adjective vocabulary (French, matching the catalog)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjective {
    /// Warm
    Chaud,
    /// Cool
    Froid,
    /// Neutral temperature, rewarded further for low chroma
    Neutre,
    /// Light
    Clair,
    /// Dark
    #[serde(rename = "foncé", alias = "fonce")]
    Fonce,
    /// Bright
    Lumineux,
    /// Matte
    Mat,
}

impl Adjective {
    /// Every adjective, in UI presentation order
    pub const ALL: [Adjective; 7] = [
        Adjective::Chaud,
        Adjective::Froid,
        Adjective::Clair,
        Adjective::Fonce,
        Adjective::Lumineux,
        Adjective::Mat,
        Adjective::Neutre,
    ];

    /// Lowercase token matching the catalog vocabulary
    pub fn as_str(&self) -> &'static str {
        match self {
            Adjective::Chaud => "chaud",
            Adjective::Froid => "froid",
            Adjective::Neutre => "neutre",
            Adjective::Clair => "clair",
            Adjective::Fonce => "foncé",
            Adjective::Lumineux => "lumineux",
            Adjective::Mat => "mat",
        }
    }

    /// Parse a user-supplied token; `None` for anything outside the
    /// vocabulary. Case-insensitive, accent-tolerant for "foncé".
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "chaud" => Some(Adjective::Chaud),
            "froid" => Some(Adjective::Froid),
            "neutre" => Some(Adjective::Neutre),
            "clair" => Some(Adjective::Clair),
            "foncé" | "fonce" => Some(Adjective::Fonce),
            "lumineux" => Some(Adjective::Lumineux),
            "mat" => Some(Adjective::Mat),
            _ => None,
        }
    }
}

impl fmt::Display for Adjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Adjective {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("unknown adjective: {s}"))
    }
}

fn normalized(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Score a record against one adjective, returning a value in [0, 1]
pub fn score(record: &ColorRecord, adjective: Adjective) -> f32 {
    let temperature = normalized(&record.temperature);
    let clarity = normalized(&record.clarity);
    let luminosity = normalized(&record.luminosity);
    let blackness = record.blackness_pct;
    let saturation = record.saturation_pct;

    let raw = match adjective {
        Adjective::Chaud => match temperature.as_str() {
            "chaud" => 1.0,
            "neutre" => 0.6,
            _ => 0.0,
        },
        Adjective::Froid => match temperature.as_str() {
            "froid" => 1.0,
            "neutre" => 0.6,
            _ => 0.0,
        },
        Adjective::Neutre => {
            let base = if temperature == "neutre" { 1.0 } else { 0.0 };
            // Low chroma approximates neutrality even when the catalog
            // labels the temperature otherwise
            let bonus = ((10.0 - saturation) / 10.0).max(0.0);
            base + 0.6 * bonus
        }
        Adjective::Clair => {
            let mut s = 1.0 - blackness / 100.0;
            if clarity == "clair" {
                s += 0.15;
            }
            s
        }
        Adjective::Fonce => {
            let mut s = blackness / 100.0;
            if clarity == "foncé" {
                s += 0.15;
            }
            s
        }
        Adjective::Lumineux => {
            if luminosity == "lumineux" {
                1.0
            } else {
                0.3 + 0.7 * saturation / 100.0
            }
        }
        Adjective::Mat => {
            if luminosity == "mat" {
                1.0
            } else {
                0.7 * (1.0 - saturation / 100.0)
            }
        }
    };
    raw.clamp(0.0, 1.0)
}

/// Score a record against a raw adjective token
///
/// Unknown tokens score exactly 0.0; this is a defined fallback, not an
/// error.
pub fn score_token(record: &ColorRecord, token: &str) -> f32 {
    match Adjective::from_token(token) {
        Some(adjective) => score(record, adjective),
        None => 0.0,
    }
}
