//! NCS code parsing
//!
//! Decomposes the textual notation `S<BB><CC>-<HUE>` into its blackness,
//! chroma and hue-token components. Parsing is case and space insensitive;
//! anything that does not match the canonical pattern yields `None` so the
//! caller can substitute the fallback color instead of raising.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical NCS pattern after whitespace removal and uppercasing:
/// `S` + 2-digit blackness + 2-digit chroma + `-` + hue token, where the
/// hue token is `N` or a letter optionally followed by a 1-2 digit
/// percentage and a second letter (e.g. `Y30R`).
static NCS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^S(\d{2})(\d{2})-([A-Z](?:\d{1,2}[A-Z])?|N)$").expect("valid regex"));

/// Parsed components of an NCS color code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NcsCode {
    /// Blackness percentage (00-99)
    pub blackness: u8,
    /// Chroma (chromaticness) percentage (00-99)
    pub chroma: u8,
    /// Raw hue token, uppercased (`N`, `Y`, `Y30R`, ...)
    pub hue: String,
}

impl NcsCode {
    /// Parse an NCS code string
    ///
    /// Returns `None` on any deviation from the canonical pattern. Spaces
    /// anywhere in the input and lowercase letters are tolerated.
    pub fn parse(code: &str) -> Option<Self> {
        let normalized: String = code
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        let caps = NCS_PATTERN.captures(&normalized)?;

        // The two-digit groups always fit in u8
        let blackness: u8 = caps[1].parse().ok()?;
        let chroma: u8 = caps[2].parse().ok()?;
        Some(Self {
            blackness,
            chroma,
            hue: caps[3].to_string(),
        })
    }

    /// Whiteness percentage, derived as the remainder to 100 and clamped
    /// to zero when blackness + chroma overshoot
    pub fn whiteness(&self) -> u8 {
        100u8.saturating_sub(self.blackness).saturating_sub(self.chroma)
    }

    /// True when the code carries no chromatic hue component
    pub fn is_achromatic(&self) -> bool {
        self.hue == "N"
    }
}
