//! Request configuration for palette composition
//!
//! A request is one user selection: three prioritized adjectives, the
//! strictness threshold, and the diversification window. Requests can be
//! loaded from JSON files or constructed programmatically:
//!
//! ```
//! use nuancier_ncs::{Adjective, PaletteRequest};
//!
//! let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux);
//! assert_eq!(request.threshold, 0.60);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::ranking;
use crate::error::{PaletteError, Result};
use crate::scoring::Adjective;

/// One palette request: adjectives, strictness and diversification options
///
/// Adjective priority is positional: `adjectives[0]` weighs the most.
/// Repeated adjectives are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRequest {
    /// The three prioritized adjectives, strongest first
    pub adjectives: [Adjective; 3],

    /// Strict matching threshold applied to each adjective score
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    /// When false, the threshold filter is skipped and the whole catalog
    /// is ranked (preview mode)
    #[serde(default = "default_strict")]
    pub strict: bool,

    /// Size of the top-ranked slice subjected to family round-robin
    #[serde(default = "default_window")]
    pub diversify_window: usize,
}

fn default_threshold() -> f32 {
    ranking::DEFAULT_THRESHOLD
}

fn default_strict() -> bool {
    true
}

fn default_window() -> usize {
    ranking::DEFAULT_DIVERSIFY_WINDOW
}

impl Default for PaletteRequest {
    fn default() -> Self {
        Self::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux)
    }
}

impl PaletteRequest {
    /// Create a request with default threshold, strictness and window
    pub fn new(first: Adjective, second: Adjective, third: Adjective) -> Self {
        Self {
            adjectives: [first, second, third],
            threshold: default_threshold(),
            strict: default_strict(),
            diversify_window: default_window(),
        }
    }

    /// Set the strict matching threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable strict filtering
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the diversification window
    pub fn with_diversify_window(mut self, window: usize) -> Self {
        self.diversify_window = window;
        self
    }

    /// Validate parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` when the threshold falls
    /// outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) || !self.threshold.is_finite() {
            return Err(PaletteError::InvalidParameter {
                parameter: "threshold".to_string(),
                value: self.threshold.to_string(),
            });
        }
        Ok(())
    }

    /// Load a request from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PaletteError::config(format!("cannot read {}", path.display()), e))?;
        let request: Self = serde_json::from_str(&content)
            .map_err(|e| PaletteError::config(format!("cannot parse {}", path.display()), e))?;
        request.validate()?;
        Ok(request)
    }

    /// Save a request to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("cannot serialize request", e))?;
        std::fs::write(path, json)
            .map_err(|e| PaletteError::config(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }
}
