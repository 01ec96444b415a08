//! Color catalog loading
//!
//! Reads the `;`-separated catalog of NCS colors and their descriptive
//! attributes into an immutable in-memory snapshot. The catalog is loaded
//! once per session; records are never mutated afterwards.
//!
//! Structural problems (unreadable file, missing required columns) are
//! fatal and reported before any scoring occurs. Per-row problems are not:
//! missing names become empty strings, unparseable percentages become 0,
//! and rows the reader cannot decode at all are skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use crate::error::{PaletteError, Result};

/// Columns the catalog must provide; their absence is a fatal load error
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "ncs_code",
    "nom",
    "noirceur%",
    "saturation%",
    "teinte",
    "temperature",
    "clarte",
    "luminosite",
    "is_neutre",
];

/// One row of the source catalog
///
/// Field names keep the catalog's French vocabulary for the categorical
/// attributes; scoring lowercases and trims them before comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Canonical NCS notation, e.g. `S2030-Y30R`
    #[serde(default)]
    pub ncs_code: String,

    /// Display label, may be empty
    #[serde(rename = "nom", default)]
    pub name: String,

    /// Blackness percentage from the catalog, 0-100
    #[serde(rename = "noirceur%", default, deserialize_with = "de_f32_or_zero")]
    pub blackness_pct: f32,

    /// Chroma/saturation percentage from the catalog, 0-100
    #[serde(rename = "saturation%", default, deserialize_with = "de_f32_or_zero")]
    pub saturation_pct: f32,

    /// Raw hue token column (`teinte`)
    #[serde(rename = "teinte", default)]
    pub hue_code: String,

    /// Categorical temperature: "chaud", "froid" or "neutre"
    #[serde(default)]
    pub temperature: String,

    /// Categorical clarity: "clair" or "foncé"
    #[serde(rename = "clarte", default)]
    pub clarity: String,

    /// Categorical luminosity: "lumineux" or "mat"
    #[serde(rename = "luminosite", default)]
    pub luminosity: String,

    /// Neutral flag provided by the catalog
    #[serde(rename = "is_neutre", default, deserialize_with = "de_flexible_bool")]
    pub is_neutral: bool,
}

/// Immutable catalog snapshot
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ColorRecord>,
}

impl Catalog {
    /// Build a catalog from records already in memory
    pub fn from_records(records: Vec<ColorRecord>) -> Self {
        Self { records }
    }

    /// Load the catalog from a `;`-separated CSV file
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::CatalogRead` when the file cannot be opened
    /// or its header cannot be parsed, and `PaletteError::MissingColumns`
    /// when required columns are absent.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| PaletteError::catalog_read(path, "cannot open file", e))?;
        Self::from_csv_reader(file, path)
    }

    /// Load the catalog from any reader producing `;`-separated CSV
    pub fn from_csv_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| PaletteError::catalog_read(origin, "cannot read header row", e))?
            .clone();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PaletteError::MissingColumns {
                path: PathBuf::from(origin),
                columns: missing,
            });
        }

        let mut records = Vec::new();
        for (row, result) in rdr.deserialize::<ColorRecord>().enumerate() {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    // One undecodable row must not abort the batch
                    warn!(row = row + 1, error = %e, "skipping undecodable catalog row");
                }
            }
        }

        info!(rows = records.len(), path = %origin.display(), "catalog loaded");
        debug!(columns = ?headers.iter().collect::<Vec<_>>(), "catalog header");
        Ok(Self { records })
    }

    /// All records in catalog iteration order
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Deserialize a percentage cell, treating empty/unparseable values as 0
fn de_f32_or_zero<'de, D>(deserializer: D) -> std::result::Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().replace(',', ".").parse::<f32>().ok())
        .unwrap_or(0.0))
}

/// Deserialize a boolean cell, accepting common spellings and defaulting
/// to false for anything else
fn de_flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| {
            matches!(
                s.trim().to_lowercase().as_str(),
                "true" | "1" | "oui" | "vrai" | "yes"
            )
        })
        .unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "ncs_code;nom;noirceur%;saturation%;teinte;temperature;clarte;luminosite;is_neutre";

    fn load(body: &str) -> Result<Catalog> {
        let data = format!("{HEADER}\n{body}");
        Catalog::from_csv_reader(Cursor::new(data), Path::new("test.csv"))
    }

    #[test]
    fn test_load_basic_rows() {
        let catalog = load(
            "S0502-Y;Blanc cassé;5;2;Y;chaud;clair;lumineux;0\n\
             S9000-N;Noir profond;90;0;N;neutre;foncé;mat;1",
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);

        let first = &catalog.records()[0];
        assert_eq!(first.ncs_code, "S0502-Y");
        assert_eq!(first.name, "Blanc cassé");
        assert_eq!(first.blackness_pct, 5.0);
        assert!(!first.is_neutral);

        let second = &catalog.records()[1];
        assert_eq!(second.clarity, "foncé");
        assert!(second.is_neutral);
    }

    #[test]
    fn test_missing_columns_are_fatal_and_named() {
        let data = "ncs_code;nom;noirceur%\nS0502-Y;x;5";
        let err = Catalog::from_csv_reader(Cursor::new(data), Path::new("bad.csv")).unwrap_err();
        match err {
            PaletteError::MissingColumns { columns, .. } => {
                assert!(columns.contains(&"teinte".to_string()));
                assert!(columns.contains(&"is_neutre".to_string()));
                assert!(!columns.contains(&"ncs_code".to_string()));
            }
            other => panic!("expected MissingColumns, got: {other:?}"),
        }
    }

    #[test]
    fn test_bad_scalars_default_to_zero() {
        let catalog = load("S0502-Y;;n/a;;Y;chaud;clair;lumineux;").unwrap();
        let record = &catalog.records()[0];
        assert_eq!(record.name, "");
        assert_eq!(record.blackness_pct, 0.0);
        assert_eq!(record.saturation_pct, 0.0);
        assert!(!record.is_neutral);
    }

    #[test]
    fn test_decimal_comma_is_accepted() {
        let catalog = load("S0502-Y;x;5,5;2;Y;chaud;clair;lumineux;non").unwrap();
        assert_eq!(catalog.records()[0].blackness_pct, 5.5);
    }

    #[test]
    fn test_flexible_bool_spellings() {
        let catalog = load(
            "a;x;0;0;N;neutre;clair;mat;oui\n\
             b;x;0;0;N;neutre;clair;mat;TRUE\n\
             c;x;0;0;N;neutre;clair;mat;non",
        )
        .unwrap();
        assert!(catalog.records()[0].is_neutral);
        assert!(catalog.records()[1].is_neutral);
        assert!(!catalog.records()[2].is_neutral);
    }
}
