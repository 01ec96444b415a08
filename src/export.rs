//! Tabular export of a ranked result
//!
//! Serializes the final sequence back to `;`-separated text, combining
//! the original catalog columns with the derived annotations (hex, family,
//! global score), matching the detail table shown alongside the grid.

use csv::WriterBuilder;

use crate::error::{PaletteError, Result};
use crate::selection::RankedColor;

/// Header of the exported table
pub const EXPORT_COLUMNS: [&str; 11] = [
    "ncs_code",
    "nom",
    "hex",
    "noirceur%",
    "saturation%",
    "teinte",
    "temperature",
    "clarte",
    "luminosite",
    "famille",
    "score_global",
];

/// Serialize the ranked result as `;`-separated text
///
/// Rows appear in the order of `entries`; the caller chooses whether that
/// is score order or presentation order.
pub fn to_delimited(entries: &[RankedColor]) -> Result<String> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(Vec::new());

    writer
        .write_record(EXPORT_COLUMNS)
        .map_err(|e| PaletteError::ExportError {
            message: format!("cannot write header: {e}"),
        })?;

    for entry in entries {
        let record = &entry.record;
        let blackness = format_pct(record.blackness_pct);
        let saturation = format_pct(record.saturation_pct);
        let global = format!("{:.4}", entry.global_score);
        writer
            .write_record([
                record.ncs_code.as_str(),
                record.name.as_str(),
                entry.hex.as_str(),
                blackness.as_str(),
                saturation.as_str(),
                record.hue_code.as_str(),
                record.temperature.as_str(),
                record.clarity.as_str(),
                record.luminosity.as_str(),
                entry.family.as_str(),
                global.as_str(),
            ])
            .map_err(|e| PaletteError::ExportError {
                message: format!("cannot write row for {}: {e}", record.ncs_code),
            })?;
    }

    let bytes = writer.into_inner().map_err(|e| PaletteError::ExportError {
        message: format!("cannot flush export: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| PaletteError::ExportError {
        message: format!("export is not valid UTF-8: {e}"),
    })
}

/// Render a percentage without a trailing fraction when it is whole
fn format_pct(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
