//! Document page layout
//!
//! Computes the A4 swatch-grid layout of the exported document as pure
//! data: pages with titled headers and absolutely positioned swatch
//! rectangles plus label positions, in millimeters. The actual PDF byte
//! writer is an external collaborator; it only has to replay this plan.
//!
//! Geometry: 15 mm margins, 3 columns of 60 mm, 25 mm swatches with a
//! label band below, wrap to a "(suite)" continuation page when the next
//! row would cross the bottom limit.

use serde::{Deserialize, Serialize};

use crate::constants::document as doc;
use crate::present::grouping::group_for_presentation;
use crate::selection::RankedColor;

/// One positioned swatch with its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSwatch {
    /// Left edge, mm from page left
    pub x_mm: f32,
    /// Top edge, mm from page top
    pub y_mm: f32,
    /// Rectangle width, mm
    pub width_mm: f32,
    /// Rectangle height, mm
    pub height_mm: f32,
    /// Fill color
    pub rgb: [u8; 3],
    /// Display name, sanitized for Latin-1 output
    pub label: String,
    /// NCS code of the swatch
    pub ncs_code: String,
}

/// One document page: a title plus its placed swatches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPage {
    /// Page title ("Tons rosés", "Tons rosés (suite)", ...)
    pub title: String,
    /// Swatches in placement order
    pub swatches: Vec<PlacedSwatch>,
}

/// Complete layout plan for the exported document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub pages: Vec<DocumentPage>,
}

impl DocumentPlan {
    /// Total number of swatches across all pages
    pub fn swatch_count(&self) -> usize {
        self.pages.iter().map(|p| p.swatches.len()).sum()
    }
}

/// Replace characters outside Latin-1 that commonly appear in catalog
/// names (curly quotes, dashes, ellipsis, NBSP) before label output
pub fn latin1_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' => "'".to_string(),
            '\u{201C}' | '\u{201D}' => "\"".to_string(),
            '\u{2013}' | '\u{2014}' | '\u{2022}' => "-".to_string(),
            '\u{2026}' => "...".to_string(),
            '\u{00A0}' => " ".to_string(),
            c if (c as u32) <= 0xFF => c.to_string(),
            _ => "?".to_string(),
        })
        .collect()
}

/// Compute the grouped document layout for a final result list
///
/// Each family group opens a fresh titled page; rows of three swatches
/// fill downward, wrapping to continuation pages when the next row would
/// cross the bottom limit. Groups with no members emit no page.
pub fn document_plan(entries: &[RankedColor]) -> DocumentPlan {
    let mut plan = DocumentPlan::default();

    for group in group_for_presentation(entries) {
        let base_title = group.group.title;
        let mut page = DocumentPage {
            title: base_title.to_string(),
            swatches: Vec::new(),
        };
        let mut col = 0usize;
        let mut y = doc::START_Y_MM;
        let row_advance =
            doc::SWATCH_HEIGHT_MM + doc::LABEL_GAP_MM + doc::LABEL_HEIGHT_MM + doc::ROW_GAP_MM;
        let needed = doc::SWATCH_HEIGHT_MM + doc::LABEL_GAP_MM + 10.0;

        for entry in &group.entries {
            if y + needed > doc::BOTTOM_LIMIT_MM {
                plan.pages.push(page);
                page = DocumentPage {
                    title: format!("{base_title} (suite)"),
                    swatches: Vec::new(),
                };
                col = 0;
                y = doc::START_Y_MM;
            }
            let x = doc::MARGIN_MM + col as f32 * doc::SWATCH_WIDTH_MM;
            page.swatches.push(PlacedSwatch {
                x_mm: x,
                y_mm: y,
                width_mm: doc::SWATCH_WIDTH_MM,
                height_mm: doc::SWATCH_HEIGHT_MM,
                rgb: entry.rgb,
                label: latin1_safe(&entry.record.name),
                ncs_code: entry.record.ncs_code.clone(),
            });
            col += 1;
            if col >= doc::COLS {
                col = 0;
                y += row_advance;
            }
        }
        plan.pages.push(page);
    }
    plan
}
