//! Integration tests for the complete palette composition pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Catalog loading from delimited text
//! - NCS annotation and hue-family classification
//! - Adjective scoring and strict filtering
//! - Global ranking and family diversification
//! - Presentation grouping and document layout

use std::io::Write;
use std::path::Path;

use nuancier_ncs::{
    compose_palette, Adjective, Catalog, ColorRecord, PaletteError, PaletteRequest,
};

const HEADER: &str =
    "ncs_code;nom;noirceur%;saturation%;teinte;temperature;clarte;luminosite;is_neutre";

/// Five warm/light/bright records and five records that each miss at
/// least one of the three adjectives at the default threshold.
fn synthetic_catalog() -> Catalog {
    let record = |ncs: &str,
                  name: &str,
                  blackness: f32,
                  saturation: f32,
                  temperature: &str,
                  clarity: &str,
                  luminosity: &str| ColorRecord {
        ncs_code: ncs.to_string(),
        name: name.to_string(),
        blackness_pct: blackness,
        saturation_pct: saturation,
        hue_code: String::new(),
        temperature: temperature.to_string(),
        clarity: clarity.to_string(),
        luminosity: luminosity.to_string(),
        is_neutral: temperature == "neutre",
    };

    Catalog::from_records(vec![
        // Exact matches for (chaud, clair, lumineux)
        record("S0540-Y", "Jaune soleil", 5.0, 40.0, "chaud", "clair", "lumineux"),
        record("S1030-Y30R", "Abricot", 10.0, 30.0, "chaud", "clair", "lumineux"),
        record("S1040-R", "Rose vif", 10.0, 40.0, "chaud", "clair", "lumineux"),
        record("S0520-Y50R", "Pêche", 5.0, 20.0, "chaud", "clair", "lumineux"),
        record("S1505-Y", "Crème", 15.0, 5.0, "chaud", "clair", "lumineux"),
        // Non-matches: cold, dark or matte enough to fail a threshold
        record("S7020-B", "Bleu nuit", 70.0, 20.0, "froid", "foncé", "mat"),
        record("S6030-B", "Bleu acier", 60.0, 30.0, "froid", "foncé", "mat"),
        record("S8005-G", "Vert forêt", 80.0, 5.0, "froid", "foncé", "mat"),
        record("S8500-N", "Anthracite", 85.0, 0.0, "neutre", "foncé", "mat"),
        record("S7010-R", "Bordeaux", 70.0, 10.0, "chaud", "foncé", "mat"),
    ])
}

#[test]
fn test_end_to_end_strict_matching() {
    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux);
    let palette = compose_palette(&synthetic_catalog(), &request).unwrap();

    // Exactly the five exact matches survive
    assert_eq!(palette.entries.len(), 5);
    for entry in &palette.entries {
        assert_eq!(entry.record.temperature, "chaud");
        assert!(entry.scores.iter().all(|s| *s >= 0.60));
    }
    assert!(!palette.no_matches());
}

#[test]
fn test_end_to_end_scores_sorted_descending() {
    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux)
        // Window of zero keeps pure score order for the assertion
        .with_diversify_window(0);
    let palette = compose_palette(&synthetic_catalog(), &request).unwrap();
    assert!(palette
        .entries
        .windows(2)
        .all(|w| w[0].global_score >= w[1].global_score));
}

#[test]
fn test_end_to_end_document_groups_complete() {
    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux);
    let palette = compose_palette(&synthetic_catalog(), &request).unwrap();
    let plan = palette.document_plan();

    // The five warm matches span at most three family groups
    assert!(!plan.pages.is_empty());
    assert!(plan.pages.len() <= 3);
    assert_eq!(plan.swatch_count(), 5);

    // No record omitted or duplicated
    let mut names: Vec<String> = plan
        .pages
        .iter()
        .flat_map(|p| p.swatches.iter().map(|s| s.ncs_code.clone()))
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 5);
}

#[test]
fn test_empty_result_reports_terminal_state() {
    // No record can score 1.0 for both warm and cool at once
    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Froid, Adjective::Chaud)
        .with_threshold(1.0);
    let palette = compose_palette(&synthetic_catalog(), &request).unwrap();
    assert!(palette.no_matches());
    assert!(palette.document_plan().pages.is_empty());
}

#[test]
fn test_loose_mode_ranks_whole_catalog() {
    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux)
        .with_strict(false);
    let palette = compose_palette(&synthetic_catalog(), &request).unwrap();
    assert_eq!(palette.entries.len(), 10);
}

#[test]
fn test_csv_roundtrip_through_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "S0540-Y;Jaune soleil;5;40;Y;chaud;clair;lumineux;0").unwrap();
    writeln!(file, "S7020-B;Bleu nuit;70;20;B;froid;foncé;mat;0").unwrap();
    file.flush().unwrap();

    let catalog = Catalog::from_csv_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);

    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux);
    let palette = compose_palette(&catalog, &request).unwrap();
    assert_eq!(palette.entries.len(), 1);
    assert_eq!(palette.entries[0].record.name, "Jaune soleil");

    let table = palette.to_delimited().unwrap();
    assert!(table.contains("Jaune soleil"));
    assert!(table.starts_with("ncs_code;"));
}

#[test]
fn test_missing_catalog_file_is_a_read_error() {
    let err = Catalog::from_csv_path(Path::new("does_not_exist.csv")).unwrap_err();
    match err {
        PaletteError::CatalogRead { .. } => {}
        other => panic!("expected CatalogRead, got: {other:?}"),
    }
}

#[test]
fn test_missing_columns_abort_before_scoring() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ncs_code;nom").unwrap();
    writeln!(file, "S0540-Y;Jaune soleil").unwrap();
    file.flush().unwrap();

    let err = Catalog::from_csv_path(file.path()).unwrap_err();
    match err {
        PaletteError::MissingColumns { columns, .. } => {
            assert!(columns.contains(&"temperature".to_string()));
            assert_eq!(columns.len(), 7);
        }
        other => panic!("expected MissingColumns, got: {other:?}"),
    }
}

#[test]
fn test_presentation_order_is_shared_by_grid_and_document() {
    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux);
    let palette = compose_palette(&synthetic_catalog(), &request).unwrap();

    let display: Vec<String> = palette
        .presentation_order()
        .iter()
        .map(|e| e.record.ncs_code.clone())
        .collect();
    let document: Vec<String> = palette
        .document_plan()
        .pages
        .iter()
        .flat_map(|p| p.swatches.iter().map(|s| s.ncs_code.clone()))
        .collect();
    assert_eq!(display, document);
}

#[test]
fn test_determinism_across_runs() {
    let request = PaletteRequest::new(Adjective::Chaud, Adjective::Clair, Adjective::Lumineux);
    let first = compose_palette(&synthetic_catalog(), &request).unwrap();
    let second = compose_palette(&synthetic_catalog(), &request).unwrap();
    let codes = |p: &nuancier_ncs::Palette| -> Vec<String> {
        p.entries.iter().map(|e| e.record.ncs_code.clone()).collect()
    };
    assert_eq!(codes(&first), codes(&second));
}
