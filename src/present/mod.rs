//! Presentation ordering module
//!
//! This module turns a final ranked result into the family-grouped,
//! HSV-gradient-sorted sequence shared by the interactive grid and the
//! exported document, and computes the document page layout.

pub mod grouping;
pub mod layout;

pub use grouping::{grid_pages, group_for_presentation, presentation_order, PresentationGroup};
pub use layout::{document_plan, DocumentPage, DocumentPlan, PlacedSwatch};
