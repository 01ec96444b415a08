//! Fixed parameters and reference values for palette composition
//!
//! This module contains the compile-time constants shared by the NCS
//! approximator, the hue classifier, the ranking engine and the
//! presentation layout.

/// NCS approximation parameters
pub mod ncs {
    /// Fallback RGB returned for any NCS code that does not match the
    /// canonical pattern. Parsing never fails; it degrades to this grey.
    pub const FALLBACK_RGB: [u8; 3] = [200, 200, 200];
}

/// Ranking weights and thresholds
pub mod ranking {
    /// Strict matching threshold applied to all three adjective scores.
    /// Bound to the UI slider default; canonical value is 0.60.
    pub const DEFAULT_THRESHOLD: f32 = 0.60;

    /// Priority weight of the first adjective
    pub const WEIGHT_1: f32 = 1.0;

    /// Priority weight of the second adjective
    pub const WEIGHT_2: f32 = 0.6;

    /// Priority weight of the third adjective
    pub const WEIGHT_3: f32 = 0.3;

    /// Saturation tiebreak bonus: nudges the global score toward more
    /// vivid colors at equal adjective scores
    pub const SATURATION_BONUS: f32 = 0.05;

    /// Number of top-ranked entries subjected to family round-robin
    pub const DEFAULT_DIVERSIFY_WINDOW: usize = 200;
}

/// Hue classifier thresholds (HSV space)
pub mod classifier {
    /// Below this saturation a color is achromatic and classified grey
    pub const MIN_SATURATION: f32 = 0.05;

    /// Below this value a color is too dark to classify chromatically
    pub const MIN_VALUE: f32 = 0.1;

    /// Hue bucket boundaries in degrees, half-open intervals.
    /// Red wraps around: [345, 360) ∪ [0, 15).
    pub const RED_WRAP_LOW: f32 = 345.0;
    pub const RED_HIGH: f32 = 15.0;
    pub const ORANGE_HIGH: f32 = 45.0;
    pub const YELLOW_HIGH: f32 = 75.0;
    pub const GREEN_HIGH: f32 = 165.0;
    pub const CYAN_HIGH: f32 = 195.0;
    pub const BLUE_HIGH: f32 = 255.0;
    pub const VIOLET_HIGH: f32 = 300.0;
}

/// Interactive grid layout
pub mod grid {
    /// Swatch cards per page
    pub const PAGE_SIZE: usize = 36;

    /// Cards per row
    pub const COLS_PER_ROW: usize = 6;
}

/// A4 document layout metrics (millimeters)
pub mod document {
    /// Page width
    pub const PAGE_WIDTH_MM: f32 = 210.0;

    /// Page height
    pub const PAGE_HEIGHT_MM: f32 = 297.0;

    /// Left and right margins
    pub const MARGIN_MM: f32 = 15.0;

    /// Swatch columns per page
    pub const COLS: usize = 3;

    /// Swatch rectangle height
    pub const SWATCH_HEIGHT_MM: f32 = 25.0;

    /// Vertical gap between swatch rows
    pub const ROW_GAP_MM: f32 = 10.0;

    /// Gap between a swatch and its label
    pub const LABEL_GAP_MM: f32 = 3.0;

    /// Label line height
    pub const LABEL_HEIGHT_MM: f32 = 5.0;

    /// First row y position (below the page title rule)
    pub const START_Y_MM: f32 = 25.0;

    /// No row may start past this y position
    pub const BOTTOM_LIMIT_MM: f32 = PAGE_HEIGHT_MM - 15.0;

    /// Usable width between margins
    pub const USABLE_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

    /// Width of one swatch column
    pub const SWATCH_WIDTH_MM: f32 = USABLE_WIDTH_MM / COLS as f32;
}
