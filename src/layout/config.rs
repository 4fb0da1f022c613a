//! Layout constants.
//!
//! All distances are virtual units: one dot occupies a 1x1 cell.

/// Grouping, spacing and strategy knobs for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Most instances the top section may hold before the engine moves up a tier.
    pub display_threshold: u32,
    /// 100-blocks per group row.
    pub groups_per_row: u32,
    /// Gap after the 5th column and 5th row of each 100-block.
    pub quadrant_gap: f64,
    /// Gap between neighboring 100-blocks.
    pub group_gap: f64,
    /// Group rows per band.
    pub band_rows: u32,
    /// Extra vertical gap between bands.
    pub band_gap: f64,
    /// Vertical gap between sections.
    pub section_gap: f64,
    /// Mark diameter (or side) inside its 1x1 cell.
    pub dot_size: f64,
    /// Up to this many instances marks are drawn as circles.
    pub shape_limit: u32,
    /// Up to this many instances marks are drawn as filled squares.
    pub fill_limit: u32,
    /// Fraction of the viewport the content may use.
    pub fit_margin: f64,
    /// Marks smaller than this (viewport units) collapse to single pixels.
    pub min_visible_size: f64,
}

/// The top digit of any tier is below 100, so a smaller threshold could not hold it.
pub const MIN_DISPLAY_THRESHOLD: u32 = 99;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            display_threshold: 2_000,
            groups_per_row: 10,
            quadrant_gap: 0.5,
            group_gap: 1.5,
            band_rows: 10,
            band_gap: 3.0,
            section_gap: 2.0,
            dot_size: 0.8,
            shape_limit: 1_000,
            fill_limit: 4_000,
            fit_margin: 0.96,
            min_visible_size: 1.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_display_threshold(mut self, threshold: u32) -> Self {
        self.display_threshold = threshold;
        self
    }

    pub fn with_groups_per_row(mut self, groups: u32) -> Self {
        self.groups_per_row = groups;
        self
    }

    pub fn with_band_rows(mut self, rows: u32) -> Self {
        self.band_rows = rows;
        self
    }

    pub fn with_gaps(mut self, quadrant: f64, group: f64, band: f64, section: f64) -> Self {
        self.quadrant_gap = quadrant;
        self.group_gap = group;
        self.band_gap = band;
        self.section_gap = section;
        self
    }

    pub fn with_strategy_limits(mut self, shape_limit: u32, fill_limit: u32) -> Self {
        self.shape_limit = shape_limit;
        self.fill_limit = fill_limit;
        self
    }

    /// Threshold actually used for tier selection.
    #[inline]
    pub fn effective_threshold(&self) -> u32 {
        self.display_threshold.max(MIN_DISPLAY_THRESHOLD)
    }

    #[inline]
    pub(crate) fn groups_per_row(&self) -> u32 {
        self.groups_per_row.max(1)
    }

    #[inline]
    pub(crate) fn band_rows(&self) -> u32 {
        self.band_rows.max(1)
    }
}
