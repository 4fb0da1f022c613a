//! Dot positions - instance index to virtual coordinate.
//!
//! ```text
//! instance i ──► block  = i / 100          (which 100-block)
//!                cell   = i % 100          (10x10 inside the block)
//!                block  ──► (block % groups_per_row, block / groups_per_row)
//!                group row ──► band = row / band_rows
//! ```
//!
//! Stateless, so bounds inference and mark emission share one definition.

use super::config::LayoutConfig;

/// Instances per block.
pub const BLOCK: u32 = 100;
/// Cells per block side.
pub const BLOCK_SIDE: u32 = 10;
/// Columns/rows before the quadrant gap.
pub const QUADRANT: u32 = 5;

/// A virtual coordinate: top-left corner of an instance's 1x1 cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Offset of the n-th column (or row) inside a block.
#[inline]
fn cell_offset(n: u32, config: &LayoutConfig) -> f64 {
    let gap = if n >= QUADRANT { config.quadrant_gap } else { 0.0 };
    n as f64 + gap
}

/// Side length of a full block.
#[inline]
pub fn block_extent(config: &LayoutConfig) -> f64 {
    BLOCK_SIDE as f64 + config.quadrant_gap
}

/// Distance between the origins of neighboring blocks.
#[inline]
pub fn block_pitch(config: &LayoutConfig) -> f64 {
    block_extent(config) + config.group_gap
}

/// Extent covered by the first `cells` columns (or rows) of a block.
#[inline]
pub(crate) fn partial_extent(cells: u32, config: &LayoutConfig) -> f64 {
    if cells == 0 {
        0.0
    } else {
        cell_offset(cells - 1, config) + 1.0
    }
}

/// Vertical origin of a group row, band gaps included.
#[inline]
pub(crate) fn group_row_origin(row: u32, config: &LayoutConfig) -> f64 {
    row as f64 * block_pitch(config) + (row / config.band_rows()) as f64 * config.band_gap
}

/// Virtual position of instance `index` within its section.
pub fn position(index: u32, config: &LayoutConfig) -> Point {
    let block = index / BLOCK;
    let cell = index % BLOCK;
    let gpr = config.groups_per_row();

    let block_col = block % gpr;
    let block_row = block / gpr;

    Point {
        x: block_col as f64 * block_pitch(config) + cell_offset(cell % BLOCK_SIDE, config),
        y: group_row_origin(block_row, config) + cell_offset(cell / BLOCK_SIDE, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn test_first_row_runs_left_to_right() {
        let c = config();
        assert_eq!(position(0, &c), Point::new(0.0, 0.0));
        assert_eq!(position(4, &c), Point::new(4.0, 0.0));
        assert_eq!(position(9, &c), Point::new(9.0 + c.quadrant_gap, 0.0));
    }

    #[test]
    fn test_quadrant_gap_after_fifth() {
        let c = config();
        assert_eq!(position(5, &c).x - position(4, &c).x, 1.0 + c.quadrant_gap);
        assert_eq!(position(50, &c).y - position(40, &c).y, 1.0 + c.quadrant_gap);
    }

    #[test]
    fn test_blocks_tile_into_rows() {
        let c = config();
        let pitch = block_pitch(&c);
        assert_eq!(position(100, &c), Point::new(pitch, 0.0));
        assert_eq!(position(900, &c), Point::new(9.0 * pitch, 0.0));
        assert_eq!(position(1_000, &c), Point::new(0.0, pitch));
    }

    #[test]
    fn test_band_gap_every_band_rows() {
        let c = config().with_band_rows(2);
        let pitch = block_pitch(&c);
        // Row 2 of blocks opens the second band.
        let p = position(2_000, &c);
        assert_eq!(p, Point::new(0.0, 2.0 * pitch + c.band_gap));
        // Row 1 is still in the first band.
        assert_eq!(position(1_000, &c).y, pitch);
    }

    #[test]
    fn test_partial_extent() {
        let c = config();
        assert_eq!(partial_extent(0, &c), 0.0);
        assert_eq!(partial_extent(5, &c), 5.0);
        assert_eq!(partial_extent(6, &c), 6.0 + c.quadrant_gap);
        assert_eq!(partial_extent(10, &c), block_extent(&c));
    }
}
