//! Section bounds - extents without scanning instances.
//!
//! The extent of a section follows from its last instance alone:
//!
//! - Width: if blocks spill into a second group row, block column
//!   `groups_per_row - 1` holds a full block in row 0, so the section is
//!   full width. Otherwise the last column holds only the last block.
//! - Height: if the last group row has two or more blocks, its first block
//!   is full and the row is full height. Otherwise the row holds only the
//!   last block, which may be partial.

use super::config::LayoutConfig;
use super::decompose::Decomposition;
use super::position::{
    BLOCK, BLOCK_SIDE, block_extent, block_pitch, group_row_origin, partial_extent,
};

/// Virtual extent and vertical placement of one section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBounds {
    pub width: f64,
    pub height: f64,
    pub start_y: f64,
}

impl SectionBounds {
    /// Exclusive bottom edge.
    #[inline]
    pub fn end_y(&self) -> f64 {
        self.start_y + self.height
    }

    /// True if the vertical spans `[start_y, end_y)` intersect.
    pub fn overlaps(&self, other: &SectionBounds) -> bool {
        self.start_y < other.end_y() && other.start_y < self.end_y()
    }
}

/// Width and height of a section holding `count` instances.
pub fn section_extent(count: u32, config: &LayoutConfig) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }

    let gpr = config.groups_per_row();
    let last = count - 1;
    let blocks = last / BLOCK + 1;
    let last_block_count = count - (blocks - 1) * BLOCK;

    let last_block_width = partial_extent(last_block_count.min(BLOCK_SIDE), config);
    let last_block_height = partial_extent(last_block_count.div_ceil(BLOCK_SIDE), config);

    let width = if blocks > gpr {
        (gpr - 1) as f64 * block_pitch(config) + block_extent(config)
    } else {
        (blocks - 1) as f64 * block_pitch(config) + last_block_width
    };

    let last_row = (blocks - 1) / gpr;
    let blocks_in_last_row = blocks - last_row * gpr;
    let last_row_height = if blocks_in_last_row >= 2 {
        block_extent(config)
    } else {
        last_block_height
    };
    let height = group_row_origin(last_row, config) + last_row_height;

    (width, height)
}

/// Stacked bounds for every section, plus the total virtual size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackedBounds {
    pub sections: Vec<SectionBounds>,
    pub total_width: f64,
    pub total_height: f64,
}

/// Stack sections top to bottom in decomposition order.
pub fn stack_sections(decomposition: &Decomposition, config: &LayoutConfig) -> StackedBounds {
    let mut sections = Vec::with_capacity(decomposition.len());
    let mut cursor = 0.0;
    let mut total_width: f64 = 0.0;

    for (i, section) in decomposition.sections.iter().enumerate() {
        if i > 0 {
            cursor += config.section_gap;
        }
        let (width, height) = section_extent(section.count, config);
        log::trace!(
            "section {} x{}: {width}x{height} at y={cursor}",
            section.unit.label,
            section.count
        );
        sections.push(SectionBounds {
            width,
            height,
            start_y: cursor,
        });
        cursor += height;
        total_width = total_width.max(width);
    }

    StackedBounds {
        sections,
        total_width,
        total_height: cursor,
    }
}
