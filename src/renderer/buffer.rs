//! FrameBuffer and drawing primitives.
//!
//! A 2D grid of [`Cell`]s with row-major flat storage: `index = y * width + x`.
//! Drawing outside the grid is silently clipped.

use unicode_width::UnicodeWidthChar;

use crate::types::{Attr, Cell, Rgba};

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Iterate over cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % width) as u16;
            let y = (i / width) as u16;
            (x, y, cell)
        })
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::default());
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell. Returns true if the cell was in bounds.
    pub fn set_cell(&mut self, x: u16, y: u16, char: char, fg: Rgba, attrs: Attr) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                cell.char = char as u32;
                cell.fg = fg;
                cell.attrs = attrs;
                true
            }
            None => false,
        }
    }

    /// Fill a rectangle with a glyph.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, char: char, fg: Rgba) {
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);
        if x2 <= x || y2 <= y {
            return;
        }

        for row in y..y2 {
            let start = self.index(x, row);
            let end = self.index(x2, row);
            for cell in &mut self.cells[start..end] {
                cell.char = char as u32;
                cell.fg = fg;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw text at a position.
    ///
    /// Returns the number of columns used. Wide characters take two columns;
    /// the second holds a continuation marker (char = 0).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, attrs: Attr) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            let char_width = ch.width().unwrap_or(0) as u16;
            if char_width == 0 {
                continue;
            }
            if col.saturating_add(char_width) > self.width {
                break;
            }

            if self.set_cell(col, y, ch, fg, attrs) && char_width == 2 {
                if let Some(next) = self.get_mut(col + 1, y) {
                    next.char = 0;
                    next.fg = fg;
                    next.attrs = attrs;
                }
            }
            col += char_width;
        }

        col.saturating_sub(x)
    }

    /// Row `y` as a string, skipping continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| cell.char != 0)
            .filter_map(|cell| char::from_u32(cell.char))
            .collect()
    }
}

/// Display width of a string in terminal cells.
pub fn text_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buf = FrameBuffer::new(80, 24);
        assert_eq!(buf.width(), 80);
        assert_eq!(buf.height(), 24);
        assert_eq!(buf.iter().count(), 80 * 24);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buf = FrameBuffer::new(10, 10);
        assert!(buf.get(9, 9).is_some());
        assert!(buf.get(10, 0).is_none());
        assert!(buf.get(0, 10).is_none());
    }

    #[test]
    fn test_set_cell() {
        let mut buf = FrameBuffer::new(10, 10);
        assert!(buf.set_cell(5, 5, 'X', Rgba::WHITE, Attr::BOLD));
        assert!(!buf.set_cell(10, 5, 'X', Rgba::WHITE, Attr::NONE));

        let cell = buf.get(5, 5).unwrap();
        assert_eq!(cell.char, 'X' as u32);
        assert_eq!(cell.fg, Rgba::WHITE);
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = FrameBuffer::new(10, 10);
        buf.fill_rect(8, 8, 5, 5, '#', Rgba::GRAY);
        assert_eq!(buf.get(9, 9).unwrap().char, '#' as u32);
        assert_eq!(buf.get(7, 9).unwrap().char, ' ' as u32);
        assert_eq!(buf.iter().filter(|(_, _, c)| c.char == '#' as u32).count(), 4);
    }

    #[test]
    fn test_draw_text_wide_chars() {
        let mut buf = FrameBuffer::new(20, 1);
        let used = buf.draw_text(0, 0, "1万", Rgba::WHITE, Attr::NONE);
        assert_eq!(used, 3);
        assert_eq!(buf.get(1, 0).unwrap().char, '万' as u32);
        assert_eq!(buf.get(2, 0).unwrap().char, 0);
        assert_eq!(buf.row_text(0).trim_end(), "1万");
    }

    #[test]
    fn test_draw_text_stops_at_edge() {
        let mut buf = FrameBuffer::new(3, 1);
        // The wide char would straddle the edge, so it is dropped.
        let used = buf.draw_text(0, 0, "abい", Rgba::WHITE, Attr::NONE);
        assert_eq!(used, 2);
        assert_eq!(buf.get(2, 0).unwrap().char, ' ' as u32);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("いちまん"), 8);
    }

    #[test]
    fn test_clear() {
        let mut buf = FrameBuffer::new(4, 4);
        buf.set_cell(1, 1, 'X', Rgba::WHITE, Attr::NONE);
        buf.clear();
        assert_eq!(buf.get(1, 1), Some(&Cell::default()));
    }
}
