//! Terminal renderer.
//!
//! Rasterizes a [`RenderPlan`] into a [`FrameBuffer`] (one plan unit per
//! terminal cell) and writes it out with crossterm. The bottom row holds a
//! legend: one `label×count` entry per section in the section's color.
//!
//! | marks          | glyph |
//! |----------------|-------|
//! | `Shapes`       | `●`   |
//! | `Fills`        | `■`   |
//! | `PixelWrites`  | `▪`   |

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use super::PlanRenderer;
use super::buffer::{FrameBuffer, text_width};
use crate::error::Result;
use crate::layout::{Marks, RenderPlan};
use crate::types::{Attr, Rgba};

pub const SHAPE_GLYPH: char = '●';
pub const FILL_GLYPH: char = '■';
pub const PIXEL_GLYPH: char = '▪';

/// Rows reserved below the plan for the legend.
pub const LEGEND_ROWS: u16 = 1;

/// Plan viewport for a terminal of `cols` x `rows`, leaving room for the legend.
pub fn plan_area(cols: u16, rows: u16) -> (f64, f64) {
    (f64::from(cols), f64::from(rows.saturating_sub(LEGEND_ROWS)))
}

/// Rasterize `plan` into `buffer`, resizing it to fit the plan plus the legend.
pub fn rasterize(plan: &RenderPlan, buffer: &mut FrameBuffer) {
    let width = to_cell(plan.viewport.0.ceil());
    let height = to_cell(plan.viewport.1.ceil());
    buffer.resize(width, height.saturating_add(LEGEND_ROWS));

    for section in &plan.sections {
        let color = section.unit.color;
        match &section.marks {
            Marks::Shapes { centers, .. } => {
                for c in centers {
                    buffer.set_cell(to_cell(c.x), to_cell(c.y), SHAPE_GLYPH, color, Attr::NONE);
                }
            }
            Marks::Fills { corners, side } => {
                let side = to_cell(side.round()).max(1);
                for c in corners {
                    buffer.fill_rect(to_cell(c.x), to_cell(c.y), side, side, FILL_GLYPH, color);
                }
            }
            Marks::PixelWrites { pixels, footprint } => {
                let footprint = u16::try_from(*footprint).unwrap_or(u16::MAX);
                for &(x, y) in pixels {
                    buffer.fill_rect(
                        u16::try_from(x).unwrap_or(u16::MAX),
                        u16::try_from(y).unwrap_or(u16::MAX),
                        footprint,
                        footprint,
                        PIXEL_GLYPH,
                        color,
                    );
                }
            }
        }
    }

    draw_legend(plan, buffer, height);
}

fn draw_legend(plan: &RenderPlan, buffer: &mut FrameBuffer, row: u16) {
    let mut col = 0u16;
    for section in &plan.sections {
        let entry = format!("{}×{} ", section.unit.label, section.count);
        if usize::from(col) + text_width(&entry) > usize::from(buffer.width()) {
            buffer.draw_text(col, row, "…", Rgba::GRAY, Attr::DIM);
            break;
        }
        col += buffer.draw_text(col, row, &entry, section.unit.color, Attr::BOLD);
    }
}

/// Saturating float-to-cell conversion. Negative and NaN map to 0.
#[inline]
fn to_cell(v: f64) -> u16 {
    v.floor() as u16
}

// =============================================================================
// TerminalRenderer
// =============================================================================

/// Renders plans to any `Write` sink using crossterm commands.
pub struct TerminalRenderer<W: Write> {
    out: W,
    buffer: FrameBuffer,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buffer: FrameBuffer::new(0, 0),
        }
    }

    /// Last rasterized frame.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_buffer(&mut self) -> io::Result<()> {
        let mut current_fg: Option<Rgba> = None;
        let mut current_attrs = Attr::NONE;
        for y in 0..self.buffer.height() {
            queue!(self.out, MoveTo(0, y))?;
            for x in 0..self.buffer.width() {
                let Some(cell) = self.buffer.get(x, y) else {
                    continue;
                };
                // Second half of a wide char.
                if cell.char == 0 {
                    continue;
                }
                if cell.attrs != current_attrs {
                    // Reset also drops the color, so it is re-sent below.
                    queue!(self.out, SetAttribute(Attribute::Reset))?;
                    if cell.attrs.contains(Attr::BOLD) {
                        queue!(self.out, SetAttribute(Attribute::Bold))?;
                    }
                    if cell.attrs.contains(Attr::DIM) {
                        queue!(self.out, SetAttribute(Attribute::Dim))?;
                    }
                    current_attrs = cell.attrs;
                    current_fg = None;
                }
                if current_fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(to_color(cell.fg)))?;
                    current_fg = Some(cell.fg);
                }
                let ch = char::from_u32(cell.char).unwrap_or(' ');
                queue!(self.out, Print(ch))?;
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

impl<W: Write> PlanRenderer for TerminalRenderer<W> {
    fn clear(&mut self) -> Result<()> {
        self.buffer.clear();
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn draw(&mut self, plan: &RenderPlan) -> Result<()> {
        rasterize(plan, &mut self.buffer);
        self.write_buffer()?;
        Ok(())
    }
}

fn to_color(c: Rgba) -> Color {
    if c.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: c.r.clamp(0, 255) as u8,
            g: c.g.clamp(0, 255) as u8,
            b: c.b.clamp(0, 255) as u8,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
