//! Renderers - the output layer.
//!
//! A renderer knows nothing about magnitudes or signals. It takes a finished
//! [`RenderPlan`] and puts it somewhere: a terminal, a test recorder, a canvas.
//!
//! ```text
//! RenderPlan ─► PlanRenderer::clear ─► PlanRenderer::draw ─► output
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kazu::layout::compute_render_plan;
//! use kazu::renderer::{PlanRenderer, TerminalRenderer, plan_area};
//! use num_bigint::BigUint;
//!
//! let (w, h) = plan_area(80, 24);
//! let plan = compute_render_plan(&BigUint::from(12_345u32), w, h);
//!
//! let mut renderer = TerminalRenderer::stdout();
//! renderer.clear()?;
//! renderer.draw(&plan)?;
//! # Ok::<(), kazu::KazuError>(())
//! ```

pub mod buffer;
pub mod terminal;

pub use buffer::{FrameBuffer, text_width};
pub use terminal::{
    FILL_GLYPH, LEGEND_ROWS, PIXEL_GLYPH, SHAPE_GLYPH, TerminalRenderer, plan_area, rasterize,
};

use crate::error::Result;
use crate::layout::RenderPlan;

/// Drawing surface for render plans.
///
/// The mount effect calls `clear` then `draw` once per plan change.
pub trait PlanRenderer {
    /// Erase the previous frame.
    fn clear(&mut self) -> Result<()>;

    /// Draw every mark of `plan`.
    fn draw(&mut self, plan: &RenderPlan) -> Result<()>;
}
