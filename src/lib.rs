//! # kazu
//!
//! Japanese numeral readings and dot-grid layouts for integers up to 10^69.
//!
//! Two pure transformations sit at the core:
//!
//! - [`numeral`] - magnitude to hiragana reading (`12345` → `いちまん にせん ...`)
//! - [`layout`] - magnitude to a [`RenderPlan`]: dots in 10x10 blocks, one
//!   section per base-100 unit, scaled to fit a viewport
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for the
//! reactive glue:
//! ```text
//! magnitude / viewport signals → renderPlanDerived → render effect → PlanRenderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors and terminal cells
//! - [`numeral`] - Reading tables and the formatter
//! - [`layout`] - Decomposition, positions, bounds and render plans
//! - [`source`] - Bounded magnitude input
//! - [`pipeline`] - Signals, deriveds and the mount effect
//! - [`renderer`] - Plan renderers (terminal output via crossterm)

pub mod error;
pub mod layout;
pub mod numeral;
pub mod pipeline;
pub mod renderer;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use error::{KazuError, Result};
pub use types::*;

pub use numeral::{JAPANESE, NumeralTable, ROMAJI, format_magnitude, format_magnitude_with};

pub use layout::{
    Decomposition, LayoutConfig, Marks, Point, RenderPlan, RenderStrategy, Section, SectionPlan,
    Unit, compute_decomposition, compute_render_plan, compute_render_plan_with, position,
    section_extent,
};

pub use source::MagnitudeSource;

pub use pipeline::{LatestPlan, LogNarrator, MountHandle, Narrator, mount, mount_with};

pub use renderer::{FrameBuffer, PlanRenderer, TerminalRenderer};
