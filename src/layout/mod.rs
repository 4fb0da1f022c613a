//! Magnitude Layout Engine.
//!
//! Turns a magnitude into a [`RenderPlan`]: dots grouped in 10x10 blocks,
//! one section per unit tier, scaled to fit a viewport.
//!
//! # Pipeline
//!
//! ```text
//! BigUint ─► decompose ─► stack_sections ─► compute_render_plan
//!            (sections)   (bounds)          (scale, strategy, marks via position)
//! ```
//!
//! Work per call is bounded by the display threshold, not by the magnitude:
//! a 69-digit number costs about as much as a 4-digit one.
//!
//! # Example
//!
//! ```
//! use kazu::layout::{compute_render_plan, RenderStrategy};
//! use num_bigint::BigUint;
//!
//! let plan = compute_render_plan(&BigUint::from(1234u32), 800.0, 600.0);
//! assert_eq!(plan.sections.len(), 1);
//! assert_eq!(plan.strategy, RenderStrategy::Fills);
//! ```

pub mod bounds;
pub mod config;
pub mod decompose;
pub mod plan;
pub mod position;
pub mod units;

pub use bounds::{SectionBounds, StackedBounds, section_extent, stack_sections};
pub use config::LayoutConfig;
pub use decompose::{Decomposition, Section, compute_decomposition, decompose};
pub use plan::{
    Marks, RenderPlan, RenderStrategy, SectionPlan, compute_render_plan, compute_render_plan_with,
    select_strategy, try_compute_render_plan,
};
pub use position::{Point, position};
pub use units::{UNIT_TIERS, Unit, UnitTier};
