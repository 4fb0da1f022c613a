//! Reactive Pipeline
//!
//! Connects the inputs (magnitude, viewport) to a renderer.
//!
//! # Pipeline Architecture
//!
//! ```text
//! magnitude ─┬─► renderPlanDerived ─► render effect ─► PlanRenderer
//! viewport ──┘
//! magnitude ───► readingDerived ────► MountHandle::narrate ─► Narrator
//! ```
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: the plan and the reading are pure functions of the inputs
//! - **Side Effects in Effect**: only the render effect touches the renderer
//! - **Latest wins**: plans computed elsewhere go through [`LatestPlan`], which
//!   drops results for superseded inputs

pub mod inputs;
pub mod latest;
pub mod mount;
pub mod plan_derived;

// Re-exports
pub use inputs::{
    detect_viewport_size, magnitude, magnitude_signal, reset_inputs, set_magnitude, set_source,
    set_viewport_size, update_magnitude, viewport_signal, viewport_size,
};
pub use latest::{LatestPlan, Ticket};
pub use mount::{LogNarrator, MountHandle, Narrator, mount, mount_with};
pub use plan_derived::{
    create_reading_derived, create_render_plan_derived, create_render_plan_derived_with,
};
