//! Plan Derived - Reactive layout and reading.
//!
//! Creates Deriveds that recompute whenever:
//! - The magnitude changes
//! - The viewport is resized

use spark_signals::{Derived, derived};

use super::inputs::{magnitude_signal, viewport_signal};
use crate::layout::{LayoutConfig, RenderPlan, compute_render_plan_with};
use crate::numeral::format_magnitude;

/// Create the render plan derived with the default config.
pub fn create_render_plan_derived() -> Derived<RenderPlan> {
    create_render_plan_derived_with(LayoutConfig::default())
}

/// Create the render plan derived with an explicit config.
pub fn create_render_plan_derived_with(
    config: LayoutConfig,
) -> Derived<RenderPlan> {
    let magnitude = magnitude_signal();
    let viewport = viewport_signal();

    derived(move || {
        let value = magnitude.get();
        let (width, height) = viewport.get();
        compute_render_plan_with(&value, width, height, &config)
    })
}

/// Create the reading derived. Only depends on the magnitude.
pub fn create_reading_derived() -> Derived<String> {
    let magnitude = magnitude_signal();
    derived(move || format_magnitude(&magnitude.get()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RenderStrategy;
    use crate::pipeline::inputs::{reset_inputs, set_magnitude, set_viewport_size};
    use num_bigint::BigUint;

    #[test]
    fn test_plan_derived_starts_empty() {
        reset_inputs();
        let plan = create_render_plan_derived();
        let p = plan.get();
        assert!(p.is_empty());
        assert_eq!(p.viewport, (80.0, 24.0));
    }

    #[test]
    fn test_plan_derived_follows_magnitude() {
        reset_inputs();
        let plan = create_render_plan_derived();
        set_magnitude(BigUint::from(1_500u32));
        let p = plan.get();
        assert_eq!(p.total_instances, 1_500);
        assert_eq!(p.strategy, RenderStrategy::PixelWrites);
    }

    #[test]
    fn test_plan_derived_follows_viewport() {
        reset_inputs();
        let plan = create_render_plan_derived();
        set_magnitude(BigUint::from(42u32));
        let small = plan.get().scale;
        set_viewport_size(800.0, 600.0);
        let p = plan.get();
        assert_eq!(p.viewport, (800.0, 600.0));
        assert!(p.scale > small);
    }

    #[test]
    fn test_reading_derived() {
        reset_inputs();
        let reading = create_reading_derived();
        assert_eq!(reading.get(), "ぜろ");
        set_magnitude(BigUint::from(10_000u32));
        assert_eq!(reading.get(), "いちまん");
    }
}
