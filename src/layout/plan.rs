//! Render plans - scale, strategy and mark emission.
//!
//! A [`RenderPlan`] is what a renderer consumes: one scale factor and, per
//! section, marks already placed in viewport units. The mark form depends on
//! the total instance count:
//!
//! | instances              | marks                     |
//! |------------------------|---------------------------|
//! | `<= shape_limit`       | circles (`Shapes`)        |
//! | `<= fill_limit`        | squares (`Fills`)         |
//! | above                  | pixel writes              |
//!
//! Marks smaller than `min_visible_size` collapse to single-pixel writes.

use num_bigint::BigUint;

use super::bounds::{SectionBounds, stack_sections};
use super::config::LayoutConfig;
use super::decompose::decompose;
use super::position::{Point, position};
use super::units::Unit;
use crate::error::{KazuError, Result};

// =============================================================================
// Types
// =============================================================================

/// Drawing strategy selected for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    #[default]
    Shapes,
    Fills,
    PixelWrites,
}

/// Marks of one section, in viewport units.
#[derive(Debug, Clone, PartialEq)]
pub enum Marks {
    /// Circles: centers and a shared radius.
    Shapes { centers: Vec<Point>, radius: f64 },
    /// Filled squares: top-left corners and a shared side.
    Fills { corners: Vec<Point>, side: f64 },
    /// Raw pixels: one `footprint` x `footprint` square per instance.
    PixelWrites { pixels: Vec<(u32, u32)>, footprint: u32 },
}

impl Marks {
    /// Number of marks.
    pub fn len(&self) -> usize {
        match self {
            Marks::Shapes { centers, .. } => centers.len(),
            Marks::Fills { corners, .. } => corners.len(),
            Marks::PixelWrites { pixels, .. } => pixels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One section of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlan {
    pub unit: Unit,
    pub count: u32,
    /// Virtual bounds before scaling.
    pub bounds: SectionBounds,
    pub marks: Marks,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Viewport the plan was computed for.
    pub viewport: (f64, f64),
    /// Virtual-to-viewport ratio.
    pub scale: f64,
    /// Viewport position of virtual (0, 0); centers the content.
    pub origin: Point,
    /// Virtual size of all stacked sections.
    pub content_size: (f64, f64),
    pub strategy: RenderStrategy,
    pub total_instances: u32,
    pub sections: Vec<SectionPlan>,
}

impl RenderPlan {
    /// A plan that draws nothing.
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            viewport: (width, height),
            scale: 1.0,
            origin: Point::default(),
            content_size: (0.0, 0.0),
            strategy: RenderStrategy::default(),
            total_instances: 0,
            sections: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Content size after scaling.
    pub fn scaled_size(&self) -> (f64, f64) {
        (self.content_size.0 * self.scale, self.content_size.1 * self.scale)
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Compute a plan with the default config.
///
/// Degenerate viewports yield [`RenderPlan::empty`].
pub fn compute_render_plan(value: &BigUint, width: f64, height: f64) -> RenderPlan {
    compute_render_plan_with(value, width, height, &LayoutConfig::default())
}

/// Like [`compute_render_plan`], but reports a degenerate viewport.
pub fn try_compute_render_plan(value: &BigUint, width: f64, height: f64) -> Result<RenderPlan> {
    if !is_drawable(width, height) {
        return Err(KazuError::DegenerateViewport { width, height });
    }
    Ok(compute_render_plan(value, width, height))
}

/// Compute a plan with an explicit config.
pub fn compute_render_plan_with(
    value: &BigUint,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> RenderPlan {
    if !is_drawable(width, height) {
        log::warn!("skipping layout for degenerate viewport {width}x{height}");
        return RenderPlan::empty(width, height);
    }

    let decomposition = decompose(value, config);
    if decomposition.is_empty() {
        return RenderPlan::empty(width, height);
    }

    let stacked = stack_sections(&decomposition, config);
    let (content_w, content_h) = (stacked.total_width, stacked.total_height);

    let scale = (width / content_w).min(height / content_h) * config.fit_margin;
    let origin = Point::new(
        (width - content_w * scale) / 2.0,
        (height - content_h * scale) / 2.0,
    );

    let total_instances = decomposition.total_instances();
    let mut strategy = select_strategy(total_instances, config);
    if config.dot_size * scale < config.min_visible_size {
        strategy = RenderStrategy::PixelWrites;
    }

    let placement = Placement {
        scale,
        origin,
        viewport: (width, height),
        config,
    };

    let sections = decomposition
        .sections
        .into_iter()
        .zip(stacked.sections)
        .map(|(section, bounds)| {
            let marks = placement.marks(strategy, section.count, bounds.start_y);
            SectionPlan {
                unit: section.unit,
                count: section.count,
                bounds,
                marks,
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "plan: {} sections, {total_instances} instances, {strategy:?}, scale {scale:.4}",
        sections.len()
    );

    RenderPlan {
        viewport: (width, height),
        scale,
        origin,
        content_size: (content_w, content_h),
        strategy,
        total_instances,
        sections,
    }
}

/// Strategy tier for a total instance count.
pub fn select_strategy(total_instances: u32, config: &LayoutConfig) -> RenderStrategy {
    if total_instances <= config.shape_limit {
        RenderStrategy::Shapes
    } else if total_instances <= config.fill_limit {
        RenderStrategy::Fills
    } else {
        RenderStrategy::PixelWrites
    }
}

#[inline]
fn is_drawable(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

// =============================================================================
// Mark placement
// =============================================================================

struct Placement<'a> {
    scale: f64,
    origin: Point,
    viewport: (f64, f64),
    config: &'a LayoutConfig,
}

impl Placement<'_> {
    /// Viewport position of a virtual point shifted by `dx, dy` inside its cell.
    #[inline]
    fn project(&self, p: Point, start_y: f64, dx: f64, dy: f64) -> Point {
        Point::new(
            self.origin.x + (p.x + dx) * self.scale,
            self.origin.y + (start_y + p.y + dy) * self.scale,
        )
    }

    fn marks(&self, strategy: RenderStrategy, count: u32, start_y: f64) -> Marks {
        let size = self.config.dot_size;
        let inset = (1.0 - size) / 2.0;
        let points = (0..count).map(|i| position(i, self.config));

        match strategy {
            RenderStrategy::Shapes => Marks::Shapes {
                centers: points.map(|p| self.project(p, start_y, 0.5, 0.5)).collect(),
                radius: size / 2.0 * self.scale,
            },
            RenderStrategy::Fills => Marks::Fills {
                corners: points.map(|p| self.project(p, start_y, inset, inset)).collect(),
                side: size * self.scale,
            },
            RenderStrategy::PixelWrites => {
                let max_x = pixel_limit(self.viewport.0);
                let max_y = pixel_limit(self.viewport.1);
                let footprint = if size * self.scale >= 2.0 { 2 } else { 1 };
                let pixels = points
                    .map(|p| {
                        let c = self.project(p, start_y, 0.5, 0.5);
                        ((c.x.floor() as u32).min(max_x), (c.y.floor() as u32).min(max_y))
                    })
                    .collect();
                Marks::PixelWrites { pixels, footprint }
            }
        }
    }
}

/// Last addressable pixel along a viewport axis.
#[inline]
fn pixel_limit(extent: f64) -> u32 {
    (extent.ceil() as u32).saturating_sub(1)
}

// =============================================================================
// Tests
// =============================================================================
