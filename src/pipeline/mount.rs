//! Mount API - render effect and narration.
//!
//! Mounting wires the plan derived to a [`PlanRenderer`] through one effect:
//! every change to the magnitude or the viewport clears the renderer and draws
//! the new plan. Narration is pull-based: [`MountHandle::narrate`] reads the
//! current magnitude aloud through the [`Narrator`].
//!
//! # Example
//!
//! ```ignore
//! use kazu::pipeline::{mount, set_magnitude, LogNarrator};
//! use kazu::renderer::TerminalRenderer;
//!
//! let mut handle = mount(TerminalRenderer::stdout(), LogNarrator);
//! set_magnitude(12_345u32.into()); // redraws
//! handle.narrate();                // "いちまん にせん さんびゃく よんじゅう ご"
//! handle.unmount();
//! ```

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::effect;

use super::plan_derived::{create_reading_derived, create_render_plan_derived_with};
use crate::layout::LayoutConfig;
use crate::renderer::PlanRenderer;

// =============================================================================
// Narrator
// =============================================================================

/// Speech output for readings.
pub trait Narrator {
    fn speak(&mut self, text: &str);
}

/// Narrator that writes readings to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNarrator;

impl Narrator for LogNarrator {
    fn speak(&mut self, text: &str) {
        log::info!("{text}");
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]. Dropping it stops the render effect.
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    reading: Box<dyn Fn() -> String>,
    narrator: Box<dyn Narrator>,
    frames: Rc<Cell<u64>>,
}

impl MountHandle {
    /// Speak the current reading and return it.
    pub fn narrate(&mut self) -> String {
        let text = (self.reading)();
        self.narrator.speak(&text);
        text
    }

    /// Current reading, without speaking it.
    pub fn reading(&self) -> String {
        (self.reading)()
    }

    /// Frames drawn successfully so far.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    /// Stop the render effect.
    pub fn unmount(mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount with the default layout config.
pub fn mount<R, N>(renderer: R, narrator: N) -> MountHandle
where
    R: PlanRenderer + 'static,
    N: Narrator + 'static,
{
    mount_with(renderer, narrator, LayoutConfig::default())
}

/// Mount with an explicit layout config.
///
/// The first frame is drawn before this returns.
pub fn mount_with<R, N>(mut renderer: R, narrator: N, config: LayoutConfig) -> MountHandle
where
    R: PlanRenderer + 'static,
    N: Narrator + 'static,
{
    let plan_derived = create_render_plan_derived_with(config);
    let reading_derived = create_reading_derived();

    let frames = Rc::new(Cell::new(0u64));
    let frames_clone = frames.clone();

    let stop = effect(move || {
        // Read from derived (creates dependency)
        let plan = plan_derived.get();

        if let Err(err) = renderer.clear().and_then(|()| renderer.draw(&plan)) {
            log::warn!("render failed: {err}");
            return;
        }
        frames_clone.set(frames_clone.get() + 1);
    });

    MountHandle {
        stop_effect: Some(Box::new(stop)),
        reading: Box::new(move || reading_derived.get()),
        narrator: Box::new(narrator),
        frames,
    }
}

// =============================================================================
// Tests
// =============================================================================
