//! Input signals.
//!
//! The magnitude and the viewport size are the root signals of the
//! pipeline; every derived plan and reading recomputes from them.

use std::cell::RefCell;

use num_bigint::BigUint;
use num_traits::Zero;
use spark_signals::{Signal, signal};

use crate::renderer::plan_area;
use crate::source::MagnitudeSource;

thread_local! {
    static SOURCE: RefCell<MagnitudeSource> = RefCell::new(MagnitudeSource::default());
    static MAGNITUDE: RefCell<Signal<BigUint>> = RefCell::new(signal(BigUint::zero()));
    // One signal for both axes so a resize is a single change.
    static VIEWPORT: RefCell<Signal<(f64, f64)>> = RefCell::new(signal((80.0, 24.0)));
}

// =============================================================================
// Magnitude
// =============================================================================

/// Current magnitude.
pub fn magnitude() -> BigUint {
    MAGNITUDE.with(|m| m.borrow().get())
}

/// Set the magnitude, clamped by the input source ceiling.
pub fn set_magnitude(value: BigUint) {
    update_magnitude(|source| {
        source.set(value);
    });
}

/// Apply an edit to the input source and publish the result.
///
/// ```ignore
/// update_magnitude(|source| { source.increment_digit(3); });
/// ```
pub fn update_magnitude<F>(edit: F)
where
    F: FnOnce(&mut MagnitudeSource),
{
    let value = SOURCE.with(|source| {
        let mut source = source.borrow_mut();
        edit(&mut source);
        source.value().clone()
    });
    MAGNITUDE.with(|m| m.borrow().set(value));
}

/// Replace the input source (e.g. a different digit ceiling). Publishes its value.
pub fn set_source(source: MagnitudeSource) {
    let value = source.value().clone();
    SOURCE.with(|s| *s.borrow_mut() = source);
    MAGNITUDE.with(|m| m.borrow().set(value));
}

/// Get the magnitude signal for reactive tracking.
pub fn magnitude_signal() -> Signal<BigUint> {
    MAGNITUDE.with(|m| m.borrow().clone())
}

// =============================================================================
// Viewport
// =============================================================================

/// Current viewport size.
pub fn viewport_size() -> (f64, f64) {
    VIEWPORT.with(|v| v.borrow().get())
}

/// Set the viewport size (called on resize).
pub fn set_viewport_size(width: f64, height: f64) {
    VIEWPORT.with(|v| v.borrow().set((width, height)));
}

/// Get the viewport signal for reactive tracking.
pub fn viewport_signal() -> Signal<(f64, f64)> {
    VIEWPORT.with(|v| v.borrow().clone())
}

/// Use the terminal size, minus the legend row, as the viewport.
///
/// Uses crossterm to query the terminal dimensions. Keeps the current size
/// if the query fails (e.g. output is not a tty).
pub fn detect_viewport_size() {
    match crossterm::terminal::size() {
        Ok((cols, rows)) => {
            let (width, height) = plan_area(cols, rows);
            set_viewport_size(width, height);
        }
        Err(err) => log::debug!("terminal size unavailable: {err}"),
    }
}

/// Back to zero and an 80x24 viewport.
pub fn reset_inputs() {
    set_source(MagnitudeSource::default());
    set_viewport_size(80.0, 24.0);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_roundtrip() {
        reset_inputs();
        set_magnitude(BigUint::from(1234u32));
        assert_eq!(magnitude(), BigUint::from(1234u32));
    }

    #[test]
    fn test_set_magnitude_clamps() {
        reset_inputs();
        set_source(MagnitudeSource::with_max_digits(2));
        set_magnitude(BigUint::from(5_000u32));
        assert_eq!(magnitude(), BigUint::from(99u32));
    }

    #[test]
    fn test_update_magnitude_edits_source() {
        reset_inputs();
        update_magnitude(|s| {
            s.multiply_by_ten();
            s.increment_digit(0);
        });
        assert_eq!(magnitude(), BigUint::from(11u32));
    }

    #[test]
    fn test_viewport_size() {
        reset_inputs();
        assert_eq!(viewport_size(), (80.0, 24.0));
        set_viewport_size(120.0, 40.0);
        assert_eq!(viewport_size(), (120.0, 40.0));
    }
}
