//! End-to-end scenarios: reading, decomposition and plan for fixed magnitudes.

use std::sync::Arc;
use std::thread;

use kazu::layout::{
    LayoutConfig, RenderStrategy, compute_decomposition, compute_render_plan, decompose,
};
use kazu::numeral::format_magnitude;
use kazu::pipeline::LatestPlan;
use kazu::renderer::{FrameBuffer, SHAPE_GLYPH, plan_area, rasterize};
use kazu::source::MagnitudeSource;
use num_bigint::BigUint;
use num_traits::Zero;

fn big(value: u64) -> BigUint {
    BigUint::from(value)
}

fn sections(value: &BigUint, config: &LayoutConfig) -> Vec<(usize, u32)> {
    decompose(value, config)
        .sections
        .iter()
        .map(|s| (s.unit.tier, s.count))
        .collect()
}

fn max_magnitude() -> BigUint {
    BigUint::from(10u32).pow(69) - 1u32
}

#[test]
fn test_zero() {
    let zero = BigUint::zero();
    assert_eq!(format_magnitude(&zero), "ぜろ");
    assert!(compute_decomposition(&zero).is_empty());
    assert!(compute_render_plan(&zero, 800.0, 600.0).is_empty());
}

#[test]
fn test_ten() {
    assert_eq!(format_magnitude(&big(10)), "じゅう");
    assert_eq!(sections(&big(10), &LayoutConfig::default()), vec![(0, 10)]);
}

#[test]
fn test_hundred_elides_one() {
    assert_eq!(format_magnitude(&big(100)), "ひゃく");
}

#[test]
fn test_six_hundred_contracts() {
    assert_eq!(format_magnitude(&big(600)), "ろっぴゃく");
    assert_ne!(format_magnitude(&big(600)), "ろくひゃく");
}

#[test]
fn test_ten_thousand() {
    assert_eq!(format_magnitude(&big(10_000)), "いちまん");

    let default = LayoutConfig::default();
    assert_eq!(sections(&big(10_000), &default), vec![(1, 100)]);

    let coarse = LayoutConfig::default().with_display_threshold(99);
    let decomp = decompose(&big(10_000), &coarse);
    assert_eq!(decomp.len(), 1);
    assert_eq!(decomp.sections[0].unit.label, "1万");
    assert_eq!(decomp.sections[0].count, 1);
}

#[test]
fn test_maximum_magnitude() {
    let max = max_magnitude();

    let reading = format_magnitude(&max);
    assert!(reading.starts_with("きゅうむりょうたいすう きゅうせん"));
    assert!(reading.ends_with("きゅうじゅう きゅう"));
    assert!(!reading.contains('？'));

    let decomp = compute_decomposition(&max);
    assert_eq!(decomp.len(), 34);
    assert_eq!(decomp.total_instances(), 999 + 33 * 99);
    assert_eq!(decomp.reconstruct(), max);

    for (w, h) in [(1.0, 1.0), (80.0, 24.0), (1920.0, 1080.0)] {
        let plan = compute_render_plan(&max, w, h);
        assert!(plan.scale.is_finite() && plan.scale > 0.0);
        assert_eq!(plan.strategy, RenderStrategy::PixelWrites);
    }
}

#[test]
fn test_digit_reel_to_terminal_frame() {
    let mut source = MagnitudeSource::new();
    source.increment_digit(1);
    source.increment_digit(0);
    source.increment_digit(0);
    assert_eq!(source.value(), &big(12));

    let (w, h) = plan_area(60, 20);
    let plan = compute_render_plan(source.value(), w, h);
    let mut buffer = FrameBuffer::new(0, 0);
    rasterize(&plan, &mut buffer);

    let dots = buffer.iter().filter(|(_, _, c)| c.char == SHAPE_GLYPH as u32).count();
    assert_eq!(dots, 12);
    assert_eq!(format_magnitude(source.value()), "じゅう に");
}

#[test]
fn test_resize_racing_magnitude_change_keeps_newest() {
    let latest = Arc::new(LatestPlan::new());

    // A slow worker still holds the ticket for the old magnitude.
    let stale = latest.issue();
    let fresh = latest.issue();

    let workers: Vec<_> = [(stale, 5u64, 100.0), (fresh, 70u64, 200.0)]
        .into_iter()
        .map(|(ticket, value, size)| {
            let latest = Arc::clone(&latest);
            thread::spawn(move || {
                let plan = compute_render_plan(&big(value), size, size);
                latest.publish(ticket, plan)
            })
        })
        .collect();

    let accepted: Vec<bool> = workers.into_iter().map(|w| w.join().unwrap()).collect();
    assert_eq!(accepted, vec![false, true]);

    let plan = latest.take().unwrap();
    assert_eq!(plan.total_instances, 70);
    assert_eq!(plan.viewport, (200.0, 200.0));
}
