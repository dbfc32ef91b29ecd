//! Properties of the pointer ↔ value mapping and the color conversions.

use floem_hsva::{position_to_value, value_to_offset, ColorAxis, Hsva, Rgba, SliderGeometry};
use proptest::prelude::*;

// ── Strategies ───────────────────────────────────────────────────────

/// Geometries with room to travel: `track_width > indicator_size > 0`.
fn arb_geometry() -> impl Strategy<Value = (f64, f64)> {
    (1.0f64..100.0, 0.5f64..1000.0).prop_map(|(size, extra)| (size + extra, size))
}

fn arb_rgba8() -> impl Strategy<Value = (u8, u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn value_stays_normalized_on_track(
        (width, size) in arb_geometry(),
        frac in 0.0f64..=1.0,
    ) {
        let v = position_to_value(frac * width, width, size);
        prop_assert!(!v.is_nan());
        prop_assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn value_stays_normalized_for_any_input(
        x in any::<f64>(),
        width in any::<f64>(),
        size in any::<f64>(),
    ) {
        let v = position_to_value(x, width, size);
        prop_assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn offset_inverts_position_within_travel(
        (width, size) in arb_geometry(),
        frac in 0.0f64..=1.0,
    ) {
        let half = size / 2.0;
        let x = half + frac * (width - size);
        let back = value_to_offset(position_to_value(x, width, size), width, size);
        prop_assert!((back - x).abs() < 1e-9 * width.max(1.0));
    }

    #[test]
    fn pointer_outside_travel_pins_to_the_end(
        (width, size) in arb_geometry(),
        overshoot in 1.0f64..500.0,
    ) {
        let g = SliderGeometry::new(width, size);
        prop_assert_eq!(g.position_to_value(size / 2.0 - overshoot), 0.0);
        prop_assert_eq!(g.position_to_value(width - size / 2.0 + overshoot), 1.0);
    }

    #[test]
    fn narrow_track_is_deterministic(
        width in 0.0f64..50.0,
        extra in 0.0f64..50.0,
        x in -100.0f64..100.0,
    ) {
        prop_assert_eq!(position_to_value(x, width, width + extra), 0.0);
    }

    #[test]
    fn hsva_round_trips_8bit_colors((r, g, b, a) in arb_rgba8()) {
        let color = Rgba::from_rgba8(r, g, b, a);
        let back = Hsva::from_rgba(color).to_rgba();
        prop_assert_eq!(back.to_rgba8(), (r, g, b, a));
    }

    #[test]
    fn axis_writes_read_back(t in 0.0f64..=1.0, (r, g, b, a) in arb_rgba8()) {
        let hsva = Hsva::from_rgba(Rgba::from_rgba8(r, g, b, a));
        for axis in ColorAxis::ALL {
            let moved = axis.with_normalized(hsva, t);
            prop_assert!((axis.normalized(&moved) - t).abs() < 1e-12);
        }
    }
}

#[test]
fn track_narrower_than_indicator_reads_zero() {
    assert_eq!(position_to_value(5.0, 10.0, 20.0), 0.0);
    assert_eq!(position_to_value(0.0, 10.0, 20.0), 0.0);
    assert_eq!(position_to_value(10.0, 10.0, 20.0), 0.0);
}
