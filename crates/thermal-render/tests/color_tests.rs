//! Tests for the temperature band table and gradient sampling.

use thermal_render::{color_for, gradient, Rgb, TEMP_SCALE_MAX, TEMP_SCALE_MIN};

// ============================================================================
// Band lookup tests
// ============================================================================

#[test]
fn test_below_scale_is_orange() {
    let orange = Rgb::new(235, 131, 52);
    assert_eq!(color_for(0.0), orange);
    assert_eq!(color_for(-273.15), orange);
    assert_eq!(color_for(27.98), orange);
}

#[test]
fn test_at_and_above_scale_top_is_terminal_blue() {
    let terminal = Rgb::new(2, 2, 196);
    assert_eq!(color_for(35.00), terminal);
    assert_eq!(color_for(35.01), terminal);
    assert_eq!(color_for(500.0), terminal);
}

#[test]
fn test_upper_bounds_are_exclusive() {
    // 28.51 sits in the band above, not the one it bounds
    assert_eq!(color_for(28.50), Rgb::new(235, 195, 52));
    assert_eq!(color_for(28.51), Rgb::new(228, 235, 52));
}

#[test]
fn test_scale_bottom_is_in_second_band() {
    // 27.99 fails the strict < 27.99 check, so it lands one band up
    assert_eq!(color_for(TEMP_SCALE_MIN), Rgb::new(235, 195, 52));
}

#[test]
fn test_known_band_interiors() {
    assert_eq!(color_for(30.0), Rgb::new(52, 235, 110)); // mint green
    assert_eq!(color_for(32.0), Rgb::new(52, 177, 235));
    assert_eq!(color_for(34.995), Rgb::new(217, 39, 39)); // narrow red band
}

// ============================================================================
// Gradient sampling tests
// ============================================================================

#[test]
fn test_gradient_length_and_endpoints() {
    let g = gradient(TEMP_SCALE_MIN, TEMP_SCALE_MAX, 256);
    assert_eq!(g.len(), 256);
    assert_eq!(g[0], color_for(TEMP_SCALE_MIN));
    assert_eq!(g[255], color_for(TEMP_SCALE_MAX));
}

#[test]
fn test_gradient_degenerate_step_counts() {
    assert!(gradient(0.0, 1.0, 0).is_empty());

    let one = gradient(30.0, 31.0, 1);
    assert_eq!(one, vec![color_for(30.0)]);
}

#[test]
fn test_gradient_samples_match_direct_lookup() {
    let g = gradient(TEMP_SCALE_MIN, TEMP_SCALE_MAX, 256);
    let span = TEMP_SCALE_MAX - TEMP_SCALE_MIN;
    for (i, &sample) in g.iter().enumerate().take(255) {
        let t = TEMP_SCALE_MIN + span * (i as f32 / 255.0);
        assert_eq!(sample, color_for(t), "sample {} at {}", i, t);
    }
}
