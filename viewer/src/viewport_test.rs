#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn zoom() -> ZoomConfig {
    ZoomConfig::default()
}

// --- Defaults / reset ---

#[test]
fn default_is_identity() {
    let v = ViewportState::default();
    assert_eq!(v.rotation, 0.0);
    assert_eq!(v.scale, 1.0);
    assert_eq!(v.offset_x, 0.0);
    assert_eq!(v.offset_y, 0.0);
}

#[test]
fn reset_restores_identity_from_any_state() {
    let mut v = ViewportState { rotation: 7.5, scale: 3.2, offset_x: -40.0, offset_y: 12.0 };
    v.reset();
    assert_eq!(v, ViewportState::default());
}

// --- Rotation ---

#[test]
fn rotate_by_accumulates_without_wrapping() {
    let mut v = ViewportState::default();
    for _ in 0..10 {
        v.rotate_by(1.0);
    }
    assert!(approx_eq(v.rotation, 10.0));
}

#[test]
fn rotate_by_leaves_pan_and_scale() {
    let mut v = ViewportState { rotation: 0.0, scale: 2.0, offset_x: 5.0, offset_y: 6.0 };
    v.rotate_by(0.3);
    assert_eq!(v.scale, 2.0);
    assert_eq!(v.offset_x, 5.0);
    assert_eq!(v.offset_y, 6.0);
}

// --- Pan ---

#[test]
fn pan_at_unit_scale_is_screen_delta() {
    let mut v = ViewportState::default();
    v.pan_by(10.0, -4.0);
    assert_eq!(v.offset_x, 10.0);
    assert_eq!(v.offset_y, -4.0);
}

#[test]
fn pan_is_divided_by_scale() {
    let mut v = ViewportState { scale: 2.0, ..Default::default() };
    v.pan_by(10.0, -4.0);
    assert_eq!(v.offset_x, 5.0);
    assert_eq!(v.offset_y, -2.0);
}

#[test]
fn pan_leaves_rotation() {
    let mut v = ViewportState { rotation: 1.25, ..Default::default() };
    v.pan_by(3.0, 3.0);
    assert_eq!(v.rotation, 1.25);
}

// --- Zoom ---

#[test]
fn wheel_down_zooms_out() {
    let mut v = ViewportState::default();
    v.zoom_step(10.0, &zoom());
    assert!(approx_eq(v.scale, 0.95));
}

#[test]
fn wheel_up_zooms_in() {
    let mut v = ViewportState::default();
    v.zoom_step(-10.0, &zoom());
    assert!(approx_eq(v.scale, 1.05));
}

#[test]
fn wheel_zero_delta_zooms_in() {
    let mut v = ViewportState::default();
    v.zoom_step(0.0, &zoom());
    assert!(approx_eq(v.scale, 1.05));
}

#[test]
fn wheel_step_ignores_magnitude() {
    let mut small = ViewportState::default();
    let mut large = ViewportState::default();
    small.zoom_step(1.0, &zoom());
    large.zoom_step(500.0, &zoom());
    assert_eq!(small.scale, large.scale);
}

#[test]
fn opposite_ticks_do_not_cancel() {
    let mut v = ViewportState::default();
    v.zoom_step(10.0, &zoom());
    v.zoom_step(-10.0, &zoom());
    assert_ne!(v.scale, 1.0);
    assert!(approx_eq(v.scale, 0.95 * 1.05));
    assert!(v.scale < 1.0);
}

#[test]
fn zoom_clamps_at_max() {
    let mut v = ViewportState::default();
    for _ in 0..200 {
        v.zoom_step(-1.0, &zoom());
    }
    assert_eq!(v.scale, 5.0);
}

#[test]
fn zoom_clamps_at_min() {
    let mut v = ViewportState::default();
    for _ in 0..200 {
        v.zoom_step(1.0, &zoom());
    }
    assert_eq!(v.scale, 0.5);
}

#[test]
fn zoom_stays_in_bounds_for_mixed_sequences() {
    let mut v = ViewportState::default();
    // Deterministic pseudo-random walk of wheel directions.
    let mut seed: u32 = 0x9e37_79b9;
    for _ in 0..5000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let dy = if seed % 3 == 0 { 1.0 } else { -1.0 };
        v.zoom_step(dy, &zoom());
        assert!((0.5..=5.0).contains(&v.scale), "scale escaped clamp: {}", v.scale);
    }
}

#[test]
fn zoom_respects_custom_clamp() {
    let custom = ZoomConfig { min_scale: 0.9, max_scale: 1.1, ..ZoomConfig::default() };
    let mut v = ViewportState::default();
    for _ in 0..10 {
        v.zoom_step(-1.0, &custom);
    }
    assert_eq!(v.scale, 1.1);
    for _ in 0..10 {
        v.zoom_step(1.0, &custom);
    }
    assert_eq!(v.scale, 0.9);
}

#[test]
fn zoom_leaves_rotation_and_pan() {
    let mut v = ViewportState { rotation: 0.7, scale: 1.0, offset_x: 3.0, offset_y: -3.0 };
    v.zoom_step(-1.0, &zoom());
    assert_eq!(v.rotation, 0.7);
    assert_eq!(v.offset_x, 3.0);
    assert_eq!(v.offset_y, -3.0);
}
