#![allow(clippy::float_cmp)]

use super::*;
use crate::skew::SkewState;
use crate::surface::recording::{Call, Recorder};

fn photo(w: f64, h: f64) -> SourceImage<&'static str> {
    SourceImage::new(w, h, "photo")
}

fn red() -> LineStyle {
    LineStyle { color: "red".into(), width: 2.0 }
}

// =============================================================
// Viewport mode
// =============================================================

#[test]
fn viewport_call_order_is_fixed() {
    let mut surface = Recorder::new();
    let viewport = ViewportState { rotation: 0.5, scale: 2.0, offset_x: 10.0, offset_y: -20.0 };
    draw_viewport(
        &mut surface,
        &photo(300.0, 400.0),
        &viewport,
        Size::new(500.0, 500.0),
        &SizingPolicy::Diagonal,
        None,
    )
    .unwrap();

    assert_eq!(
        surface.take(),
        vec![
            Call::Clear,
            Call::Push,
            Call::Translate(250.0, 250.0),
            Call::Rotate(0.5),
            Call::Scale(2.0, 2.0),
            Call::Translate(10.0, -20.0),
            Call::DrawImage {
                image: "photo",
                at: Point::new(-150.0, -200.0),
                size: Some(Size::new(300.0, 400.0)),
            },
            Call::Pop,
        ]
    );
}

#[test]
fn viewport_guides_drawn_after_restore_in_surface_space() {
    let mut surface = Recorder::new();
    let guide = GuideStyle::default();
    draw_viewport(
        &mut surface,
        &photo(300.0, 400.0),
        &ViewportState { rotation: 1.0, ..Default::default() },
        Size::new(500.0, 500.0),
        &SizingPolicy::Diagonal,
        Some(&guide),
    )
    .unwrap();

    let calls = surface.take();
    let tail = &calls[calls.len() - 4..];
    assert_eq!(
        tail,
        &[
            Call::Push,
            Call::StrokeLine { from: Point::new(150.0, 250.0), to: Point::new(350.0, 250.0), style: red() },
            Call::StrokeLine { from: Point::new(250.0, 150.0), to: Point::new(250.0, 350.0), style: red() },
            Call::Pop,
        ]
    );
    // The image transform has been popped before the guide block starts.
    assert_eq!(calls[calls.len() - 5], Call::Pop);
}

#[test]
fn viewport_without_guides_strokes_nothing() {
    let mut surface = Recorder::new();
    draw_viewport(
        &mut surface,
        &photo(10.0, 10.0),
        &ViewportState::default(),
        Size::new(10.0, 10.0),
        &SizingPolicy::Exact,
        None,
    )
    .unwrap();
    assert!(!surface.calls.iter().any(|c| matches!(c, Call::StrokeLine { .. })));
}

#[test]
fn viewport_custom_guide_style() {
    let mut surface = Recorder::new();
    let guide = GuideStyle { color: "#0af".into(), width: 1.0, length: 10.0 };
    draw_viewport(
        &mut surface,
        &photo(40.0, 20.0),
        &ViewportState::default(),
        Size::new(40.0, 20.0),
        &SizingPolicy::Exact,
        Some(&guide),
    )
    .unwrap();
    let style = LineStyle { color: "#0af".into(), width: 1.0 };
    assert!(surface.calls.contains(&Call::StrokeLine {
        from: Point::new(10.0, 10.0),
        to: Point::new(30.0, 10.0),
        style: style.clone(),
    }));
    assert!(surface.calls.contains(&Call::StrokeLine {
        from: Point::new(20.0, 0.0),
        to: Point::new(20.0, 20.0),
        style,
    }));
}

#[test]
fn viewport_fit_then_pad_draws_at_fitted_size() {
    let mut surface = Recorder::new();
    let sizing = SizingPolicy::fit_then_pad();
    let image = photo(1100.0, 550.0);
    let bounds = sizing.compute_bounds(image.size());
    draw_viewport(&mut surface, &image, &ViewportState::default(), bounds, &sizing, None).unwrap();

    let draw = surface.calls.iter().find(|c| matches!(c, Call::DrawImage { .. })).cloned();
    assert_eq!(
        draw,
        Some(Call::DrawImage {
            image: "photo",
            at: Point::new(-275.0, -137.5),
            size: Some(Size::new(550.0, 275.0)),
        })
    );
    assert_eq!(surface.calls[2], Call::Translate(bounds.width / 2.0, bounds.height / 2.0));
}

#[test]
fn viewport_surface_error_propagates() {
    let mut surface = Recorder::failing_on("rotate");
    let err = draw_viewport(
        &mut surface,
        &photo(10.0, 10.0),
        &ViewportState::default(),
        Size::new(10.0, 10.0),
        &SizingPolicy::Exact,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, SurfaceError::Call { call: "rotate", .. }));
    assert!(!surface.calls.iter().any(|c| matches!(c, Call::DrawImage { .. })));
}

// =============================================================
// Tilt mode
// =============================================================

#[test]
fn tilt_call_order_is_fixed() {
    let mut surface = Recorder::new();
    let image = photo(400.0, 200.0);
    let layout = SkewState::new(-0.25, 0.5).layout(image.size());
    draw_tilt(&mut surface, &image, &layout).unwrap();

    assert_eq!(
        surface.take(),
        vec![
            Call::Clear,
            Call::Push,
            Call::Translate(100.0, 100.0),
            Call::Shear(-0.25, 0.5),
            Call::DrawImage { image: "photo", at: Point::new(0.0, 0.0), size: None },
            Call::Pop,
        ]
    );
}

#[test]
fn tilt_zero_skew_is_identity_shear() {
    let mut surface = Recorder::new();
    let image = photo(50.0, 50.0);
    let layout = SkewState::default().layout(image.size());
    draw_tilt(&mut surface, &image, &layout).unwrap();
    assert!(surface.calls.contains(&Call::Translate(0.0, 0.0)));
    assert!(surface.calls.contains(&Call::Shear(0.0, 0.0)));
}

#[test]
fn tilt_redraw_is_identical() {
    let image = photo(640.0, 480.0);
    let layout = SkewState::new(0.3, -0.7).layout(image.size());
    let mut first = Recorder::new();
    let mut second = Recorder::new();
    draw_tilt(&mut first, &image, &layout).unwrap();
    draw_tilt(&mut second, &image, &layout).unwrap();
    assert_eq!(first.calls, second.calls);
}

#[test]
fn tilt_draws_no_guides() {
    let mut surface = Recorder::new();
    let image = photo(10.0, 10.0);
    draw_tilt(&mut surface, &image, &SkewState::new(0.1, 0.1).layout(image.size())).unwrap();
    assert!(!surface.calls.iter().any(|c| matches!(c, Call::StrokeLine { .. })));
}
