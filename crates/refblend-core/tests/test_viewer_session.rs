use approx::assert_abs_diff_eq;

use refblend_core::consts::{MAX_SCALE, WHEEL_ZOOM_IN};
use refblend_core::viewer::{
    Point, ScaleLimits, Size, Transform, ViewerCursor, ViewerEvent, ViewerSession, ViewerState,
};

fn loaded_session(image: Size, viewport: Size) -> ViewerSession {
    let mut session = ViewerSession::default();
    session.resize(viewport);
    session.open();
    session.image_loaded(image);
    session
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_new_session_is_unloaded() {
    let session = ViewerSession::default();
    assert_eq!(session.state(), ViewerState::Unloaded);
    assert!(!session.has_source());
    assert_eq!(session.cursor(), ViewerCursor::Default);
}

#[test]
fn test_load_fits_to_view() {
    let session = loaded_session(Size::new(1600.0, 400.0), Size::new(800.0, 600.0));
    assert_eq!(session.state(), ViewerState::FittedView);
    assert_eq!(session.transform(), Transform::new(0.0, 200.0, 0.5));
    assert_eq!(session.initial_transform(), session.transform());
}

#[test]
fn test_load_before_viewport_known() {
    let mut session = ViewerSession::default();
    session.open();
    session.image_loaded(Size::new(1000.0, 1000.0));
    assert_eq!(session.state(), ViewerState::Unloaded);

    session.resize(Size::new(500.0, 500.0));
    assert_eq!(session.state(), ViewerState::FittedView);
    assert_abs_diff_eq!(session.transform().scale, 0.5);
}

#[test]
fn test_operations_are_noops_while_loading() {
    let mut session = ViewerSession::default();
    session.resize(Size::new(800.0, 600.0));
    session.open();

    assert!(!session.zoom_in());
    assert!(!session.zoom_at(2.0, Some(Point::new(10.0, 10.0))));
    assert!(!session.begin_pan(Point::new(5.0, 5.0)));
    assert!(!session.pan_to(Point::new(50.0, 50.0)));
    assert_eq!(session.transform(), Transform::IDENTITY);
    assert_eq!(session.state(), ViewerState::Unloaded);
}

#[test]
fn test_failed_load_stays_unloaded() {
    let mut session = ViewerSession::default();
    session.resize(Size::new(800.0, 600.0));
    session.open();
    session.image_failed();
    assert_eq!(session.state(), ViewerState::Unloaded);
    assert!(session.image_dimensions().is_none());
    assert!(!session.zoom_in());
}

#[test]
fn test_zero_sized_image_treated_as_failure() {
    let mut session = ViewerSession::default();
    session.resize(Size::new(800.0, 600.0));
    session.open();
    session.image_loaded(Size::new(0.0, 0.0));
    assert_eq!(session.state(), ViewerState::Unloaded);
    assert!(session.transform().is_finite());
}

#[test]
fn test_zero_viewport_produces_no_nan() {
    let mut session = loaded_session(Size::new(1000.0, 800.0), Size::new(800.0, 600.0));
    session.resize(Size::new(0.0, 0.0));
    assert_eq!(session.state(), ViewerState::Unloaded);
    assert!(!session.zoom_in());
    assert!(session.transform().is_finite());

    session.resize(Size::new(400.0, 400.0));
    assert_eq!(session.state(), ViewerState::FittedView);
}

#[test]
fn test_close_clears_state() {
    let mut session = loaded_session(Size::new(1000.0, 800.0), Size::new(800.0, 600.0));
    session.zoom_in();
    session.close();
    assert_eq!(session.state(), ViewerState::Unloaded);
    assert!(!session.has_source());
    assert!(session.image_dimensions().is_none());
    assert_eq!(session.transform(), Transform::IDENTITY);
}

#[test]
fn test_new_source_replaces_previous() {
    let mut session = loaded_session(Size::new(1000.0, 800.0), Size::new(800.0, 600.0));
    session.zoom_in();

    session.open();
    assert_eq!(session.state(), ViewerState::Unloaded);
    session.image_loaded(Size::new(200.0, 100.0));
    assert_eq!(session.state(), ViewerState::FittedView);
    assert_eq!(session.transform(), Transform::new(300.0, 250.0, 1.0));
}

#[test]
fn test_image_loaded_without_source_ignored() {
    let mut session = ViewerSession::default();
    session.resize(Size::new(800.0, 600.0));
    session.image_loaded(Size::new(100.0, 100.0));
    assert_eq!(session.state(), ViewerState::Unloaded);
}

// ---------------------------------------------------------------------------
// Zoom, reset, resize
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_moves_to_user_transformed_and_reset_restores() {
    let mut session = loaded_session(Size::new(2000.0, 1500.0), Size::new(800.0, 600.0));
    let fit = session.transform();

    assert!(session.zoom_in());
    assert_eq!(session.state(), ViewerState::UserTransformed);
    assert_abs_diff_eq!(session.transform().scale, fit.scale * 1.2, epsilon = 1e-5);

    session.reset();
    assert_eq!(session.state(), ViewerState::FittedView);
    assert_eq!(session.transform(), fit);
}

#[test]
fn test_resize_discards_user_zoom() {
    let mut session = loaded_session(Size::new(2000.0, 1500.0), Size::new(800.0, 600.0));
    session.zoom_at(3.0, Some(Point::new(100.0, 100.0)));
    assert_eq!(session.state(), ViewerState::UserTransformed);

    session.resize(Size::new(1000.0, 750.0));
    assert_eq!(session.state(), ViewerState::FittedView);
    assert_eq!(session.transform(), Transform::new(0.0, 0.0, 0.5));
}

#[test]
fn test_zoom_buttons_respect_limits() {
    let mut session = loaded_session(Size::new(100.0, 100.0), Size::new(800.0, 600.0));
    for _ in 0..50 {
        session.zoom_in();
    }
    assert_eq!(session.transform().scale, MAX_SCALE);
    assert!(!session.can_zoom_in());
    assert!(!session.zoom_in());
    assert!(session.can_zoom_out());
}

#[test]
fn test_zoom_from_fit_below_min_scale_snaps_to_min() {
    // Fitting needs 0.05, below the 0.1 floor.
    let mut session = loaded_session(Size::new(16000.0, 12000.0), Size::new(800.0, 600.0));
    assert_abs_diff_eq!(session.transform().scale, 0.05, epsilon = 1e-6);
    assert!(!session.can_zoom_out());

    assert!(session.zoom_at(1.1, Some(Point::new(400.0, 300.0))));
    assert_abs_diff_eq!(session.transform().scale, 0.1, epsilon = 1e-6);
    assert_eq!(session.state(), ViewerState::UserTransformed);

    for _ in 0..20 {
        session.zoom_out();
    }
    assert_abs_diff_eq!(session.transform().scale, 0.1, epsilon = 1e-6);

    session.reset();
    assert_abs_diff_eq!(session.transform().scale, 0.05, epsilon = 1e-6);
    assert_eq!(session.state(), ViewerState::FittedView);
}

#[test]
fn test_custom_limits() {
    let mut session = ViewerSession::new(ScaleLimits { min: 0.5, max: 2.0 });
    session.resize(Size::new(800.0, 600.0));
    session.open();
    session.image_loaded(Size::new(1600.0, 1200.0));
    session.zoom_at(100.0, None);
    assert_eq!(session.transform().scale, 2.0);
}

#[test]
fn test_invalid_limits_fall_back_to_defaults() {
    let session = ViewerSession::new(ScaleLimits { min: 3.0, max: 1.0 });
    assert_eq!(session.limits(), ScaleLimits::default());
}

// ---------------------------------------------------------------------------
// Drag panning
// ---------------------------------------------------------------------------

#[test]
fn test_pan_not_started_when_image_fits() {
    let mut session = loaded_session(Size::new(400.0, 300.0), Size::new(800.0, 600.0));
    assert!(!session.is_pannable());
    assert!(!session.begin_pan(Point::new(400.0, 300.0)));
    assert!(!session.is_panning());
    assert!(!session.pan_to(Point::new(500.0, 400.0)));
    assert_eq!(session.state(), ViewerState::FittedView);
}

#[test]
fn test_drag_is_relative_to_start() {
    let mut session = loaded_session(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
    session.zoom_at(2.0, Some(Point::new(250.0, 250.0)));
    let start = session.transform();
    assert_eq!(session.cursor(), ViewerCursor::Grab);

    assert!(session.begin_pan(Point::new(100.0, 100.0)));
    assert_eq!(session.cursor(), ViewerCursor::Grabbing);

    session.pan_to(Point::new(120.0, 90.0));
    session.pan_to(Point::new(130.0, 80.0));
    // Second move is measured from the press, not from the first move.
    assert_abs_diff_eq!(session.transform().x, start.x + 30.0, epsilon = 1e-4);
    assert_abs_diff_eq!(session.transform().y, start.y - 20.0, epsilon = 1e-4);

    assert!(session.end_pan());
    assert!(!session.is_panning());
    assert!(!session.pan_to(Point::new(0.0, 0.0)));
}

#[test]
fn test_drag_clamped_to_edges() {
    let mut session = loaded_session(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
    session.zoom_at(2.0, Some(Point::new(250.0, 250.0)));

    session.begin_pan(Point::new(0.0, 0.0));
    session.pan_to(Point::new(10_000.0, 10_000.0));
    assert_eq!(session.transform().position(), Point::new(0.0, 0.0));

    session.pan_to(Point::new(-10_000.0, -10_000.0));
    assert_eq!(session.transform().position(), Point::new(-500.0, -500.0));
}

#[test]
fn test_resize_ends_drag() {
    let mut session = loaded_session(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
    session.zoom_in();
    session.begin_pan(Point::new(10.0, 10.0));
    session.resize(Size::new(600.0, 600.0));
    assert!(!session.is_panning());
}

// ---------------------------------------------------------------------------
// Event adapter
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_zooms_at_pointer() {
    let mut session = loaded_session(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
    let fit = session.transform();
    let pos = Point::new(120.0, 80.0);

    assert!(session.handle(ViewerEvent::Wheel {
        delta_y: -3.0,
        pos: Some(pos)
    }));
    let t = session.transform();
    assert_abs_diff_eq!(t.scale, fit.scale * WHEEL_ZOOM_IN, epsilon = 1e-6);
    let before = fit.invert(pos).unwrap();
    let after = t.invert(pos).unwrap();
    assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-3);
    assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-3);

    assert!(session.handle(ViewerEvent::Wheel {
        delta_y: 3.0,
        pos: Some(pos)
    }));
    assert_abs_diff_eq!(session.transform().scale, fit.scale, epsilon = 1e-5);
}

#[test]
fn test_zero_wheel_ignored() {
    let mut session = loaded_session(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
    assert!(!session.handle(ViewerEvent::Wheel {
        delta_y: 0.0,
        pos: None
    }));
}

#[test]
fn test_event_sequence_drag() {
    let mut session = loaded_session(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
    session.handle(ViewerEvent::ZoomInButton);
    session.handle(ViewerEvent::ZoomInButton);
    let start = session.transform();

    assert!(session.handle(ViewerEvent::PointerDown {
        pos: Point::new(200.0, 200.0)
    }));
    session.handle(ViewerEvent::PointerMove {
        pos: Point::new(210.0, 195.0),
    });
    assert!(session.handle(ViewerEvent::PointerUp));
    assert_abs_diff_eq!(session.transform().x, start.x + 10.0, epsilon = 1e-4);
    assert_abs_diff_eq!(session.transform().y, start.y - 5.0, epsilon = 1e-4);

    assert!(session.handle(ViewerEvent::ResetButton));
    assert_eq!(session.state(), ViewerState::FittedView);
    assert!(!session.handle(ViewerEvent::ResetButton));
}

#[test]
fn test_resize_event_refits() {
    let mut session = loaded_session(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
    session.handle(ViewerEvent::ZoomOutButton);
    assert!(session.handle(ViewerEvent::Resize(Size::new(250.0, 250.0))));
    assert_eq!(session.transform(), Transform::new(0.0, 0.0, 0.25));
}
