// SPDX-License-Identifier: MPL-2.0
//! End-to-end gesture sequences over the viewer component and transform core.

use approx::assert_abs_diff_eq;
use iced::{Point, Size, Vector};
use plan_lens::media::PlanData;
use plan_lens::ui::state::{StageGeometry, StageTransform, TransformOptions, ZoomDirection};
use plan_lens::ui::viewer::component::{Message, State};
use plan_lens::ui::viewer::pane::Event;

fn plan(width: u32, height: u32) -> PlanData {
    PlanData::from_rgba(width, height, vec![0_u8; (width * height * 4) as usize])
}

/// Attach a 400x400 stage and a wide 800x200 plan, the double-click scenario
/// geometry.
fn attached_viewer() -> State {
    let mut viewer = State::default();
    viewer.handle_message(Message::Stage(Event::StageSynced(Size::new(400.0, 400.0))));
    viewer.handle_message(Message::PlanLoaded(Ok(plan(800, 200))));
    viewer
}

#[test]
fn lightbox_session_fit_zoom_drag_reset() {
    let mut viewer = attached_viewer();

    // Enter fitted and centered.
    assert_abs_diff_eq!(viewer.transform().scale, 0.5);
    assert_abs_diff_eq!(viewer.transform().pan.x, 0.0);
    assert_abs_diff_eq!(viewer.transform().pan.y, 150.0);

    // A burst of wheel ticks can never escape the scale bounds.
    for _ in 0..40 {
        viewer.handle_message(Message::Stage(Event::WheelScrolled {
            delta_y: 1.0,
            cursor: Point::new(123.0, 217.0),
        }));
    }
    assert_abs_diff_eq!(viewer.transform().scale, 4.0);

    // Drag while magnified, then reset lands exactly back on the fit.
    viewer.handle_message(Message::Stage(Event::Pressed(Point::new(200.0, 200.0))));
    viewer.handle_message(Message::Stage(Event::Moved(Point::new(140.0, 260.0))));
    viewer.handle_message(Message::Stage(Event::Released));

    viewer.reset_to_fit();
    assert_abs_diff_eq!(viewer.transform().scale, 0.5);
    assert_abs_diff_eq!(viewer.transform().pan.x, 0.0);
    assert_abs_diff_eq!(viewer.transform().pan.y, 150.0);
}

#[test]
fn double_press_toggle_round_trip() {
    let mut viewer = attached_viewer();
    let focal = Point::new(200.0, 200.0);

    viewer.handle_message(Message::Stage(Event::Pressed(focal)));
    viewer.handle_message(Message::Stage(Event::Pressed(focal)));
    assert_abs_diff_eq!(viewer.transform().scale, 2.0);
    assert_abs_diff_eq!(viewer.transform().pan.x, -600.0);
    assert_abs_diff_eq!(viewer.transform().pan.y, 0.0);

    viewer.handle_message(Message::Stage(Event::Pressed(focal)));
    viewer.handle_message(Message::Stage(Event::Pressed(focal)));
    assert_abs_diff_eq!(viewer.transform().scale, 0.5);
    assert_abs_diff_eq!(viewer.transform().pan.x, 0.0);
    assert_abs_diff_eq!(viewer.transform().pan.y, 150.0);
}

#[test]
fn pinch_scenario_scales_around_midpoint() {
    let mut viewer = attached_viewer();

    // Two fingers 100px apart spread to 150px: factor 1.5.
    viewer.handle_message(Message::Stage(Event::FingerPressed {
        id: 10,
        position: Point::new(70.0, 80.0),
    }));
    viewer.handle_message(Message::Stage(Event::FingerPressed {
        id: 11,
        position: Point::new(170.0, 80.0),
    }));
    viewer.handle_message(Message::Stage(Event::FingerMoved {
        id: 11,
        position: Point::new(220.0, 80.0),
    }));

    assert_abs_diff_eq!(viewer.transform().scale, 0.75, epsilon = 1e-4);

    // Lift clears the baseline; the next pinch starts over from factor 1.
    viewer.handle_message(Message::Stage(Event::FingerLifted));
    viewer.handle_message(Message::Stage(Event::FingerPressed {
        id: 12,
        position: Point::new(100.0, 100.0),
    }));
    viewer.handle_message(Message::Stage(Event::FingerPressed {
        id: 13,
        position: Point::new(150.0, 100.0),
    }));
    viewer.handle_message(Message::Stage(Event::FingerMoved {
        id: 13,
        position: Point::new(150.0, 100.0),
    }));
    assert_abs_diff_eq!(viewer.transform().scale, 0.75, epsilon = 1e-4);
}

#[test]
fn oversized_plan_respects_overscroll_margin() {
    let geo = StageGeometry::new(Size::new(300.0, 300.0), Some(Size::new(300.0, 300.0)));
    let mut transform = StageTransform::default();
    transform.fit_to_stage(geo);
    transform.zoom_at(geo, 3.0, geo.stage_center());

    transform.pan_to(geo, Vector::new(9999.0, -9999.0));
    assert_abs_diff_eq!(transform.pan().x, 30.0);
    assert_abs_diff_eq!(transform.pan().y, -630.0);
}

#[test]
fn degenerate_stage_freezes_the_transform() {
    let mut viewer = attached_viewer();
    viewer.handle_message(Message::Stage(Event::WheelScrolled {
        delta_y: 1.0,
        cursor: Point::new(100.0, 100.0),
    }));
    let before = viewer.transform();

    // Stage collapses (e.g. layout glitch): every geometry operation is a
    // no-op until a usable size comes back.
    viewer.handle_message(Message::Stage(Event::StageSynced(Size::new(0.0, 0.0))));
    viewer.handle_message(Message::Stage(Event::WheelScrolled {
        delta_y: 1.0,
        cursor: Point::new(100.0, 100.0),
    }));
    viewer.reset_to_fit();

    assert_abs_diff_eq!(viewer.transform().scale, before.scale);
    assert_abs_diff_eq!(viewer.transform().pan.x, before.pan.x);
    assert_abs_diff_eq!(viewer.transform().pan.y, before.pan.y);
}

#[test]
fn configured_step_drives_wheel_zoom() {
    let options = TransformOptions {
        step: 0.5,
        ..TransformOptions::default()
    };
    let geo = StageGeometry::new(Size::new(400.0, 400.0), Some(Size::new(400.0, 400.0)));
    let mut transform = StageTransform::new(options);
    transform.fit_to_stage(geo);

    transform.step(geo, ZoomDirection::In, None);
    assert_abs_diff_eq!(transform.scale(), 1.5);

    transform.step(geo, ZoomDirection::Out, None);
    assert_abs_diff_eq!(transform.scale(), 0.75);
}

#[test]
fn config_round_trip_feeds_viewer_options() {
    use plan_lens::config::{self, Config, StageTheme};
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        zoom_step: Some(0.25),
        overscroll_margin: Some(60.0),
        theme: Some(StageTheme::Dark),
    };
    config::save_to_path(&saved, &path).expect("failed to save");

    let loaded = config::load_from_path(&path).expect("failed to load");
    let options = TransformOptions {
        step: loaded.zoom_step.expect("step present"),
        overscroll_margin: loaded.overscroll_margin.expect("margin present"),
        ..TransformOptions::default()
    };

    let geo = StageGeometry::new(Size::new(200.0, 200.0), Some(Size::new(200.0, 200.0)));
    let mut transform = StageTransform::new(options);
    transform.fit_to_stage(geo);
    transform.step(geo, ZoomDirection::In, None);
    assert_abs_diff_eq!(transform.scale(), 1.25);

    // The configured 60px margin is honored by the clamp.
    transform.pan_to(geo, Vector::new(9999.0, 0.0));
    assert_abs_diff_eq!(transform.pan().x, 60.0);
}
