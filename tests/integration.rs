// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::mouse::ScrollDelta;
use iced::{Point, Size, Vector};
use iced_image_view::config::{self, Config, InputConfig, ViewConfig, ViewSettings};
use iced_image_view::media::{load_image, ImageData};
use iced_image_view::ui::image_view::{Message, Notification, State};
use iced_image_view::ui::state::NativeGesture;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn image(width: u32, height: u32) -> ImageData {
    ImageData::from_rgba(width, height, vec![255; (width * height * 4) as usize])
}

fn view_with(width: u32, height: u32, widget: Size) -> State {
    let mut state = State::new();
    state.handle_message(Message::Resized(widget));
    state.set_image(image(width, height));
    state
}

fn run_animation(state: &mut State) {
    let start = Instant::now();
    state.handle_message(Message::AnimationTick(start));
    state.handle_message(Message::AnimationTick(start + Duration::from_secs(6)));
}

#[test]
fn reset_scale_never_exceeds_one() {
    for (width, height) in [(10, 10), (499, 399), (500, 400), (2000, 100), (100, 2000)] {
        let mut state = view_with(width, height, Size::new(500.0, 400.0));
        state.zoom(3.5, false);
        state.reset(false);
        assert!(state.scale_factor() <= 1.0, "{width}x{height}");
        assert!(state.scale_factor() > 0.0, "{width}x{height}");
    }
}

#[test]
fn fitted_image_has_margin_on_tighter_axis() {
    let widget = Size::new(500.0, 400.0);
    let mut state = view_with(2000, 1000, widget);
    state.reset(false);

    let drawn_width = 2000.0 * state.scale_factor();
    assert!(drawn_width < widget.width);
    assert_abs_diff_eq!(state.scale_factor(), 0.23, epsilon = 1e-6);
}

#[test]
fn wheel_offsets_stay_within_half_scaled_image() {
    let mut state = view_with(300, 200, Size::new(500.0, 400.0));
    state.zoom(2.0, false);

    for delta in [
        Vector::new(500.0, 0.0),
        Vector::new(-2000.0, 900.0),
        Vector::new(10.0, -5000.0),
    ] {
        state.handle_message(Message::WheelScrolled(ScrollDelta::Pixels {
            x: delta.x,
            y: delta.y,
        }));
        let offset = state.offset();
        assert!(offset.x.abs() <= 300.0);
        assert!(offset.y.abs() <= 200.0);
    }
}

#[test]
fn setter_notifies_once_per_change() {
    let mut state = State::new();
    let notifications: Vec<Notification> = [2.0, 2.0, 3.0]
        .into_iter()
        .filter_map(|scale| state.set_scale_factor(scale))
        .collect();
    assert_eq!(
        notifications,
        vec![
            Notification::ScaleFactorChanged(2.0),
            Notification::ScaleFactorChanged(3.0)
        ]
    );
}

#[test]
fn pinch_stays_in_gesture_range() {
    let mut state = view_with(100, 100, Size::new(500.0, 400.0));
    for delta in [2.0, 2.0, -10.0, 0.3, 5.0] {
        state.handle_message(Message::NativeGesture(NativeGesture::Zoom(delta)));
        assert!((0.05..=4.0).contains(&state.scale_factor()));
    }
}

#[test]
fn touch_pinch_is_continuous_across_finger_changes() {
    let mut state = view_with(100, 100, Size::new(500.0, 400.0));
    state.handle_message(Message::FingerPressed {
        id: 10,
        position: Point::new(100.0, 100.0),
    });
    state.handle_message(Message::FingerPressed {
        id: 11,
        position: Point::new(200.0, 100.0),
    });
    state.handle_message(Message::FingerMoved {
        id: 11,
        position: Point::new(180.0, 100.0),
    });
    let during = state.effective_scale();
    assert_abs_diff_eq!(during, 0.8, epsilon = 1e-5);

    state.handle_message(Message::FingerLifted { id: 10 });
    assert_abs_diff_eq!(state.effective_scale(), during, epsilon = 1e-5);
    assert_abs_diff_eq!(state.scale_factor(), during, epsilon = 1e-5);

    state.handle_message(Message::FingerLifted { id: 11 });
    assert_abs_diff_eq!(state.effective_scale(), during, epsilon = 1e-5);
}

#[test]
fn double_click_restores_fitted_unrotated_view() {
    let mut state = view_with(1000, 800, Size::new(500.0, 400.0));
    state.handle_message(Message::NativeGesture(NativeGesture::Rotate(30.0)));
    state.handle_message(Message::NativeGesture(NativeGesture::Zoom(1.0)));

    state.handle_message(Message::DoubleClicked);
    run_animation(&mut state);

    assert!(!state.is_animating());
    assert_abs_diff_eq!(state.rotation_angle(), 0.0);
    assert_abs_diff_eq!(state.scale_factor(), 0.48, epsilon = 1e-6);
}

#[test]
fn settings_file_drives_view_behaviour() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        view: ViewConfig {
            fit_to_widget: Some(false),
            animation_duration_ms: Some(100),
            smart_zoom_duration_ms: Some(200),
        },
        input: InputConfig {
            zoom_step: Some(2.0),
            wheel_line_pixels: Some(10.0),
            pan_step_pixels: Some(25.0),
        },
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let mut state = State::with_settings(ViewSettings::from(&loaded));
    state.handle_message(Message::Resized(Size::new(100.0, 100.0)));
    state.set_image(image(1000, 1000));
    assert!(!state.fit_to_widget());
    assert_abs_diff_eq!(state.scale_factor(), 1.0);

    state.handle_message(Message::WheelScrolled(ScrollDelta::Lines { x: 1.0, y: 0.0 }));
    assert_eq!(state.offset(), Vector::new(10.0, 0.0));
}

#[test]
fn corrupt_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[view\nfit = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert_eq!(loaded, Config::default());
}

#[test]
fn loaded_png_is_displayed_at_native_size() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("sample.png");
    image_rs_png(&path, 640, 480);

    let loaded = load_image(&path).expect("Failed to load png");
    let mut state = State::new();
    state.handle_message(Message::Resized(Size::new(1000.0, 1000.0)));
    state.set_image(loaded);

    let transform = state.render_transform(Size::new(1000.0, 1000.0));
    assert_eq!(transform.image_size, Size::new(640.0, 480.0));
    assert_abs_diff_eq!(transform.scale, 1.0);
    assert_eq!(transform.translation, Vector::new(500.0, 500.0));
}

/// Writes a blank PNG with the `image` crate.
fn image_rs_png(path: &std::path::Path, width: u32, height: u32) {
    image_rs::RgbaImage::new(width, height)
        .save(path)
        .expect("Failed to write png");
}
