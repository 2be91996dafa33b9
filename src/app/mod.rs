// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single image view.
//!
//! The window shows the image view above a one-line status bar reporting the
//! current scale and rotation. The image named on the command line is loaded
//! in the background after startup.
//!
//! # Examples
//!
//! ```no_run
//! use iced_image_view::app::{self, Flags};
//!
//! let flags = Flags {
//!     file_path: Some("photo.png".into()),
//!     ..Flags::default()
//! };
//! app::run(flags).expect("failed to start the viewer");
//! ```

mod message;
pub mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, ViewSettings};
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::image_view::{self, shortcut_for_key, Notification};
use iced::widget::{column, container, text};
use iced::{window, Element, Length, Subscription, Task};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 500;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 200;
pub const MIN_WINDOW_HEIGHT: u32 = 150;

const APP_TITLE: &str = "Image View";
const STATUS_PADDING: u16 = 4;

/// Root state of the demo application.
pub struct App {
    image_view: image_view::State,
    file_path: Option<String>,
    error: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("file_path", &self.file_path)
            .field("scale_factor", &self.image_view.scale_factor())
            .field("rotation_angle", &self.image_view.rotation_angle())
            .finish()
    }
}

/// Builds the window settings for the demo.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the demo.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed only once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading based on `Flags` received from the launcher.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));

        let mut settings = ViewSettings::from(&config);
        if flags.no_fit {
            settings.fit_to_widget = false;
        }

        let app = App {
            image_view: image_view::State::with_settings(settings),
            file_path: flags.file_path.clone(),
            error: config_warning,
        };

        let task = match flags.file_path {
            Some(path) => {
                log::info!("Loading {path}");
                // Decoding is CPU-bound; keep it off the executor threads.
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || media::load_image(&path))
                            .await
                            .map_err(|e| Error::Io(e.to_string()))?
                    },
                    Message::ImageLoaded,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let file_name = self
            .file_path
            .as_deref()
            .map(std::path::Path::new)
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match file_name {
            Some(name) => format!("{name} - {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.image_view.subscription().map(Message::ImageView),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImageView(message) => {
                let notifications = self.image_view.handle_message(message);
                log_notifications(&notifications);
            }
            Message::ImageLoaded(Ok(image)) => {
                log::info!("Loaded image {}x{}", image.width, image.height);
                self.error = None;
                let notifications = self.image_view.set_image(image);
                log_notifications(&notifications);
            }
            Message::ImageLoaded(Err(err)) => {
                log::error!("Failed to load image: {err}");
                self.error = Some(err.to_string());
                self.image_view.set_image(ImageData::empty());
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) =
                    shortcut_for_key(&key, modifiers, self.image_view.settings())
                {
                    let notifications = self
                        .image_view
                        .handle_message(image_view::Message::Shortcut(shortcut));
                    log_notifications(&notifications);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let status = container(text(self.status_line()).size(13))
            .padding(STATUS_PADDING)
            .width(Length::Fill);

        column![self.image_view.view().map(Message::ImageView), status]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Text of the status bar.
    fn status_line(&self) -> String {
        if let Some(error) = &self.error {
            return error.clone();
        }
        if self.image_view.image().is_empty() {
            return "No image".to_string();
        }
        format!(
            "Scale {:.0}%   Rotation {:.0}°",
            self.image_view.scale_factor() * 100.0,
            self.image_view.rotation_angle()
        )
    }
}

fn log_notifications(notifications: &[Notification]) {
    for notification in notifications {
        match notification {
            Notification::ScaleFactorChanged(scale) => log::trace!("scale factor -> {scale}"),
            Notification::RotationAngleChanged(angle) => log::trace!("rotation angle -> {angle}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, solid_image};
    use iced::keyboard::{self, Key};
    use iced::Size;
    use tempfile::tempdir;

    fn app(no_fit: bool) -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            no_fit,
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        (app, dir)
    }

    #[test]
    fn new_app_fits_by_default() {
        let (app, _dir) = app(false);
        assert!(app.image_view.fit_to_widget());
        assert_eq!(app.status_line(), "No image");
    }

    #[test]
    fn no_fit_flag_overrides_settings() {
        let (app, _dir) = app(true);
        assert!(!app.image_view.fit_to_widget());
    }

    #[test]
    fn title_includes_file_name() {
        let (mut app, _dir) = app(false);
        assert_eq!(app.title(), "Image View");
        app.file_path = Some("/tmp/pictures/cat.png".into());
        assert_eq!(app.title(), "cat.png - Image View");
    }

    #[test]
    fn loaded_image_is_fitted_into_widget() {
        let (mut app, _dir) = app(false);
        let _ = app.update(Message::ImageView(image_view::Message::Resized(
            Size::new(500.0, 400.0),
        )));
        let _ = app.update(Message::ImageLoaded(Ok(solid_image(1000, 400))));

        assert_abs_diff_eq!(app.image_view.scale_factor(), 0.48, epsilon = 1e-6);
        assert_eq!(app.status_line(), "Scale 48%   Rotation 0°");
    }

    #[test]
    fn load_error_is_reported_in_status() {
        let (mut app, _dir) = app(false);
        let _ = app.update(Message::ImageLoaded(Err(Error::Io("missing".into()))));
        assert_eq!(app.status_line(), "I/O Error: missing");
        assert!(app.image_view.image().is_empty());
    }

    #[test]
    fn key_press_routes_to_view_shortcut() {
        let (mut app, _dir) = app(true);
        let _ = app.update(Message::ImageLoaded(Ok(solid_image(100, 100))));
        let _ = app.update(Message::KeyPressed {
            key: Key::Character("+".into()),
            modifiers: keyboard::Modifiers::empty(),
        });
        assert!(app.image_view.is_animating());
    }
}
