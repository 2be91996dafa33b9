// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::image_view;
use iced::keyboard;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ImageView(image_view::Message),
    ImageLoaded(Result<ImageData, Error>),
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    },
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional image path to show on startup.
    pub file_path: Option<String>,
    /// Disables refitting on resize, overriding the settings file.
    pub no_fit: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_IMAGE_VIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
