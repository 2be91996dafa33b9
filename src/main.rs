// SPDX-License-Identifier: MPL-2.0
use iced_image_view::app::{self, Flags};

const HELP: &str = "\
Usage: iced_image_view [OPTIONS] [IMAGE]

Options:
  --no-fit             Keep the scale when the window is resized
  --config-dir <DIR>   Read settings.toml from DIR
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let no_fit = args.contains("--no-fit");
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --config-dir: {err}");
        None
    });

    let flags = Flags {
        no_fit,
        config_dir,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
