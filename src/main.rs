// SPDX-License-Identifier: MPL-2.0
use iced_glance::app::{self, paths, Flags};
use iced_glance::error::Error;
use iced_glance::media;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const HELP: &str = "\
Usage: iced_glance [OPTIONS] <IMAGE>

Opens IMAGE and lets you browse the other images in its directory.

Options:
  --config-dir <DIR>  Read settings.toml from DIR
  -h, --help          Print this help

Keys: Left/Right previous/next image, Space reset pan.
Mouse: drag to pan, wheel to zoom.";

/// Exit status for usage errors and unusable initial files.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let config_dir: Option<PathBuf> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let Some(file) = args.finish().into_iter().next() else {
        eprintln!("{HELP}");
        return ExitCode::from(EXIT_USAGE);
    };

    let file_path = match media::resolve_initial_file(Path::new(&file)) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("iced_glance: {err}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    paths::init_cli_override(config_dir);

    match app::run(Flags { file_path }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("iced_glance: {}", Error::from(err));
            ExitCode::FAILURE
        }
    }
}
