//! bundlecheck CLI entry point.

use std::process::ExitCode;

use bundlecheck::cli::{Cli, CommandDispatcher};
use bundlecheck::shell::is_ci;
use bundlecheck::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for errors that prevented a check from completing.
const ERROR_EXIT_CODE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("bundlecheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bundlecheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// `--quiet` wins over `--verbose`. Normal lets the settings file decide.
fn output_mode(cli: &Cli) -> OutputMode {
    match (cli.quiet, cli.verbose) {
        (true, _) => OutputMode::Quiet,
        (false, true) => OutputMode::Verbose,
        (false, false) => OutputMode::Normal,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("bundlecheck starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => std::env::current_dir().unwrap_or_default(),
    };

    let mut ui = create_ui(!is_ci(), output_mode(&cli));
    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
