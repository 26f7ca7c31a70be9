//! Diagnostics on stderr.
//!
//! `shapecalc-core` only emits events (the calculator traces every area it
//! computes); this module decides which of them reach the terminal. Areas
//! themselves always go to stdout through [`crate::output`], so logging
//! never mixes with results.
//!
//! | Flag(s)   | `shapecalc` and `shapecalc_core` level |
//! |-----------|----------------------------------------|
//! | `--quiet` | ERROR                                  |
//! | (none)    | WARN                                   |
//! | `-v`      | INFO                                   |
//! | `-vv`     | DEBUG, with event targets              |
//! | `-vvv`    | TRACE, with event targets              |
//!
//! `RUST_LOG` replaces the table entirely when set.

use std::io::IsTerminal as _;

use tracing::Span;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{Commands, GlobalArgs};

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    // At debug and above, show whether an event came from the calculator or
    // from the CLI.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Span wrapping one subcommand, so every event it causes (including the
/// calculator's) is tagged `command{name=...}`.
pub fn command_span(command: &Commands) -> Span {
    tracing::info_span!("command", name = command.name())
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!("shapecalc={level},shapecalc_core={level}")
}
