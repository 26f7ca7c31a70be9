//! Flags shared by every `shapecalc` subcommand.
//!
//! They are flattened into [`super::Cli`] with `global = true`, so
//! `shapecalc area -q circle -r 2` and `shapecalc -q area circle -r 2` mean
//! the same thing.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level: -v info, -vv debug, -vvv trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Only warnings and errors
    -v      - Which command ran and its result
    -vv     - Per-shape areas, with the emitting crate
    -vvv    - Every area the calculator computes"
    )]
    pub verbose: u8,

    /// Print only the computed value, no headers or check marks.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only the computed value"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How areas are rendered. `auto` defers to `output.format` in the config.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Whether error reports should include their full cause chain.
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}

/// How computed areas are rendered.
///
/// Shared by the `--output-format` flag and the `output.format` config key.
/// The config value is matched case-insensitively and an unknown name fails
/// the configuration load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// `Area of circle r=2: 12.566`, coloured.
    Human,
    /// The bare number, one per line.
    Plain,
    /// One JSON document with kinds, dimensions and unrounded areas.
    Json,
}

impl OutputFormat {
    /// The name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Human => "human",
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        <Self as ValueEnum>::from_str(&value, true).map_err(|_| {
            format!("unknown output format '{value}' (expected auto, human, plain or json)")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_names_parse_case_insensitively() {
        assert_eq!(OutputFormat::try_from("JSON".to_string()), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::try_from("plain".to_string()), Ok(OutputFormat::Plain));
    }

    #[test]
    fn unknown_config_name_is_rejected() {
        let err = OutputFormat::try_from("xml".to_string()).unwrap_err();
        assert!(err.contains("'xml'"));
    }

    #[test]
    fn name_matches_clap_value() {
        for format in OutputFormat::value_variants() {
            let value = format.to_possible_value().unwrap();
            assert_eq!(value.get_name(), format.name());
        }
    }
}
