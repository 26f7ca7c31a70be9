//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No area computation lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use shapecalc_core::domain::{Circle, DomainResult, Rectangle, Square};

pub mod global;
pub mod shape_arg;

pub use global::{GlobalArgs, OutputFormat};
pub use shape_arg::ShapeArg;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shapecalc",
    bin_name = "shapecalc",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Area calculator for rectangles, circles, and squares",
    long_about = "shapecalc computes shape areas through a single generic \
                  calculator that never needs to know which kind it is given.",
    after_help = "EXAMPLES:\n\
        \x20 shapecalc area rectangle --width 4 --height 5\n\
        \x20 shapecalc area circle --radius 2\n\
        \x20 shapecalc total rectangle:4x5 circle:2 square:3\n\
        \x20 shapecalc completions bash > /usr/share/bash-completion/completions/shapecalc",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the area of one shape.
    #[command(
        visible_alias = "a",
        about = "Compute the area of one shape",
        after_help = "EXAMPLES:\n\
            \x20 shapecalc area rectangle --width 4 --height 5\n\
            \x20 shapecalc area circle --radius 2\n\
            \x20 shapecalc area square --side 3"
    )]
    Area(AreaArgs),

    /// Sum the areas of several shapes.
    #[command(
        visible_alias = "t",
        about = "Sum the areas of several shapes",
        after_help = "SHAPES:\n\
            \x20 rectangle:WxH  (aliases: rect, r)\n\
            \x20 circle:R       (alias: c)\n\
            \x20 square:S       (aliases: sq, s)\n\n\
            EXAMPLES:\n\
            \x20 shapecalc total rectangle:4x5 circle:2\n\
            \x20 shapecalc total r:1x2 r:3x4 sq:5"
    )]
    Total(TotalArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shapecalc completions bash > ~/.local/share/bash-completion/completions/shapecalc\n\
            \x20 shapecalc completions zsh  > ~/.zfunc/_shapecalc\n\
            \x20 shapecalc completions fish > ~/.config/fish/completions/shapecalc.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the shapecalc configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shapecalc config get output.precision\n\
            \x20 shapecalc config list\n\
            \x20 shapecalc config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Subcommand name as typed on the command line (aliases resolved).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Area(_) => "area",
            Self::Total(_) => "total",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }
}

// ── area ──────────────────────────────────────────────────────────────────────

/// Arguments for `shapecalc area`.
#[derive(Debug, Args)]
pub struct AreaArgs {
    /// Which kind of shape to measure.
    #[command(subcommand)]
    pub shape: AreaShape,
}

/// Shape kinds accepted by `shapecalc area`.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum AreaShape {
    /// A rectangle with independent width and height.
    #[command(visible_alias = "rect")]
    Rectangle {
        #[arg(short = 'w', long, allow_negative_numbers = true, help = "Rectangle width")]
        width: f64,
        #[arg(short = 'H', long, allow_negative_numbers = true, help = "Rectangle height")]
        height: f64,
    },

    /// A circle.
    Circle {
        #[arg(short = 'r', long, allow_negative_numbers = true, help = "Circle radius")]
        radius: f64,
    },

    /// A square.
    #[command(visible_alias = "sq")]
    Square {
        #[arg(short = 's', long, allow_negative_numbers = true, help = "Side length")]
        side: f64,
    },
}

impl AreaShape {
    /// Build the validated shape these arguments describe.
    pub fn build(self) -> DomainResult<ShapeArg> {
        Ok(match self {
            Self::Rectangle { width, height } => ShapeArg::Rectangle(Rectangle::new(width, height)?),
            Self::Circle { radius } => ShapeArg::Circle(Circle::new(radius)?),
            Self::Square { side } => ShapeArg::Square(Square::new(side)?),
        })
    }
}

// ── total ─────────────────────────────────────────────────────────────────────

/// Arguments for `shapecalc total`.
#[derive(Debug, Args)]
pub struct TotalArgs {
    /// Shapes to sum, as KIND:DIMENSIONS.
    #[arg(
        value_name = "SHAPE",
        required = true,
        num_args = 1..,
        help = "Shapes as KIND:DIMENSIONS (e.g. rectangle:4x5 circle:2)"
    )]
    pub shapes: Vec<ShapeArg>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shapecalc completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shapecalc config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.precision`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_area_rectangle() {
        let cli = Cli::parse_from([
            "shapecalc", "area", "rectangle", "--width", "4", "--height", "5",
        ]);
        match cli.command {
            Commands::Area(AreaArgs {
                shape: AreaShape::Rectangle { width, height },
            }) => assert_eq!((width, height), (4.0, 5.0)),
            other => panic!("expected area rectangle, got {other:?}"),
        }
    }

    #[test]
    fn area_accepts_negative_numbers_for_validation() {
        let cli = Cli::parse_from(["shapecalc", "area", "circle", "--radius", "-2"]);
        let Commands::Area(args) = cli.command else {
            panic!("expected area command");
        };
        assert!(args.shape.build().is_err());
    }

    #[test]
    fn area_build_produces_matching_kind() {
        let shape = AreaShape::Square { side: 3.0 }.build().unwrap();
        assert_eq!(shape.kind(), "square");
    }

    #[test]
    fn parse_total_shapes() {
        let cli = Cli::parse_from(["shapecalc", "total", "rect:4x5", "circle:2"]);
        let Commands::Total(args) = cli.command else {
            panic!("expected total command");
        };
        assert_eq!(args.shapes.len(), 2);
        assert_eq!(args.shapes[0].kind(), "rectangle");
    }

    #[test]
    fn total_rejects_invalid_shape() {
        let result = Cli::try_parse_from(["shapecalc", "total", "rectangle:0x5"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_name_resolves_aliases() {
        let cli = Cli::parse_from(["shapecalc", "t", "square:1"]);
        assert_eq!(cli.command.name(), "total");
    }

    #[test]
    fn parse_completions_powershell() {
        let cli = Cli::parse_from(["shapecalc", "completions", "powershell"]);
        let Commands::Completions(args) = cli.command else {
            panic!("expected completions command");
        };
        assert!(matches!(args.shell, Shell::PowerShell));
    }

    #[test]
    fn total_requires_a_shape() {
        assert!(Cli::try_parse_from(["shapecalc", "total"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["shapecalc", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
