//! Flags shared by every `scotter` subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more to stderr (-v, -vv, -vvv)",
        long_help = "Log more to stderr. RUST_LOG, when set, takes precedence.
    (none)  skipped default values and unknown generators
    -v      projects created, capabilities added or removed
    -vv     files written, providers replaced, log targets
    -vvv    everything"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing but errors (JSON listings still print)"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>) and by
    /// `output.no_color` in the config file.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Tool configuration file (TOML)",
        long_help = "Tool configuration file (TOML). Must exist when given. \
            Without it the per-user file from `scotter config path` is read if present; \
            SCOTTER__SECTION__KEY environment variables override either."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output style; json applies to `features` and `plugins`"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured status symbols.
    Human,
    /// No colour; stable for scripts.
    Plain,
    /// Listings as JSON documents.
    Json,
}
