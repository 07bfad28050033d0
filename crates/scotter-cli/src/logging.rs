//! Diagnostics on stderr.
//!
//! The binary is the only place a subscriber is installed. Everything the
//! workspace logs comes from three targets, and the verbosity flags set one
//! level for all of them:
//!
//! | Flag(s)   | Level | What shows up                                        |
//! |-----------|-------|------------------------------------------------------|
//! | `--quiet` | ERROR | failures only                                        |
//! | (none)    | WARN  | skipped seed values, features without a generator    |
//! | `-v`      | INFO  | each project created, capability added or removed    |
//! | `-vv`     | DEBUG | provider replacement, files written, event targets   |
//! | `-vvv`    | TRACE | everything                                           |
//!
//! `RUST_LOG` replaces the whole filter when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events the verbosity flags control.
const TARGETS: &[&str] = &["scotter", "scotter_core", "scotter_adapters"];

/// Install the stderr subscriber. Call once, before any event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `off` for everything else, `level` for the workspace crates.
fn default_filter(level: LevelFilter) -> EnvFilter {
    TARGETS
        .iter()
        .filter_map(|target| format!("{target}={level}").parse::<Directive>().ok())
        .fold(EnvFilter::new("off"), EnvFilter::add_directive)
}

fn derive_level(args: &GlobalArgs) -> LevelFilter {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(derive_level(&args_with(0, false)), LevelFilter::WARN);
        assert_eq!(derive_level(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(derive_level(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(derive_level(&args_with(10, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn default_filter_covers_every_workspace_crate() {
        let rendered = default_filter(LevelFilter::DEBUG).to_string().to_lowercase();
        for target in TARGETS {
            assert!(rendered.contains(&format!("{target}=debug")), "{rendered}");
        }
    }
}
