//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here and nowhere
//! else. No business logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "scotter",
    bin_name = "scotter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project scaffolding with release and CI pipelines",
    long_about = "Scotter creates projects with a release script and CI workflows, \
                  and keeps them in sync as platforms, architectures, release assets \
                  and pipeline features change.",
    after_help = "EXAMPLES:\n\
        \x20 scotter init my-tool --type cli --ci github --features release\n\
        \x20 scotter add platform freebsd --project my-tool\n\
        \x20 scotter features --resolve release\n\
        \x20 scotter completions bash > /usr/share/bash-completion/completions/scotter",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 scotter init my-lib  --type library\n\
            \x20 scotter init my-tool --type cli --ci github --features release,dependabot\n\
            \x20 scotter init my-svc  --type api --features container --container-format containerfile"
    )]
    Init(InitArgs),

    #[command(
        about = "Add a capability, CI provider or pipeline feature to a project",
        after_help = "EXAMPLES:\n\
            \x20 scotter add platform freebsd\n\
            \x20 scotter add architecture riscv64 --project ./my-tool\n\
            \x20 scotter add ci github\n\
            \x20 scotter add feature changelog"
    )]
    Add(AddArgs),

    #[command(
        visible_alias = "rm",
        about = "Remove a capability or pipeline feature from a project",
        after_help = "EXAMPLES:\n\
            \x20 scotter remove platform windows\n\
            \x20 scotter remove feature dependabot"
    )]
    Remove(RemoveArgs),

    #[command(
        about = "List pipeline features or preview a selection",
        after_help = "EXAMPLES:\n\
            \x20 scotter features\n\
            \x20 scotter features --resolve release,container\n\
            \x20 scotter features --format json"
    )]
    Features(FeaturesArgs),

    #[command(
        visible_alias = "providers",
        about = "List registered language and CI providers"
    )]
    Plugins(PluginsArgs),

    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 scotter config path\n\
            \x20 scotter config get defaults.language\n\
            \x20 scotter config init --force"
    )]
    Config(ConfigCommands),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 scotter completions bash > ~/.local/share/bash-completion/completions/scotter\n\
            \x20 scotter completions zsh  > ~/.zfunc/_scotter\n\
            \x20 scotter completions fish > ~/.config/fish/completions/scotter.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name or path. A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Project type (e.g. default, library, cli, api)"
    )]
    pub project_type: Option<String>,

    #[arg(
        short = 'l',
        long = "language",
        visible_alias = "lang",
        value_name = "LANGUAGE",
        help = "Language provider"
    )]
    pub language: Option<String>,

    #[arg(long = "ci", value_name = "PROVIDER", help = "CI provider")]
    pub ci: Option<String>,

    /// Pipeline features; prerequisites are added automatically.
    #[arg(
        long = "features",
        value_name = "IDS",
        value_delimiter = ',',
        help = "Comma-separated pipeline features"
    )]
    pub features: Vec<String>,

    #[arg(
        long = "container-format",
        value_name = "FORMAT",
        help = "Container build file: dockerfile or containerfile"
    )]
    pub container_format: Option<String>,

    #[arg(
        long = "taskfile",
        overrides_with = "no_taskfile",
        help = "Write a Taskfile.yml (default unless configured off)"
    )]
    pub taskfile: bool,

    #[arg(long = "no-taskfile", help = "Do not write a Taskfile.yml")]
    pub no_taskfile: bool,

    /// Skip seeding the default platforms, architectures and release assets.
    #[arg(long = "no-defaults", help = "Start with empty capability lists")]
    pub no_defaults: bool,

    #[arg(long = "force", help = "Overwrite an existing project record")]
    pub force: bool,
}

// ── add / remove ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(subcommand)]
    pub target: AddTarget,

    #[arg(
        short = 'p',
        long = "project",
        value_name = "DIR",
        default_value = ".",
        global = true,
        help = "Project directory"
    )]
    pub project: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum AddTarget {
    /// Attach a CI provider and generate its workflows.
    Ci { provider: String },
    /// Add a target platform (e.g. linux, darwin, freebsd).
    Platform { value: String },
    /// Add a target architecture (e.g. amd64, arm64).
    Architecture { value: String },
    /// Add a release asset (e.g. checksum, sbom, archive).
    ReleaseAsset { value: String },
    /// Enable a pipeline feature and its prerequisites.
    Feature { id: String },
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[command(subcommand)]
    pub target: RemoveTarget,

    #[arg(
        short = 'p',
        long = "project",
        value_name = "DIR",
        default_value = ".",
        global = true,
        help = "Project directory"
    )]
    pub project: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum RemoveTarget {
    Platform { value: String },
    Architecture { value: String },
    ReleaseAsset { value: String },
    /// Disable a pipeline feature no other enabled feature requires.
    Feature { id: String },
}

// ── features / plugins ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FeaturesArgs {
    /// Show what a selection expands to instead of the catalog.
    #[arg(
        long = "resolve",
        value_name = "IDS",
        value_delimiter = ',',
        help = "Comma-separated selection to resolve"
    )]
    pub resolve: Vec<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Args)]
pub struct PluginsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for list-style commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.language`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a configuration file with the built-in defaults.
    Init {
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_with_features() {
        let cli = Cli::parse_from([
            "scotter",
            "init",
            "demo",
            "--type",
            "cli",
            "--ci",
            "github",
            "--features",
            "release,dependabot",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.name, "demo");
        assert_eq!(args.project_type.as_deref(), Some("cli"));
        assert_eq!(args.features, vec!["release", "dependabot"]);
    }

    #[test]
    fn lang_alias_is_accepted() {
        let cli = Cli::parse_from(["scotter", "init", "demo", "--lang", "go"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.language.as_deref(), Some("go"));
    }

    #[test]
    fn add_release_asset_uses_kebab_case() {
        let cli = Cli::parse_from([
            "scotter",
            "add",
            "release-asset",
            "sbom",
            "--project",
            "/tmp/x",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected Add command");
        };
        assert!(matches!(args.target, AddTarget::ReleaseAsset { ref value } if value == "sbom"));
        assert_eq!(args.project, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn remove_defaults_to_current_directory() {
        let cli = Cli::parse_from(["scotter", "rm", "platform", "windows"]);
        let Commands::Remove(args) = cli.command else {
            panic!("expected Remove command");
        };
        assert_eq!(args.project, PathBuf::from("."));
    }

    #[test]
    fn remove_ci_is_not_a_command() {
        assert!(Cli::try_parse_from(["scotter", "remove", "ci", "github"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["scotter", "--quiet", "--verbose", "plugins"]);
        assert!(result.is_err());
    }
}
