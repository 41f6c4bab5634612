//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value parsers.  No validation logic lives here.

use std::path::PathBuf;

use clap::{
    Args, Parser, Subcommand, ValueEnum,
    builder::{PossibleValue, PossibleValuesParser, TypedValueParser},
};
use namecheck_core::domain::NameKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "namecheck",
    bin_name = "namecheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate names, slugs, and asset keys",
    long_about = "namecheck applies the name and key rules of the orchestration \
                  data model to candidate values before they are submitted.",
    after_help = "EXAMPLES:\n\
        \x20 namecheck check block-document-name my-block\n\
        \x20 namecheck check asset-key s3://bucket/folder/data.csv\n\
        \x20 cat keys.txt | namecheck check asset-key --output-format json\n\
        \x20 namecheck kinds",
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
    /// Validate one or more values as a given kind.
    #[command(
        visible_alias = "c",
        about = "Validate values",
        after_help = "EXAMPLES:\n\
            \x20 namecheck check variable-name my_var other_var\n\
            \x20 namecheck check uri-like postgres://dbtable --field \"Dataset key\"\n\
            \x20 namecheck check asset-key - < keys.txt"
    )]
    Check(CheckArgs),

    /// List the supported kinds.
    #[command(
        visible_alias = "ls",
        about = "List supported kinds",
        after_help = "EXAMPLES:\n\
            \x20 namecheck kinds\n\
            \x20 namecheck kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 namecheck completions bash > ~/.local/share/bash-completion/completions/namecheck\n\
            \x20 namecheck completions zsh  > ~/.zfunc/_namecheck\n\
            \x20 namecheck completions fish > ~/.config/fish/completions/namecheck.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 namecheck config get check.field\n\
            \x20 namecheck config list\n\
            \x20 namecheck config init"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `namecheck check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Which rule set to apply.
    #[arg(
        value_name = "KIND",
        value_parser = kind_parser(),
        ignore_case = true,
        help = "Kind of value to validate"
    )]
    pub kind: NameKind,

    /// Values to check. With none, or a single `-`, values are read one per
    /// line from stdin.
    #[arg(value_name = "VALUE", help = "Values to validate (`-` reads stdin)")]
    pub values: Vec<String>,

    /// Label used in error messages instead of the kind's own.
    #[arg(
        short = 'f',
        long = "field",
        value_name = "LABEL",
        help = "Field label used in error messages"
    )]
    pub field: Option<String>,

    /// Stop at the first rejected value.
    #[arg(long = "fail-fast", help = "Stop at the first rejected value")]
    pub fail_fast: bool,
}

/// Parses a kind from its kebab-case name or one of its aliases. The
/// possible values feed `--help` and shell completions.
fn kind_parser() -> impl TypedValueParser<Value = NameKind> {
    PossibleValuesParser::new(NameKind::ALL.map(|kind| {
        PossibleValue::new(kind.as_str())
            .aliases(kind.aliases().iter().copied())
            .help(kind.description())
    }))
    .try_map(|name| name.parse::<NameKind>())
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `namecheck kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `namecheck completions`.
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
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `namecheck config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `check.field`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,

        /// Write here instead of the default location.
        #[arg(value_name = "PATH", help = "Destination file")]
        path: Option<PathBuf>,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
