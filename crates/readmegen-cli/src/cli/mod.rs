//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "readmegen",
    bin_name = "readmegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4dd} Professional README files in seconds",
    long_about = "readmegen collects a few facts about your project and \
                  renders them into a ready-to-edit README.md.",
    after_help = "EXAMPLES:\n\
        \x20 readmegen init\n\
        \x20 readmegen generate --name my-tool --template minimal\n\
        \x20 readmegen generate -n my-api -t fancy --feature \"Fast\" --feature \"Small\" --github\n\
        \x20 readmegen templates\n\
        \x20 readmegen completions bash > ~/.local/share/bash-completion/completions/readmegen",
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
    /// Answer a few questions and write a README.
    #[command(
        about = "Create a README interactively",
        after_help = "EXAMPLES:\n\
            \x20 readmegen init\n\
            \x20 readmegen init --output docs/README.md"
    )]
    Init(InitArgs),

    /// Write a README from command-line flags, without prompting.
    #[command(
        visible_alias = "gen",
        about = "Generate a README from flags",
        after_help = "EXAMPLES:\n\
            \x20 readmegen generate\n\
            \x20 readmegen generate -n my-tool -d \"Does one thing well\" -t minimal\n\
            \x20 readmegen generate -n my-lib -l apache-2.0 --feature \"No unsafe\" -o out.md\n\
            \x20 readmegen generate --repo owner/name --github --ai --force"
    )]
    Generate(GenerateArgs),

    /// Show the built-in templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 readmegen templates\n\
            \x20 readmegen templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 readmegen completions bash > ~/.local/share/bash-completion/completions/readmegen\n\
            \x20 readmegen completions zsh  > ~/.zfunc/_readmegen\n\
            \x20 readmegen completions fish > ~/.config/fish/completions/readmegen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Show configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 readmegen config list\n\
            \x20 readmegen config get defaults.template\n\
            \x20 READMEGEN_DEFAULTS__TEMPLATE=fancy readmegen config get defaults.template"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `readmegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the README (default: `README.md`).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: README.md)"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing file without asking")]
    pub force: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `readmegen generate`.
///
/// Every value is optional; omitted ones fall back to configuration, then
/// to what can be learned from the current directory, then to defaults.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Project name (default: current directory's name).
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "One-line project description"
    )]
    pub description: Option<String>,

    /// Template id. Kept as free text so unknown ids surface as a
    /// not-found error rather than an argument error.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template: minimal, standard, or fancy"
    )]
    pub template: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: README.md)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        help = "License: mit, apache-2.0, gpl-3.0, bsd-3-clause, or none"
    )]
    pub license: Option<String>,

    /// Repeat once per feature; order is preserved.
    #[arg(
        long = "feature",
        value_name = "TEXT",
        action = clap::ArgAction::Append,
        help = "Feature bullet (repeatable)"
    )]
    pub features: Vec<String>,

    #[arg(long = "usage", value_name = "TEXT", help = "Usage example")]
    pub usage: Option<String>,

    #[arg(
        long = "repo",
        value_name = "OWNER/NAME",
        help = "GitHub repository (default: the origin remote)"
    )]
    pub repo: Option<String>,

    #[arg(long = "ai", help = "Expand the description with an AI model")]
    pub ai: bool,

    #[arg(long = "github", help = "Pull repository details from GitHub")]
    pub github: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite an existing file")]
    pub force: bool,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `readmegen templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: TemplatesFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplatesFormat {
    /// Cards with description, sections, and a preview.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `readmegen completions`.
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

/// Subcommands for `readmegen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Print all configuration values.
    List,
}

// ── tests ─────────────────────────────────────────────────────────────────────
