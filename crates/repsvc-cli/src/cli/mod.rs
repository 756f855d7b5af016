//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use repsvc_core::domain::{ContextFormat, DocumentFormat};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "repsvc",
    bin_name = "repsvc",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Expand a replicated service into Service + ReplicationController manifests",
    long_about = "repsvc turns a small context (name, image, replicas, port, labels) \
                  into a document holding a Service and a ReplicationController \
                  that selects the same pods.",
    after_help = "EXAMPLES:\n\
        \x20 repsvc expand web.yaml\n\
        \x20 repsvc expand --name web --image nginx --replicas 3 --container-port 80\n\
        \x20 repsvc expand web.toml --label tier=frontend --external --format json\n\
        \x20 repsvc completions bash > /usr/share/bash-completion/completions/repsvc",
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
    /// Expand a context into a manifest document.
    #[command(
        visible_alias = "x",
        about = "Expand a context into Service and ReplicationController resources",
        after_help = "EXAMPLES:\n\
            \x20 repsvc expand web.yaml\n\
            \x20 cat web.json | repsvc expand - --input-format json\n\
            \x20 repsvc expand --name web --image nginx --replicas 3 --container-port 80 -o web.yaml"
    )]
    Expand(ExpandArgs),

    /// Initialise a repsvc configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 repsvc init\n\
            \x20 repsvc init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 repsvc completions bash > ~/.local/share/bash-completion/completions/repsvc\n\
            \x20 repsvc completions zsh  > ~/.zfunc/_repsvc\n\
            \x20 repsvc completions fish > ~/.config/fish/completions/repsvc.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the repsvc configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 repsvc config get defaults.format\n\
            \x20 repsvc config list\n\
            \x20 repsvc config path"
    )]
    Config(ConfigCommands),
}

// ── expand ────────────────────────────────────────────────────────────────────

/// Arguments for `repsvc expand`.
///
/// Every context flag overrides the matching field of the context file.
#[derive(Debug, Default, Args)]
pub struct ExpandArgs {
    /// Context file; `-` reads standard input.
    #[arg(value_name = "FILE", help = "Context file (YAML, JSON or TOML); '-' for stdin")]
    pub file: Option<PathBuf>,

    /// Format of the context file, when the extension does not tell.
    #[arg(
        long = "input-format",
        value_name = "FORMAT",
        value_enum,
        help = "Context file format (default: from extension, else yaml)"
    )]
    pub input_format: Option<InputFormat>,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Base name of the unit")]
    pub name: Option<String>,

    #[arg(short = 'i', long = "image", value_name = "IMAGE", help = "Container image")]
    pub image: Option<String>,

    #[arg(short = 'r', long = "replicas", value_name = "N", help = "Desired pod count")]
    pub replicas: Option<i32>,

    #[arg(
        short = 'p',
        long = "container-port",
        value_name = "PORT",
        help = "Port the container listens on"
    )]
    pub container_port: Option<i32>,

    #[arg(
        long = "container-name",
        value_name = "NAME",
        help = "Container and port name (default: NAME)"
    )]
    pub container_name: Option<String>,

    #[arg(long = "namespace", value_name = "NAMESPACE", help = "Target namespace (default: default)")]
    pub namespace: Option<String>,

    #[arg(long = "service-port", value_name = "PORT", help = "Port the service exposes")]
    pub service_port: Option<i32>,

    #[arg(long = "target-port", value_name = "PORT", help = "Port traffic is forwarded to")]
    pub target_port: Option<i32>,

    #[arg(long = "protocol", value_name = "PROTOCOL", help = "Port protocol, e.g. TCP or UDP")]
    pub protocol: Option<String>,

    /// Extra label; repeat for more.
    #[arg(
        short = 'l',
        long = "label",
        value_name = "KEY=VALUE",
        value_parser = parse_label,
        help = "Add a label (repeatable)"
    )]
    pub labels: Vec<(String, String)>,

    /// `--external` alone means true; `--external=false` clears a file's
    /// `external_service`.
    #[arg(
        long = "external",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Expose the service through a LoadBalancer"
    )]
    pub external: Option<bool>,

    /// Output format; falls back to `defaults.format` from config.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_enum,
        help = "Document format"
    )]
    pub format: Option<Format>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the document to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Let a custom `name` label replace the generated one.
    #[arg(
        long = "allow-name-label",
        help = "Allow a custom 'name' label to override the generated one"
    )]
    pub allow_name_label: bool,
}

fn parse_label(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("label key is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Document format for `expand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Format {
    #[value(alias = "yml")]
    Yaml,
    Json,
}

impl From<Format> for DocumentFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Yaml => Self::Yaml,
            Format::Json => Self::Json,
        }
    }
}

/// Context file format for `expand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InputFormat {
    #[value(alias = "yml")]
    Yaml,
    Json,
    Toml,
}

impl From<InputFormat> for ContextFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Yaml => Self::Yaml,
            InputFormat::Json => Self::Json,
            InputFormat::Toml => Self::Toml,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `repsvc init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `repsvc completions`.
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

/// Subcommands for `repsvc config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
