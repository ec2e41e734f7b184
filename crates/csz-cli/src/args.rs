use clap::{Parser, ValueEnum};
use csz_common::LanguageVersion;
use std::path::PathBuf;

/// CLI arguments for the csz-decls binary.
#[derive(Parser, Debug)]
#[command(
    name = "csz-decls",
    version,
    about = "Build namespace and type declaration trees from csz syntax trees"
)]
pub struct CliArgs {
    /// Syntax tree files (JSON) or directories to scan for `*.json` trees.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path to a `csz.json` configuration file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Parse Option Overrides ====================
    /// Treat every input as a script file.
    #[arg(long)]
    pub script: bool,

    /// Treat every input as an interactive submission (implies --script).
    #[arg(long)]
    pub submission: bool,

    /// Language version used for feature checks (e.g. `7.2`, `10`, `preview`).
    #[arg(long = "lang-version", alias = "langversion")]
    pub lang_version: Option<LanguageVersion>,

    /// Name of the synthesized script class; dots add enclosing namespaces.
    #[arg(long = "script-class-name")]
    pub script_class_name: Option<String>,

    // ==================== Output ====================
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print batch totals after the per-file output.
    #[arg(long)]
    pub stats: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline of each file's declarations.
    Text,
    /// One JSON document covering every input.
    Json,
}
