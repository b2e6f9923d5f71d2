use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "plugin-scaffold",
    about = "Scaffold plugin marketplaces with a single command",
    version
)]
pub struct Cli {
    /// Enable debug logging and show file contents in dry runs
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print version
    Version,

    /// Create a new plugin marketplace
    New {
        /// Marketplace name (letters, digits, '.', '_' and '-')
        name: String,

        /// Number of plugins to generate (1-10)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        plugins: String,

        /// Generate manifests only, without any optional component
        #[arg(long)]
        minimal: bool,

        #[command(flatten)]
        components: ComponentFlags,

        /// Parent directory to create the marketplace in (default: current directory)
        #[arg(short = 'C', long)]
        directory: Option<PathBuf>,

        /// Show the files that would be created without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

/// Component toggles. Each is unset, `--x` / `--x=true`, or `--x=false`.
#[derive(Args, Debug, Default)]
pub struct ComponentFlags {
    /// Include hooks boilerplate
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub hooks: Option<bool>,

    /// Include commands directory
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub commands: Option<bool>,

    /// Include agents directory
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub agents: Option<bool>,

    /// Include skills directory
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skills: Option<bool>,

    /// Include MCP server config
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub mcp: Option<bool>,

    /// Include bats test scaffold
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub tests: Option<bool>,
}
