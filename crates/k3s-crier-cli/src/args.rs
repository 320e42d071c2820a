use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "k3s-crier")]
#[command(about = "Find the latest release of a K3s update channel")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Channel to look up (default: stable)
    pub channel: Option<String>,

    /// Channel endpoint to query instead of the configured one
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Print the link as a bare URL even on a terminal
    #[arg(long)]
    pub plain: bool,

    /// Base directory (default: ~/.k3s-crier)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
