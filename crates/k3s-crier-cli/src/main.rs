use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use k3s_crier_core::{ChannelClient, Config, LinkStyle, Result};

mod args;
use args::{Cli, Commands, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        handle_completions(shell);
        return ExitCode::SUCCESS;
    }

    let base_dir = resolve_base_dir(cli.base_dir.clone());

    match run_lookup(&cli, &base_dir) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Fetch the channel collection and report the requested channel.
///
/// Returns `Ok(true)` when the channel was found and printed,
/// `Ok(false)` when it is absent from the collection. Fetch, decode
/// and config failures propagate as errors.
fn run_lookup(cli: &Cli, base_dir: &Path) -> Result<bool> {
    let config = Config::load(base_dir)?;

    let url = cli.url.clone().unwrap_or(config.channels_url);
    let name = cli.channel.clone().unwrap_or(config.default_channel);
    let style = if cli.plain {
        LinkStyle::Plain
    } else {
        LinkStyle::detect()
    };

    let collection = ChannelClient::new(url).fetch()?;

    match collection.find(&name) {
        Some(channel) => {
            println!(
                "The latest release of the K3s [{}] channel is: {}",
                channel.id.blue(),
                channel.latest.green()
            );
            println!("Link: {}", style.render(&channel.links.self_link).green());
            Ok(true)
        }
        None => {
            eprintln!("{} {} not found in channels", "[ERROR]".red().bold(), name);
            eprintln!();
            eprintln!("Available channels:");
            if collection.is_empty() {
                eprintln!("  (no channels available)");
            } else {
                for id in collection.channel_ids() {
                    eprintln!("  • {}", id);
                }
            }
            Ok(false)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "k3s-crier", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    dirs::home_dir()
        .map(|h| h.join(".k3s-crier"))
        .unwrap_or_else(|| PathBuf::from(".k3s-crier"))
}
