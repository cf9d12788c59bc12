use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use reelview::cli::{Cli, Commands, ConfigCommands};
use reelview::commands::{
    cmd_completions, cmd_config_path, cmd_config_set_key, cmd_config_show, cmd_list, cmd_search,
};
use reelview::logging::{self, LogTarget};
use reelview::{ReelConfig, TmdbClient, tui};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(target)?;

    match command {
        Commands::Tui => {
            let config = ReelConfig::load()?;
            tui::run(&config)
        }
        Commands::List {
            section,
            page,
            page_size,
        } => {
            let config = ReelConfig::load()?;
            let client = client(&config)?;
            let page_size = page_size.unwrap_or(config.carousel.page_size);
            cmd_list(&client, section, page, page_size)
        }
        Commands::Search { keyword, kind } => {
            let config = ReelConfig::load()?;
            let client = client(&config)?;
            cmd_search(&client, &keyword, kind)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => cmd_config_show(),
            ConfigCommands::SetKey { key } => cmd_config_set_key(&key),
            ConfigCommands::Path => cmd_config_path(),
        },
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn client(config: &ReelConfig) -> Result<TmdbClient> {
    TmdbClient::from_config(config).context("Cannot reach TMDB")
}
