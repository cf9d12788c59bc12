//! Command implementations

mod catalog;
mod config;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

pub use catalog::{ListPage, cmd_list, cmd_search, list_page};
pub use config::{cmd_config_path, cmd_config_set_key, cmd_config_show};

/// Write completions for `shell` to stdout
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
