mod config;
mod init;
mod list;
mod publish;

use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{Cli, Command};
use crate::config::{ResolvedConfig, resolve_config};
use crate::utils::expand_tilde;

pub fn run(app: Cli) -> Result<()> {
    let config_path = app.config.as_deref().map(expand_tilde);

    match app.command {
        Command::Publish(args) => publish::run_publish_command(args, config_path.as_deref()),
        Command::List => list::run_list_command(config_path.as_deref()),
        Command::Config(args) => config::run_config_command(args, config_path.as_deref()),
        Command::Init(args) => init::run_init_command(args),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    resolve_config(explicit, &cwd)
}
