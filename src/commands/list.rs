use std::io;
use std::path::Path;

use anyhow::Result;

use super::load_config;
use crate::locate::{find_markdown_files, print_listing};

pub fn run_list_command(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?.config;
    let files = find_markdown_files(&config.notes_root, &config.extension)?;

    print_listing(&files, &mut io::stdout().lock())?;
    println!("{} notes in {}", files.len(), config.notes_root.display());
    Ok(())
}
