use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE_NAME, Config};

pub fn run_init_command(args: InitArgs) -> Result<()> {
    let root = env::current_dir().context("failed to resolve current directory")?;
    let destination = root.join(CONFIG_FILE_NAME);

    if seed_configuration(&destination, args.force)? {
        println!("Wrote {}", destination.display());
    } else {
        println!(
            "{} already exists; pass --force to overwrite it",
            destination.display()
        );
    }
    Ok(())
}

/// Writes the default configuration, returning whether the file was written.
fn seed_configuration(destination: &Path, force: bool) -> Result<bool> {
    if destination.exists() && !force {
        return Ok(false);
    }
    if let Some(parent) = destination.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Config::default().save(destination)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        assert!(seed_configuration(&path, false).unwrap());
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn existing_file_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "extension: markdown\n").unwrap();

        assert!(!seed_configuration(&path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "extension: markdown\n");
    }

    #[test]
    fn force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "extension: markdown\n").unwrap();

        assert!(seed_configuration(&path, true).unwrap());
        assert_eq!(Config::load(&path).unwrap().extension, "md");
    }
}
