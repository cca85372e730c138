use std::path::Path;

use anyhow::{Result, bail};

use super::load_config;
use crate::cli::ConfigArgs;
use crate::config::ResolvedConfig;

pub fn run_config_command(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let resolved = load_config(config_path)?;
    match render_value(&args, &resolved)? {
        Some(value) => println!("{value}"),
        None => print!("{}", serde_yaml::to_string(&resolved.config)?),
    }
    Ok(())
}

/// Returns the single value selected by `args`, or `None` when no flag is set.
fn render_value(args: &ConfigArgs, resolved: &ResolvedConfig) -> Result<Option<String>> {
    let flags_set = [
        args.path,
        args.notes_root,
        args.blog_root,
        args.posts_dir,
        args.generator,
    ]
    .iter()
    .filter(|&&flag| flag)
    .count();

    if flags_set > 1 {
        bail!("Only one config key can be queried at a time.");
    }

    let config = &resolved.config;
    let value = if args.path {
        match &resolved.source {
            Some(path) => path.display().to_string(),
            None => "(defaults)".to_string(),
        }
    } else if args.notes_root {
        config.notes_root.display().to_string()
    } else if args.blog_root {
        config.blog_root.display().to_string()
    } else if args.posts_dir {
        config.posts_root().display().to_string()
    } else if args.generator {
        config.generator.command.clone()
    } else {
        return Ok(None);
    };

    Ok(Some(value))
}
