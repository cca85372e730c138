use std::path::Path;

use anyhow::Result;
use time::OffsetDateTime;

use super::load_config;
use crate::cli::PublishArgs;
use crate::generator::SystemRunner;
use crate::locate::select_markdown_file;
use crate::publish::{PublishRequest, publish};

pub fn run_publish_command(args: PublishArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?.config;

    let path = if args.select {
        select_markdown_file(&config.notes_root, &config.extension)?
    } else {
        args.md_path
    };

    let now = OffsetDateTime::now_utc().to_offset(config.offset()?);
    let request = PublishRequest {
        path,
        tag: args.tag,
    };
    let report = publish(&request, &config, now, !args.no_build, &mut SystemRunner)?;
    log::debug!(
        "published {} -> {} ({} bytes, front matter added: {})",
        report.source.display(),
        report.destination.display(),
        report.bytes_copied,
        report.front_matter_added
    );

    if report.built {
        println!("🚀 Blog published successfully!");
    } else {
        println!("Skipped generate and deploy (--no-build).");
    }
    Ok(())
}
