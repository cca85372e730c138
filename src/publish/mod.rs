use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use time::OffsetDateTime;

use crate::config::Config;
use crate::copy::copy_file;
use crate::front_matter::ensure_front_matter;
use crate::generator::{CommandRunner, Stage, run_stage};

/// A note to publish and the tag to give it when it lacks front matter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublishRequest {
    pub path: PathBuf,
    pub tag: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublishReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub front_matter_added: bool,
    pub bytes_copied: u64,
    pub built: bool,
}

/// Resolves the note path, trying the notes root for relative paths.
pub fn resolve_source(path: &Path, config: &Config) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    if path.is_relative() {
        let candidate = config.notes_root.join(path);
        if candidate.exists() {
            log::debug!("resolved {} against the notes root", path.display());
            return Ok(candidate);
        }
    }

    bail!("file does not exist: {}", path.display())
}

/// Runs the publish sequence. Completed steps are not undone when a later one fails.
pub fn publish(
    request: &PublishRequest,
    config: &Config,
    now: OffsetDateTime,
    build: bool,
    runner: &mut impl CommandRunner,
) -> Result<PublishReport> {
    let source = resolve_source(&request.path, config)?;
    if !source.is_file() {
        bail!("{} is not a file", source.display());
    }

    let posts_root = config.posts_root();
    if !posts_root.is_dir() {
        bail!("posts directory {} does not exist", posts_root.display());
    }

    let front_matter_added =
        ensure_front_matter(&source, request.tag.as_deref(), now, &config.date_format)?;

    let file_name = source
        .file_name()
        .with_context(|| format!("{} has no file name", source.display()))?;
    let destination = posts_root.join(file_name);
    let bytes_copied = if is_same_file(&source, &destination)? {
        log::info!("{} is already in the posts directory", source.display());
        println!("✅ {} is already in place", destination.display());
        0
    } else {
        let bytes = copy_file(&source, &destination).context("failed to copy file")?;
        println!("✅ Copied {} -> {}", source.display(), destination.display());
        bytes
    };

    if build {
        run_stage(runner, config, Stage::Generate)?;
        run_stage(runner, config, Stage::Deploy)?;
    } else {
        log::info!("skipping generate and deploy");
    }

    Ok(PublishReport {
        source,
        destination,
        front_matter_added,
        bytes_copied,
        built: build,
    })
}

/// Opening `destination` for writing would truncate `source` when both name one file.
fn is_same_file(source: &Path, destination: &Path) -> Result<bool> {
    if !destination.exists() {
        return Ok(false);
    }
    let source = fs::canonicalize(source)
        .with_context(|| format!("failed to resolve {}", source.display()))?;
    let destination = fs::canonicalize(destination)
        .with_context(|| format!("failed to resolve {}", destination.display()))?;
    Ok(source == destination)
}
