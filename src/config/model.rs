use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use time::UtcOffset;

use super::date_format::{DEFAULT_DATE_FORMAT, parse_format};
use super::generator::{GeneratorConfig, validate_generator_config};
use super::timezone::{LOCAL_TIMEZONE, resolve_offset};
use crate::utils::expand_tilde_with;

pub const NOTES_ROOT_ENV: &str = "CLHE_NOTES_ROOT";
pub const BLOG_ROOT_ENV: &str = "CLHE_BLOG_ROOT";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Root of the class notes repository searched by `--select` and `list`.
    pub notes_root: PathBuf,
    /// Hexo project root; the generator runs with this as working directory.
    pub blog_root: PathBuf,
    /// Posts directory, relative to `blog_root` unless absolute.
    pub posts_dir: PathBuf,
    pub extension: String,
    pub date_format: String,
    pub timezone: String,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&raw).with_context(|| invalid_yaml_message(path))?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self, origin: &Path) -> Result<()> {
        let extension = self.extension.trim();
        if extension.is_empty() {
            bail!("{}: extension must not be empty", origin.display());
        }
        if extension.starts_with('.') {
            bail!(
                "{}: extension '{}' must be given without a leading dot",
                origin.display(),
                extension
            );
        }
        if self.posts_dir.as_os_str().is_empty() {
            bail!("{}: posts_dir must not be empty", origin.display());
        }
        validate_format(&self.date_format, origin)?;
        validate_timezone(&self.timezone, origin)?;
        validate_generator_config(&self.generator, origin)?;
        Ok(())
    }

    /// Replaces the repository roots with values found through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(NOTES_ROOT_ENV).filter(|value| !value.trim().is_empty()) {
            log::debug!("{NOTES_ROOT_ENV} overrides notes_root with {value}");
            self.notes_root = PathBuf::from(value);
        }
        if let Some(value) = lookup(BLOG_ROOT_ENV).filter(|value| !value.trim().is_empty()) {
            log::debug!("{BLOG_ROOT_ENV} overrides blog_root with {value}");
            self.blog_root = PathBuf::from(value);
        }
    }

    pub fn expand_paths(&mut self, home: Option<&Path>) {
        self.notes_root = expand_tilde_with(&self.notes_root, home);
        self.blog_root = expand_tilde_with(&self.blog_root, home);
        self.posts_dir = expand_tilde_with(&self.posts_dir, home);
    }

    /// Joins relative repository roots onto `base`, the config file's directory.
    pub fn anchor_roots(&mut self, base: &Path) {
        if self.notes_root.is_relative() {
            self.notes_root = base.join(&self.notes_root);
        }
        if self.blog_root.is_relative() {
            self.blog_root = base.join(&self.blog_root);
        }
    }

    pub fn posts_root(&self) -> PathBuf {
        self.blog_root.join(&self.posts_dir)
    }

    pub fn offset(&self) -> Result<UtcOffset> {
        resolve_offset(&self.timezone)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_root: PathBuf::from("."),
            blog_root: PathBuf::from("."),
            posts_dir: PathBuf::from("source/_posts"),
            extension: "md".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: LOCAL_TIMEZONE.to_string(),
            generator: GeneratorConfig::default(),
        }
    }
}

fn invalid_yaml_message(path: &Path) -> String {
    format!("{}: invalid YAML", path.display())
}

fn validate_format(value: &str, origin: &Path) -> Result<()> {
    parse_format(value).with_context(|| {
        format!(
            "{}: date_format '{}' is invalid (see https://docs.rs/time/latest/time/format_description)",
            origin.display(), value
        )
    })?;
    Ok(())
}

fn validate_timezone(value: &str, origin: &Path) -> Result<()> {
    resolve_offset(value).with_context(|| {
        format!(
            "{}: timezone '{}' is invalid (expected 'local' or an offset like +08:00)",
            origin.display(),
            value
        )
    })?;
    Ok(())
}
