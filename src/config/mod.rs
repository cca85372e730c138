mod date_format;
mod generator;
mod model;
mod project;
mod timezone;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

// Re-export public items
pub use date_format::format_timestamp;
pub use model::Config;
pub use project::{CONFIG_FILE_NAME, find_config_file};

/// Configuration together with the file it was read from, if any.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Loads the effective configuration.
///
/// An explicit path must exist. Without one, the nearest `clhe.yaml` above
/// `cwd` is used, falling back to defaults. Relative roots from a file are
/// anchored at the file's directory; environment overrides come last and
/// stay relative to `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ResolvedConfig> {
    let source = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file {} does not exist", path.display());
            }
            Some(path.to_path_buf())
        }
        None => find_config_file(cwd),
    };

    let mut config = match &source {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            Config::load(path)?
        }
        None => {
            log::debug!("no {CONFIG_FILE_NAME} found from {}; using defaults", cwd.display());
            Config::default()
        }
    };

    let home = env::var_os("HOME").map(PathBuf::from);
    config.expand_paths(home.as_deref());
    if let Some(base) = source.as_deref().and_then(Path::parent) {
        config.anchor_roots(base);
    }

    config.apply_env(|key| env::var(key).ok());
    config.expand_paths(home.as_deref());

    Ok(ResolvedConfig { config, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("elsewhere.yaml");
        let error = resolve_config(Some(&missing), dir.path()).unwrap_err();
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "extension: markdown\n").unwrap();

        let resolved = resolve_config(Some(&path), dir.path()).unwrap();
        assert_eq!(resolved.source.as_deref(), Some(path.as_path()));
        assert_eq!(resolved.config.extension, "markdown");
    }

    #[test]
    fn discovered_file_is_reported_as_source() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("notes");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "posts_dir: content/posts\n").unwrap();

        let resolved = resolve_config(None, &nested).unwrap();
        assert_eq!(resolved.source, Some(dir.path().join(CONFIG_FILE_NAME)));
        assert_eq!(resolved.config.posts_dir, PathBuf::from("content/posts"));
    }

    #[test]
    fn relative_roots_follow_the_config_file() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("blog");
        let nested = blog.join("source");
        fs::create_dir_all(&nested).unwrap();
        fs::write(blog.join(CONFIG_FILE_NAME), "notes_root: ../class
").unwrap();

        let resolved = resolve_config(None, &nested).unwrap();
        assert_eq!(resolved.config.blog_root, blog.join("."));
        assert_eq!(resolved.config.notes_root, blog.join("../class"));
        assert_eq!(resolved.config.posts_root(), blog.join("./source/_posts"));
    }

    #[test]
    fn absolute_roots_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "blog_root: /srv/blog
").unwrap();

        let resolved = resolve_config(Some(&path), dir.path()).unwrap();
        assert_eq!(resolved.config.blog_root, PathBuf::from("/srv/blog"));
        assert_eq!(resolved.config.notes_root, dir.path().join("."));
    }
}
