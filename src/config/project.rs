use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "clhe.yaml";

/// Walks from `start` towards the filesystem root looking for `clhe.yaml`.
pub fn find_config_file(start: impl AsRef<Path>) -> Option<PathBuf> {
    let mut current = start.as_ref().to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}
