use std::env;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the current user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let home = env::var_os("HOME").map(PathBuf::from);
    expand_tilde_with(path, home.as_deref())
}

pub fn expand_tilde_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_prefix() {
        let expanded = expand_tilde_with(Path::new("~/notes/class"), Some(Path::new("/home/me")));
        assert_eq!(expanded, PathBuf::from("/home/me/notes/class"));
    }

    #[test]
    fn expands_bare_tilde() {
        let expanded = expand_tilde_with(Path::new("~"), Some(Path::new("/home/me")));
        assert_eq!(expanded, PathBuf::from("/home/me"));
    }

    #[test]
    fn leaves_other_paths_alone() {
        let home = Some(Path::new("/home/me"));
        assert_eq!(
            expand_tilde_with(Path::new("/srv/blog"), home),
            PathBuf::from("/srv/blog")
        );
        assert_eq!(
            expand_tilde_with(Path::new("~other/blog"), home),
            PathBuf::from("~other/blog")
        );
    }

    #[test]
    fn keeps_tilde_without_home() {
        let expanded = expand_tilde_with(Path::new("~/notes"), None);
        assert_eq!(expanded, PathBuf::from("~/notes"));
    }
}
