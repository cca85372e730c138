use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use time::OffsetDateTime;

use crate::config::format_timestamp;

pub const DELIMITER: &str = "---";

/// Metadata block that hexo reads from the top of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Builds the header for `path`: the title is the file stem, `tag` the only tag.
    pub fn for_document(path: &Path, tag: Option<&str>, date: String) -> Self {
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tags = tag
            .filter(|tag| !tag.is_empty())
            .map(|tag| vec![tag.to_string()])
            .unwrap_or_default();

        Self { title, date, tags }
    }

    pub fn render(&self) -> String {
        let mut fm = String::new();
        fm.push_str(DELIMITER);
        fm.push('\n');
        fm.push_str(&format!("title: {}\n", self.title));
        fm.push_str(&format!("date: {}\n", self.date));
        if self.tags.is_empty() {
            fm.push_str("tags:\n");
        } else {
            fm.push_str(&format!("tags: [{}]\n", self.tags.join(", ")));
        }
        fm.push_str(DELIMITER);
        fm.push_str("\n\n");
        fm
    }
}

pub fn has_front_matter(text: &str) -> bool {
    text.starts_with(DELIMITER)
}

/// Prepends a header to the note at `path` unless it already starts with one.
///
/// Returns whether the file was rewritten.
pub fn ensure_front_matter(
    path: &Path,
    tag: Option<&str>,
    now: OffsetDateTime,
    date_format: &str,
) -> Result<bool> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if has_front_matter(&text) {
        log::debug!("{} already has front matter", path.display());
        return Ok(false);
    }

    let date = format_timestamp(now, date_format)?;
    let front = FrontMatter::for_document(path, tag, date);

    let mut contents = front.render();
    contents.push_str(&text);
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("added front matter to {}", path.display());
    Ok(true)
}
