use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// Outcome of reading one line at the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the listed files.
    Chosen(usize),
    Invalid,
}

/// Recursively collects files under `root` whose name ends in `.<extension>`.
pub fn find_markdown_files(root: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        bail!("notes directory {} does not exist", root.display());
    }

    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to traverse notes directory {}", root.display()))?;
        // `Path::is_file` follows symlinks, so linked notes are listed too.
        if !entry.path().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        bail!("no markdown files found in {}", root.display());
    }

    log::debug!("found {} markdown files under {}", files.len(), root.display());
    Ok(files)
}

pub fn parse_selection(input: &str, count: usize) -> Selection {
    match input.trim().parse::<usize>() {
        Ok(index) if (1..=count).contains(&index) => Selection::Chosen(index - 1),
        _ => Selection::Invalid,
    }
}

pub fn print_listing(files: &[PathBuf], output: &mut impl Write) -> io::Result<()> {
    for (index, file) in files.iter().enumerate() {
        writeln!(output, "[{}] {}", index + 1, file.display())?;
    }
    Ok(())
}

/// Lists `files` and keeps prompting until a valid 1-based index is entered.
pub fn choose_file(
    files: &[PathBuf],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PathBuf> {
    if files.is_empty() {
        bail!("there are no files to choose from");
    }

    writeln!(output, "Select the markdown file to publish:")?;
    print_listing(files, output)?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a number: ")?;
        output.flush().context("failed to flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read selection")?;
        if read == 0 {
            bail!("input closed before a file was selected");
        }

        match parse_selection(&line, files.len()) {
            Selection::Chosen(index) => return Ok(files[index].clone()),
            Selection::Invalid => {
                log::debug!("rejected selection {:?}", line.trim());
                writeln!(output, "❌ Invalid input, please try again")?;
            }
        }
    }
}

/// Finds notes under `root` and asks the user on the terminal to pick one.
pub fn select_markdown_file(root: impl AsRef<Path>, extension: &str) -> Result<PathBuf> {
    let files = find_markdown_files(root, extension)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    choose_file(&files, &mut stdin.lock(), &mut stdout.lock())
}
