use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// Copies `src` to `dst` and syncs the destination to disk.
///
/// A failed copy may leave a partial destination behind.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let mut input =
        File::open(src).with_context(|| format!("failed to open {}", src.display()))?;
    let mut output =
        File::create(dst).with_context(|| format!("failed to create {}", dst.display()))?;

    let bytes = io::copy(&mut input, &mut output).with_context(|| {
        format!("failed to copy {} to {}", src.display(), dst.display())
    })?;
    output
        .sync_all()
        .with_context(|| format!("failed to flush {}", dst.display()))?;

    log::debug!("copied {bytes} bytes from {} to {}", src.display(), dst.display());
    Ok(bytes)
}
