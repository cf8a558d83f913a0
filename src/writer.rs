use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replaces the file at `path` with `contents`. The data is first written to a uniquely named temporary file in the
/// same directory as `path`, which is then renamed to `path`. Readers of `path` thus either see the old contents or
/// the complete new contents, but never a partially written file.
///
/// # Errors
///
/// If the temporary file cannot be written or renamed, an error is returned. The temporary file is removed in that
/// case.
pub fn write_atomically<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory).with_context(|| {
        format!(
            "Could not create temporary file for output file {}",
            path.display()
        )
    })?;
    file.write_all(contents)
        .and_then(|_| file.as_file().sync_all())
        .with_context(|| format!("Could not write output file {}", path.display()))?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Could not move temporary file to {}", path.display()))?;
    Ok(())
}
