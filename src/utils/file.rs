use std::fs;
use std::io::{self, Write};
use std::path::Path;
use log::debug;
use tempfile::NamedTempFile;
use crate::error::{Error, Result};

/// Read a whole .fnt file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Permissions the finished output should carry
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        return Some(metadata.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

fn stage(dir: &Path, path: &Path, contents: &str) -> io::Result<NamedTempFile> {
    let mut staging = NamedTempFile::new_in(dir)?;
    staging.write_all(contents.as_bytes())?;
    staging.flush()?;
    if let Some(permissions) = output_permissions(path) {
        fs::set_permissions(staging.path(), permissions)?;
    }
    Ok(staging)
}

/// Write `contents` to `path`, replacing it only once the data is fully on disk.
///
/// The data is staged in a uniquely named file next to `path`; a failed write
/// removes the staging file and leaves any existing `path` untouched.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staging = stage(dir, path, contents).map_err(write_error)?;
    debug!("Moving {} into place at {}", staging.path().display(), path.display());
    staging.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
