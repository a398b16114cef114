// src/output.rs

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::request::GenerationRequest;

/// Where a fixture landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    /// A file of the same name existed and was truncated.
    pub replaced: bool,
}

/* ============================================================
   Public API
   ============================================================ */

/// Write the rendered fixture into `dir`, replacing any previous file of the
/// same name.
pub fn write_fixture(
    dir: &Path,
    request: &GenerationRequest,
    source: &str,
) -> Result<Written, GenError> {
    let path = dir.join(request.file_name());

    ensure_dir(dir).map_err(|source| GenError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let replaced = path.is_file();
    overwrite(&path, source).map_err(|source| GenError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(Written { path, replaced })
}

/* ============================================================
   Helpers
   ============================================================ */

fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

fn overwrite(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    file.write_all(content.as_bytes())?;
    file.flush()
}
