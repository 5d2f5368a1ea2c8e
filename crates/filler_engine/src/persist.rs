use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use filler_core::OutputReport;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::error::FillError;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the output directory exists and accepts new files.
///
/// Unlike a scratch directory, the report location is never created here.
pub fn check_output_dir(dir: &Path) -> Result<(), PersistError> {
    let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(format!("{dir:?}: {e}")))?;
    if !meta.is_dir() {
        return Err(PersistError::OutputDir(format!(
            "{dir:?}: path is not a directory"
        )));
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(format!("{dir:?}: {e}")))?;
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        check_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = new_temp_file(&self.dir)?;
        // A replaced report keeps the mode it already had.
        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(tmp.path(), meta.permissions())?;
        }
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // The rename replaces any previous report in one step.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

/// Temp file created like a plain `File::create`: 0666 minus the umask.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Pretty-prints `report` as JSON and writes it atomically to `path`.
///
/// Non-ASCII words are written verbatim as UTF-8.
pub fn write_report(path: &Path, report: &OutputReport) -> Result<PathBuf, FillError> {
    let content = serde_json::to_string_pretty(report).map_err(FillError::Serialize)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| PersistError::OutputDir(format!("{path:?}: not a file path")))?;

    let writer = AtomicFileWriter::new(dir);
    Ok(writer.write(filename, &content)?)
}
