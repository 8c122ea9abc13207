use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::ConfigFile;

/// Filesystem-backed configuration file.
///
/// Writes go to a sibling temporary file that is renamed over the target, so
/// an interrupted write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct FilesystemConfigFile {
    path: PathBuf,
}

impl FilesystemConfigFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn replace_with(
        &self,
        fill: impl FnOnce(&mut NamedTempFile) -> io::Result<()>,
    ) -> Result<(), AppError> {
        let write_failed = |source| AppError::ConfigWriteFailed { path: self.path.clone(), source };

        // Replace the link target, not a symlink at `~/.claude.json`.
        let target = match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(err) if err.kind() == ErrorKind::NotFound => self.path.clone(),
            Err(err) => return Err(write_failed(err)),
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(write_failed)?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(write_failed)?;
        fill(&mut temp).map_err(write_failed)?;
        temp.as_file().sync_all().map_err(write_failed)?;

        if let Ok(metadata) = fs::metadata(&target)
            && metadata.is_file()
        {
            fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_failed)?;
        }

        temp.persist(&target).map_err(|e| write_failed(e.error))?;
        Ok(())
    }
}

impl ConfigFile for FilesystemConfigFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AppError::ConfigReadFailed { path: self.path.clone(), source }),
        }
    }

    fn write(&self, content: &str) -> Result<(), AppError> {
        self.replace_with(|temp| temp.write_all(content.as_bytes()))
    }
}
