use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ConfigFile;

/// In-memory configuration file for testing.
pub struct MemoryConfigFile {
    path: PathBuf,
    content: Mutex<Option<String>>,
    writes: Mutex<usize>,
    read_only: bool,
}

impl MemoryConfigFile {
    pub fn new(content: Option<&str>) -> Self {
        Self {
            path: PathBuf::from("/home/test/.claude.json"),
            content: Mutex::new(content.map(str::to_string)),
            writes: Mutex::new(0),
            read_only: false,
        }
    }

    pub fn read_only(content: Option<&str>) -> Self {
        Self { read_only: true, ..Self::new(content) }
    }

    pub fn content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl ConfigFile for MemoryConfigFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>, AppError> {
        Ok(self.content())
    }

    fn write(&self, content: &str) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::ConfigWriteFailed {
                path: self.path.clone(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        *self.content.lock().unwrap() = Some(content.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
