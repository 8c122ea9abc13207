use std::path::Path;

use crate::domain::AppError;

/// Port for a single text configuration file.
pub trait ConfigFile {
    /// Location of the file, used in messages and errors.
    fn path(&self) -> &Path;

    /// Read the whole file. `Ok(None)` when it does not exist.
    fn read(&self) -> Result<Option<String>, AppError>;

    /// Replace the whole file, creating it if needed.
    fn write(&self, content: &str) -> Result<(), AppError>;
}
