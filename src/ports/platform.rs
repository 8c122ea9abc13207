use std::path::Path;

use crate::domain::{AppError, QuarantineOutcome};

/// Port for the host facilities the launcher drives.
pub trait Platform {
    /// Recursively remove the quarantine attribute from `bundle`.
    fn clear_quarantine(&self, bundle: &Path) -> Result<QuarantineOutcome, AppError>;

    /// Ask the OS to open the application bundle.
    fn open_bundle(&self, bundle: &Path) -> Result<(), AppError>;
}
