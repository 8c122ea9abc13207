use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, QuarantineOutcome};
use crate::ports::Platform;

/// Records platform requests instead of spawning processes.
#[derive(Default)]
pub struct FakePlatform {
    pub cleared: Mutex<Vec<PathBuf>>,
    pub opened: Mutex<Vec<PathBuf>>,
    pub fail_quarantine: bool,
    pub no_quarantine: bool,
    pub open_exit_status: Option<i32>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_quarantine() -> Self {
        Self { fail_quarantine: true, ..Self::default() }
    }

    pub fn without_quarantine() -> Self {
        Self { no_quarantine: true, ..Self::default() }
    }

    pub fn failing_open(status: i32) -> Self {
        Self { open_exit_status: Some(status), ..Self::default() }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }

    pub fn cleared(&self) -> Vec<PathBuf> {
        self.cleared.lock().unwrap().clone()
    }
}

impl Platform for FakePlatform {
    fn clear_quarantine(&self, bundle: &Path) -> Result<QuarantineOutcome, AppError> {
        self.cleared.lock().unwrap().push(bundle.to_path_buf());
        if self.fail_quarantine {
            return Err(AppError::QuarantineClearFailed {
                details: "No such xattr: com.apple.quarantine".into(),
            });
        }
        if self.no_quarantine {
            return Ok(QuarantineOutcome::NotApplicable);
        }
        Ok(QuarantineOutcome::Cleared)
    }

    fn open_bundle(&self, bundle: &Path) -> Result<(), AppError> {
        self.opened.lock().unwrap().push(bundle.to_path_buf());
        match self.open_exit_status {
            Some(status) => Err(AppError::LaunchRequestFailed {
                status: Some(status),
                details: "LSOpenURLsWithRole() failed".into(),
            }),
            None => Ok(()),
        }
    }
}
