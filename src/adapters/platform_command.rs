use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::domain::{AppError, QUARANTINE_ATTRIBUTE, QuarantineOutcome};
use crate::ports::Platform;

#[cfg(target_os = "macos")]
const OPEN_PROGRAM: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPEN_PROGRAM: &str = "xdg-open";

/// Platform adapter that shells out to `xattr` and `open`.
#[derive(Debug, Clone, Default)]
pub struct CommandPlatform;

/// Exit status and stderr of a finished command.
struct CommandFailure {
    status: Option<i32>,
    details: String,
}

impl CommandPlatform {
    pub fn new() -> Self {
        Self
    }

    fn run<I, S>(&self, program: &str, args: I) -> Result<(), CommandFailure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(program);
        command.args(args);
        debug!("running {:?}", command);

        let output = command
            .output()
            .map_err(|e| CommandFailure { status: None, details: format!("{program}: {e}") })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CommandFailure {
                status: output.status.code(),
                details: if stderr.is_empty() {
                    format!("{program} exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(())
    }
}

impl Platform for CommandPlatform {
    fn clear_quarantine(&self, bundle: &Path) -> Result<QuarantineOutcome, AppError> {
        if !cfg!(target_os = "macos") {
            debug!("no quarantine attribute outside macOS; skipping {}", bundle.display());
            return Ok(QuarantineOutcome::NotApplicable);
        }

        self.run("xattr", [OsStr::new("-dr"), OsStr::new(QUARANTINE_ATTRIBUTE), bundle.as_os_str()])
            .map(|()| QuarantineOutcome::Cleared)
            .map_err(|f| AppError::QuarantineClearFailed { details: f.details })
    }

    fn open_bundle(&self, bundle: &Path) -> Result<(), AppError> {
        self.run(OPEN_PROGRAM, [bundle.as_os_str()])
            .map_err(|f| AppError::LaunchRequestFailed { status: f.status, details: f.details })
    }
}
