//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::{CommandPlatform, FilesystemConfigFile};
use crate::app::AppContext;
use crate::app::commands::{launch, status};
use crate::app::config::LaunchConfig;
use crate::ports::Platform;

pub use crate::app::commands::launch::LaunchReport;
pub use crate::app::commands::status::{FileState, StatusReport};
pub use crate::domain::{AppError, OnboardingOutcome, QuarantineOutcome};

/// Run the launch sequence against `$HOME` and the real host.
pub fn launch() -> Result<LaunchReport, AppError> {
    launch_with(LaunchConfig::from_env()?, CommandPlatform::new())
}

/// Run the launch sequence with explicit paths and platform.
pub fn launch_with(
    config: LaunchConfig,
    platform: impl Platform,
) -> Result<LaunchReport, AppError> {
    let claude_json = FilesystemConfigFile::new(config.claude_json.clone());
    let ctx = AppContext::new(config, platform, claude_json);
    launch::execute(&ctx)
}

/// Ensure the onboarding flag in the document at `path`.
pub fn ensure_onboarding_flag_at(
    path: impl Into<std::path::PathBuf>,
) -> Result<OnboardingOutcome, AppError> {
    launch::ensure_onboarding_flag(&FilesystemConfigFile::new(path.into()))
}

/// Report on the launcher's environment without changing anything.
pub fn status() -> Result<StatusReport, AppError> {
    Ok(status_with(&LaunchConfig::from_env()?))
}

pub fn status_with(config: &LaunchConfig) -> StatusReport {
    status::execute(config)
}
