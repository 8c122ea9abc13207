//! Launch sequence: resolve, clear quarantine, ensure onboarding flag, open.

use std::path::PathBuf;

use log::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, QuarantineOutcome};
use crate::domain::onboarding::{self, OnboardingOutcome};
use crate::ports::{ConfigFile, Platform};

/// Per-step results of one launch.
///
/// Only bundle resolution is a hard gate; everything after it is captured
/// here and inspected by the caller.
#[derive(Debug)]
pub struct LaunchReport {
    pub bundle: PathBuf,
    pub quarantine: Result<QuarantineOutcome, AppError>,
    pub onboarding: Result<OnboardingOutcome, AppError>,
    pub launch: Result<(), AppError>,
}

impl LaunchReport {
    /// Exit status for the process: that of the open facility when it failed.
    pub fn exit_code(&self) -> i32 {
        match &self.launch {
            Ok(()) => 0,
            Err(AppError::LaunchRequestFailed { status: Some(code), .. }) if *code != 0 => *code,
            Err(_) => 1,
        }
    }
}

pub fn execute<P: Platform, C: ConfigFile>(
    ctx: &AppContext<P, C>,
) -> Result<LaunchReport, AppError> {
    let bundle = ctx.config().bundle.resolve()?;
    info!("resolved bundle at {}", bundle.display());

    let quarantine = ctx.platform().clear_quarantine(&bundle);
    if let Err(err) = &quarantine {
        debug!("ignoring quarantine failure: {err}");
    }

    let onboarding = ensure_onboarding_flag(ctx.claude_json());
    if let Err(err) = &onboarding {
        info!("onboarding flag not written: {err}");
    }

    let launch = ctx.platform().open_bundle(&bundle);

    Ok(LaunchReport { bundle, quarantine, onboarding, launch })
}

/// Make sure the onboarding key is present, writing at most once.
pub fn ensure_onboarding_flag(file: &impl ConfigFile) -> Result<OnboardingOutcome, AppError> {
    let prior = file.read()?;
    let decision = onboarding::decide(file.path(), prior.as_deref())?;

    if let Some(content) = &decision.content {
        file.write(content)?;
    }
    Ok(decision.outcome)
}
