//! naapi-launch: prepare and open NaAPICodex.app on macOS.
//!
//! Clears the Gatekeeper quarantine attribute from the bundle, makes sure
//! `~/.claude.json` skips Claude Code onboarding, then asks the OS to open
//! the app.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    FileState, LaunchReport, StatusReport, ensure_onboarding_flag_at, launch, launch_with, status,
    status_with,
};
pub use app::config::LaunchConfig;
pub use domain::{AppError, OnboardingOutcome, QuarantineOutcome};
