//! Application bundle candidates and resolution.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Directory name of the application bundle.
pub const BUNDLE_NAME: &str = "NaAPICodex.app";

/// Extended attribute Gatekeeper attaches to downloaded files.
pub const QUARANTINE_ATTRIBUTE: &str = "com.apple.quarantine";

/// What clearing the quarantine attribute did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarantineOutcome {
    /// `xattr` ran and the attribute is gone.
    Cleared,
    /// The host has no quarantine attribute; nothing was run.
    NotApplicable,
}

/// Ordered locations where the bundle may live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleCandidates {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl BundleCandidates {
    /// Candidates next to the launcher, then in `~/Downloads`.
    pub fn new(launcher_dir: &Path, home: &Path) -> Self {
        Self {
            primary: launcher_dir.join(BUNDLE_NAME),
            fallback: home.join("Downloads").join(BUNDLE_NAME),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.primary.as_path(), self.fallback.as_path()].into_iter()
    }

    /// First candidate for which `is_dir` holds.
    pub fn resolve_with(&self, is_dir: impl Fn(&Path) -> bool) -> Result<PathBuf, AppError> {
        self.iter().find(|candidate| is_dir(candidate)).map(Path::to_path_buf).ok_or_else(|| {
            AppError::BundleNotFound { attempted: self.iter().map(Path::to_path_buf).collect() }
        })
    }

    /// Resolve against the real filesystem.
    pub fn resolve(&self) -> Result<PathBuf, AppError> {
        self.resolve_with(Path::is_dir)
    }
}
