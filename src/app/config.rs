//! Launcher configuration: every path the launcher reads or writes.

use std::path::{Path, PathBuf};

use crate::domain::companion::{CLAUDE_SETTINGS_FILE, CODEX_AUTH_FILE, CODEX_CONFIG_FILE};
use crate::domain::{AppError, BundleCandidates, CLAUDE_JSON_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Where to look for the application bundle.
    pub bundle: BundleCandidates,
    /// `~/.claude.json`, the document carrying the onboarding flag.
    pub claude_json: PathBuf,
    /// `~/.claude/settings.json`.
    pub claude_settings: PathBuf,
    /// `~/.codex/config.toml`.
    pub codex_config: PathBuf,
    /// `~/.codex/auth.json`.
    pub codex_auth: PathBuf,
}

impl LaunchConfig {
    /// Build paths from an explicit home and launcher directory.
    pub fn with_home(home: &Path, launcher_dir: &Path) -> Self {
        Self {
            bundle: BundleCandidates::new(launcher_dir, home),
            claude_json: home.join(CLAUDE_JSON_FILE),
            claude_settings: home.join(CLAUDE_SETTINGS_FILE),
            codex_config: home.join(CODEX_CONFIG_FILE),
            codex_auth: home.join(CODEX_AUTH_FILE),
        }
    }

    /// Derive paths from `$HOME` and the directory of the running executable.
    pub fn from_env() -> Result<Self, AppError> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| AppError::config_error("HOME environment variable not set"))?;

        let exe = std::env::current_exe()?;
        let launcher_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| AppError::config_error("Cannot determine launcher directory"))?;

        Ok(Self::with_home(&home, &launcher_dir))
    }
}
