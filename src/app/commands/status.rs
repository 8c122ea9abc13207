//! Read-only report of the launcher's environment.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::config::LaunchConfig;
use crate::domain::companion::{self, ClaudeSettings, CodexConfig};
use crate::domain::{AppError, onboarding};

/// State of a file the report looks at.
#[derive(Debug)]
pub enum FileState<T> {
    Absent,
    Unreadable(String),
    Present(T),
}

impl<T> FileState<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            FileState::Present(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct StatusReport {
    pub bundle: Result<PathBuf, AppError>,
    /// Whether `~/.claude.json` carries the onboarding key.
    pub onboarding: FileState<bool>,
    pub claude: FileState<ClaudeSettings>,
    pub codex: FileState<CodexConfig>,
    /// `OPENAI_API_KEY` from `auth.json`, already masked.
    pub codex_api_key: FileState<Option<String>>,
}

pub fn execute(config: &LaunchConfig) -> StatusReport {
    StatusReport {
        bundle: config.bundle.resolve(),
        onboarding: inspect(&config.claude_json, |c| {
            onboarding::is_configured(&config.claude_json, c)
        }),
        claude: inspect(&config.claude_settings, ClaudeSettings::parse),
        codex: inspect(&config.codex_config, CodexConfig::parse),
        codex_api_key: inspect(&config.codex_auth, |c| {
            Ok(companion::parse_codex_api_key(c)?.map(|k| companion::mask_secret(&k)))
        }),
    }
}

fn inspect<T>(path: &Path, parse: impl FnOnce(&str) -> Result<T, AppError>) -> FileState<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return FileState::Absent,
        Err(err) => return FileState::Unreadable(err.to_string()),
    };

    match parse(&content) {
        Ok(value) => FileState::Present(value),
        Err(err) => FileState::Unreadable(err.to_string()),
    }
}
