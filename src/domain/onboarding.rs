//! Onboarding-skip flag upsert for `~/.claude.json`.
//!
//! The decision is pure: given the prior file content (if any) it returns
//! what, if anything, should be written. Reading and writing the file is the
//! caller's concern.

use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::AppError;

/// File name of the Claude Code user state document under `$HOME`.
pub const CLAUDE_JSON_FILE: &str = ".claude.json";

/// Key that suppresses the first-run setup dialog.
pub const ONBOARDING_KEY: &str = "hasCompletedOnboarding";

/// Content written when no document exists yet.
pub const FRESH_DOCUMENT: &str = "{\"hasCompletedOnboarding\": true}\n";

/// What happened to the configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingOutcome {
    /// The file did not exist and was created.
    Created,
    /// The key was already present; the file was left untouched.
    AlreadyConfigured,
    /// The key was added to an existing object.
    Inserted,
}

/// Result of deciding the upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingDecision {
    pub outcome: OnboardingOutcome,
    /// New file content, `None` when nothing must be written.
    pub content: Option<String>,
}

/// Decide the new document given the prior content.
///
/// Presence of the key is authoritative: an existing `false` is kept.
pub fn decide(path: &Path, prior: Option<&str>) -> Result<OnboardingDecision, AppError> {
    let Some(prior) = prior else {
        return Ok(OnboardingDecision {
            outcome: OnboardingOutcome::Created,
            content: Some(FRESH_DOCUMENT.to_string()),
        });
    };

    let mut document = parse_object(path, prior)?;
    if document.contains_key(ONBOARDING_KEY) {
        return Ok(OnboardingDecision {
            outcome: OnboardingOutcome::AlreadyConfigured,
            content: None,
        });
    }

    document.insert(ONBOARDING_KEY.to_string(), Value::Bool(true));
    let mut content = serde_json::to_string_pretty(&Value::Object(document)).map_err(|e| {
        AppError::ConfigParseFailed { path: path.to_path_buf(), details: e.to_string() }
    })?;
    content.push('\n');

    Ok(OnboardingDecision { outcome: OnboardingOutcome::Inserted, content: Some(content) })
}

/// Whether the document at `prior` already carries the key.
pub fn is_configured(path: &Path, prior: &str) -> Result<bool, AppError> {
    Ok(parse_object(path, prior)?.contains_key(ONBOARDING_KEY))
}

fn parse_object(path: &Path, content: &str) -> Result<Map<String, Value>, AppError> {
    let value: Value = serde_json::from_str(content).map_err(|e| AppError::ConfigParseFailed {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::ConfigParseFailed {
            path: path.to_path_buf(),
            details: format!("expected a JSON object, found {}", json_type(&other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
