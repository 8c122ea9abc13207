//! Read-only view of the companion tool settings the NaAPI configurator manages.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::AppError;

pub const CLAUDE_SETTINGS_FILE: &str = ".claude/settings.json";
pub const CODEX_CONFIG_FILE: &str = ".codex/config.toml";
pub const CODEX_AUTH_FILE: &str = ".codex/auth.json";

/// `env` block of Claude Code `settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaudeSettings {
    pub base_url: Option<String>,
    pub opus_model: Option<String>,
    pub auth_token: Option<String>,
    pub disable_nonessential_traffic: bool,
}

#[derive(Deserialize)]
struct ClaudeSettingsDto {
    env: Option<BTreeMap<String, serde_json::Value>>,
}

impl ClaudeSettings {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let dto: ClaudeSettingsDto = serde_json::from_str(content).map_err(|e| {
            AppError::ParseError { what: CLAUDE_SETTINGS_FILE.into(), details: e.to_string() }
        })?;
        let env = dto.env.unwrap_or_default();

        let text = |key: &str| {
            env.get(key)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        // Older configurator builds wrote the flag as a number.
        let disable_nonessential_traffic =
            match env.get("CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC") {
                Some(serde_json::Value::String(s)) => s.trim() == "1",
                Some(serde_json::Value::Number(n)) => n.as_i64() == Some(1),
                _ => false,
            };

        Ok(Self {
            base_url: text("ANTHROPIC_BASE_URL"),
            opus_model: text("ANTHROPIC_DEFAULT_OPUS_MODEL"),
            auth_token: text("ANTHROPIC_AUTH_TOKEN"),
            disable_nonessential_traffic,
        })
    }
}

/// Fields of Codex `config.toml` relevant to the NaAPI provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodexConfig {
    pub model_provider: Option<String>,
    pub model: Option<String>,
    pub reasoning_effort: Option<String>,
    pub verbosity: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Deserialize)]
struct CodexConfigDto {
    model_provider: Option<String>,
    model: Option<String>,
    model_reasoning_effort: Option<String>,
    model_verbosity: Option<String>,
    #[serde(default)]
    model_providers: BTreeMap<String, CodexProviderDto>,
}

#[derive(Deserialize)]
struct CodexProviderDto {
    base_url: Option<String>,
}

impl CodexConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let dto: CodexConfigDto = toml::from_str(content).map_err(|e| AppError::ParseError {
            what: CODEX_CONFIG_FILE.into(),
            details: e.to_string(),
        })?;

        let base_url = match &dto.model_provider {
            Some(provider) => dto.model_providers.get(provider).and_then(|p| p.base_url.clone()),
            None if dto.model_providers.len() == 1 => {
                dto.model_providers.values().next().and_then(|p| p.base_url.clone())
            }
            None => None,
        };

        Ok(Self {
            model_provider: dto.model_provider,
            model: dto.model,
            reasoning_effort: dto.model_reasoning_effort,
            verbosity: dto.model_verbosity,
            base_url,
        })
    }
}

/// `OPENAI_API_KEY` from Codex `auth.json`, if set.
pub fn parse_codex_api_key(content: &str) -> Result<Option<String>, AppError> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        AppError::ParseError { what: CODEX_AUTH_FILE.into(), details: e.to_string() }
    })?;
    Ok(value
        .get("OPENAI_API_KEY")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string))
}

/// Mask a secret for display.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 10 {
        return "****".to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_claude_env_block() {
        let content = r#"{
            "env": {
                "ANTHROPIC_BASE_URL": "https://naapi.cc",
                "ANTHROPIC_AUTH_TOKEN": "  sk-ant-secret  ",
                "ANTHROPIC_DEFAULT_OPUS_MODEL": "claude-opus-4-6-thinking",
                "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC": "1"
            },
            "permissions": {}
        }"#;

        let settings = ClaudeSettings::parse(content).unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("https://naapi.cc"));
        assert_eq!(settings.auth_token.as_deref(), Some("sk-ant-secret"));
        assert_eq!(settings.opus_model.as_deref(), Some("claude-opus-4-6-thinking"));
        assert!(settings.disable_nonessential_traffic);
    }

    #[test]
    fn missing_env_block_is_empty_settings() {
        let settings = ClaudeSettings::parse("{}").unwrap();
        assert_eq!(settings, ClaudeSettings::default());
    }

    #[test]
    fn null_env_block_is_empty_settings() {
        let settings = ClaudeSettings::parse(r#"{"env": null, "model": "opus"}"#).unwrap();
        assert_eq!(settings, ClaudeSettings::default());
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let settings =
            ClaudeSettings::parse(r#"{"env": {"ANTHROPIC_BASE_URL": "   "}}"#).unwrap();
        assert_eq!(settings.base_url, None);
    }

    #[test]
    fn parses_codex_provider_base_url() {
        let content = r#"model_provider = "naapi"
model = "gpt-5.2"
model_reasoning_effort = "xhigh"
network_access = "enabled"
model_verbosity = "high"

[model_providers.naapi]
name = "naapi"
base_url = "https://naapi.cc/v1"
wire_api = "responses"
requires_openai_auth = true
"#;

        let config = CodexConfig::parse(content).unwrap();
        assert_eq!(config.model_provider.as_deref(), Some("naapi"));
        assert_eq!(config.model.as_deref(), Some("gpt-5.2"));
        assert_eq!(config.reasoning_effort.as_deref(), Some("xhigh"));
        assert_eq!(config.verbosity.as_deref(), Some("high"));
        assert_eq!(config.base_url.as_deref(), Some("https://naapi.cc/v1"));
    }

    #[test]
    fn codex_without_provider_table_has_no_base_url() {
        let config = CodexConfig::parse("model = \"o3\"\n").unwrap();
        assert_eq!(config.model.as_deref(), Some("o3"));
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn malformed_codex_config_is_a_parse_error() {
        let err = CodexConfig::parse("model = ").unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
    }

    #[test]
    fn reads_openai_key() {
        assert_eq!(
            parse_codex_api_key(r#"{"OPENAI_API_KEY": "sk-abc"}"#).unwrap().as_deref(),
            Some("sk-abc")
        );
        assert_eq!(parse_codex_api_key(r#"{"OPENAI_API_KEY": null}"#).unwrap(), None);
    }

    #[test]
    fn masks_secrets() {
        assert_eq!(mask_secret("sk-1234567890abcd"), "sk-****abcd");
        assert_eq!(mask_secret("short"), "****");
    }
}
