use crate::app::config::LaunchConfig;
use crate::ports::{ConfigFile, Platform};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Platform, C: ConfigFile> {
    config: LaunchConfig,
    platform: P,
    claude_json: C,
}

impl<P: Platform, C: ConfigFile> AppContext<P, C> {
    /// Create a new application context.
    pub fn new(config: LaunchConfig, platform: P, claude_json: C) -> Self {
        Self { config, platform, claude_json }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Get a reference to the host platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Get a reference to the onboarding document store.
    pub fn claude_json(&self) -> &C {
        &self.claude_json
    }
}
