pub mod bundle;
pub mod companion;
pub mod error;
pub mod onboarding;

pub use bundle::{BUNDLE_NAME, BundleCandidates, QUARANTINE_ATTRIBUTE, QuarantineOutcome};
pub use companion::{ClaudeSettings, CodexConfig};
pub use error::AppError;
pub use onboarding::{CLAUDE_JSON_FILE, ONBOARDING_KEY, OnboardingDecision, OnboardingOutcome};
