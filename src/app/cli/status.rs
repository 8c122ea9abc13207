//! Status command implementation.

use crate::app::api::{self, FileState};
use crate::domain::AppError;
use crate::domain::companion::mask_secret;

fn show<T>(label: &str, state: &FileState<T>, present: impl FnOnce(&T)) {
    match state {
        FileState::Absent => println!("{label}: not found"),
        FileState::Unreadable(reason) => println!("{label}: unreadable ({reason})"),
        FileState::Present(value) => present(value),
    }
}

fn or_unset(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(unset)")
}

pub fn run_status() -> Result<(), AppError> {
    let report = api::status()?;

    match &report.bundle {
        Ok(path) => println!("Bundle: {}", path.display()),
        Err(e) => println!("Bundle: {}", e),
    }

    show("Onboarding", &report.onboarding, |configured| {
        if *configured {
            println!("Onboarding: configured");
        } else {
            println!("Onboarding: missing hasCompletedOnboarding");
        }
    });

    show("Claude Code", &report.claude, |claude| {
        println!("Claude Code:");
        println!("  base URL:    {}", or_unset(&claude.base_url));
        println!("  opus model:  {}", or_unset(&claude.opus_model));
        let token = claude.auth_token.as_deref().map(mask_secret);
        println!("  auth token:  {}", or_unset(&token));
        println!(
            "  nonessential traffic: {}",
            if claude.disable_nonessential_traffic { "disabled" } else { "enabled" }
        );
    });

    show("Codex", &report.codex, |codex| {
        println!("Codex:");
        println!("  provider:    {}", or_unset(&codex.model_provider));
        println!("  base URL:    {}", or_unset(&codex.base_url));
        println!("  model:       {}", or_unset(&codex.model));
        println!("  reasoning:   {}", or_unset(&codex.reasoning_effort));
        println!("  verbosity:   {}", or_unset(&codex.verbosity));
    });

    show("Codex auth", &report.codex_api_key, |key| {
        println!("Codex auth: OPENAI_API_KEY {}", key.as_deref().unwrap_or("(unset)"));
    });

    Ok(())
}
