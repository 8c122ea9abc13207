//! Launch command implementation.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Input};

use crate::app::api;
use crate::domain::{AppError, OnboardingOutcome, QuarantineOutcome};

pub fn run_launch() -> Result<i32, AppError> {
    let report = match api::launch() {
        Ok(report) => report,
        Err(AppError::BundleNotFound { attempted }) => {
            eprintln!("❌ NaAPICodex.app not found. Looked in:");
            for path in &attempted {
                eprintln!("   {}", path.display());
            }
            eprintln!("Place NaAPICodex.app next to this launcher or in ~/Downloads.");
            wait_for_enter();
            return Ok(1);
        }
        Err(e) => return Err(e),
    };

    match &report.quarantine {
        Ok(QuarantineOutcome::Cleared) => {
            println!("✅ Cleared quarantine attribute on {}", report.bundle.display())
        }
        Ok(QuarantineOutcome::NotApplicable) => {
            println!("ℹ️ Quarantine attribute not used on this platform")
        }
        Err(_) => println!("ℹ️ No quarantine attribute removed (already clear?)"),
    }

    match &report.onboarding {
        Ok(OnboardingOutcome::Created) => {
            println!("✅ Created ~/.claude.json with onboarding skipped")
        }
        Ok(OnboardingOutcome::Inserted) => {
            println!("✅ Added hasCompletedOnboarding to ~/.claude.json")
        }
        Ok(OnboardingOutcome::AlreadyConfigured) => {
            println!("ℹ️ ~/.claude.json already configured")
        }
        Err(e) => {
            eprintln!("⚠️ {}", e);
            eprintln!("⚠️ Manual configuration required: add \"hasCompletedOnboarding\": true");
        }
    }

    println!("🚀 Opening {}", report.bundle.display());
    if let Err(e) = &report.launch {
        eprintln!("Error: {}", e);
    }
    Ok(report.exit_code())
}

fn wait_for_enter() {
    if !std::io::stdin().is_terminal() {
        return;
    }
    let answer =
        Input::<String>::new().with_prompt("Press Enter to exit").allow_empty(true).interact_text();
    match answer {
        Ok(_) => {}
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {}
        Err(err) => log::debug!("prompt failed: {err}"),
    }
}
