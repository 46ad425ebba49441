//! Generate command - render the deployable SDL.

use tracing::info;

use crate::cli::output;
use crate::core::constants;
use crate::core::env::DeployInputs;
use crate::core::sdl;
use crate::error::Result;

/// Render the SDL template with the current environment.
pub fn execute() -> Result<()> {
    let inputs = DeployInputs::from_env();

    // Empty secrets warn but never abort; the substitution comes out empty.
    if inputs.cert.is_empty() {
        output::warn(&format!("{} secret is empty", constants::CERT_ENV));
    }
    if inputs.key.is_empty() {
        output::warn(&format!("{} secret is empty", constants::KEY_ENV));
    }

    let summary = sdl::generate(&inputs)?;

    output::success(&format!("generated {}", constants::OUTPUT_FILE));
    output::kv("image", &summary.image);
    output::kv("certificate", format!("{} chars", summary.cert_chars));
    output::kv("key", format!("{} chars", summary.key_chars));

    info!("generation complete");
    Ok(())
}
