//! SDL rendering: template in, deployable descriptor out.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::env::DeployInputs;
use crate::core::{constants, image, pem};
use crate::error::{Error, Result};

/// What was substituted, for operator-facing diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Image reference now present in the descriptor.
    pub image: String,
    /// Character length of the raw (pre-folding) certificate.
    pub cert_chars: usize,
    /// Character length of the raw (pre-folding) key.
    pub key_chars: usize,
}

/// Apply the three substitutions to the template text.
///
/// Image line first, then certificate and key tokens (every occurrence
/// of each). Everything outside the substitution sites passes through
/// byte-for-byte.
pub fn render(template: &str, inputs: &DeployInputs) -> String {
    let content = image::rewrite(template, &inputs.image);
    let content = content.replace(constants::CERT_PLACEHOLDER, &pem::pipe_fold(&inputs.cert));
    content.replace(constants::KEY_PLACEHOLDER, &pem::pipe_fold(&inputs.key))
}

/// Read the template, render it, and write the deployable descriptor.
///
/// Re-running with the same environment and template produces a
/// byte-identical output file.
///
/// # Errors
///
/// Fails only when the template cannot be read or the output cannot be
/// written; empty inputs and pattern misses are not errors.
pub fn generate(inputs: &DeployInputs) -> Result<RenderSummary> {
    let template_path = Path::new(constants::TEMPLATE_FILE);
    debug!(path = %template_path.display(), "loading SDL template");
    let template = fs::read_to_string(template_path).map_err(|source| Error::ReadTemplate {
        path: template_path.to_path_buf(),
        source,
    })?;

    let rendered = render(&template, inputs);

    let output_path = Path::new(constants::OUTPUT_FILE);
    fs::write(output_path, &rendered).map_err(|source| Error::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!(path = %output_path.display(), "SDL written");

    Ok(RenderSummary {
        image: inputs.image.clone(),
        cert_chars: inputs.cert.chars().count(),
        key_chars: inputs.key.chars().count(),
    })
}
