//! Deploy-time inputs resolved from the process environment.

use tracing::debug;

use crate::core::constants;

/// The three inputs the generator substitutes into the template.
///
/// All are read once at startup. An unset variable resolves to the
/// empty string: generation still runs and produces a structurally
/// valid but semantically broken descriptor, which is caught downstream
/// rather than here.
#[derive(Debug, Clone)]
pub struct DeployInputs {
    /// PEM origin certificate, newlines intact.
    pub cert: String,
    /// PEM origin private key, newlines intact.
    pub key: String,
    /// Container image reference, used verbatim.
    pub image: String,
}

impl DeployInputs {
    /// Read the inputs from the environment.
    pub fn from_env() -> Self {
        let inputs = Self {
            cert: env_or_empty(constants::CERT_ENV),
            key: env_or_empty(constants::KEY_ENV),
            image: env_or_empty(constants::IMAGE_ENV),
        };
        debug!(
            cert_chars = inputs.cert.chars().count(),
            key_chars = inputs.key.chars().count(),
            image = %inputs.image,
            "deploy inputs resolved"
        );
        inputs
    }
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
