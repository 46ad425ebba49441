//! Constants used throughout sdl-gen.
//!
//! Centralizes file paths, environment variable names, and the
//! substitution tokens recognized in the SDL template.

/// SDL template read from the working directory.
pub const TEMPLATE_FILE: &str = "deploy-akash-ip-lease.yaml";

/// Rendered SDL written next to the template (overwritten silently).
pub const OUTPUT_FILE: &str = "deploy-with-tls.yaml";

/// Environment variable holding the PEM origin certificate.
pub const CERT_ENV: &str = "CLOUDFLARE_ORIGIN_CERT";

/// Environment variable holding the PEM origin private key.
pub const KEY_ENV: &str = "CLOUDFLARE_ORIGIN_KEY";

/// Environment variable holding the container image reference.
pub const IMAGE_ENV: &str = "IMAGE";

/// Template token replaced with the folded certificate.
pub const CERT_PLACEHOLDER: &str = "<REPLACE_WITH_ORIGIN_CERT>";

/// Template token replaced with the folded key.
pub const KEY_PLACEHOLDER: &str = "<REPLACE_WITH_ORIGIN_KEY>";

/// Registry host the image-reference pattern is anchored to.
pub const IMAGE_REGISTRY: &str = "registry.example";

/// Image name the image-reference pattern is anchored to.
pub const IMAGE_NAME: &str = "infrastructure-proxy-pingap";
