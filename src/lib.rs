//! sdl-gen - Akash SDL generator with origin TLS injection.
//!
//! Reads the Cloudflare origin certificate, the origin private key, and
//! a container image reference from the environment, substitutes them
//! into the SDL template, and writes the deployable descriptor.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # The generate operation
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Paths, env names, template tokens
//!     ├── env           # Deploy inputs from the environment
//!     ├── pem           # Newline→pipe folding of PEM text
//!     ├── image         # Image-reference line rewriting
//!     └── sdl           # Render pipeline and file I/O
//! ```
//!
//! The substitution is deliberately mechanical: no YAML parsing, no
//! certificate validation, no retries. Empty inputs warn and render
//! empty; only template-read and output-write failures abort.

pub mod cli;
pub mod core;
pub mod error;
