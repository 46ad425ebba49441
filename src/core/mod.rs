//! Core library components.
//!
//! The substitution pipeline and its inputs: environment resolution,
//! PEM folding, image-reference rewriting, and SDL rendering.

pub mod constants;
pub mod env;
pub mod image;
pub mod pem;
pub mod sdl;
