//! Test support utilities for sdl-gen integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// The generator resolves its template and output paths against the
/// working directory, so each test gets its own. No process-global
/// state is mutated — child processes use `.current_dir()` and explicit
/// env vars, so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory for the generator
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment (no template on disk).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with the standard template written.
    pub fn with_template() -> Self {
        let t = Self::new();
        t.write_template(fixtures::TEMPLATE);
        t
    }
}
