//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an sdl-gen command with a scrubbed environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - The three input variables removed, so values leaking in from
    ///   the invoking shell cannot skew a test
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sdl-gen").expect("failed to find sdl-gen binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("CLOUDFLARE_ORIGIN_CERT");
        cmd.env_remove("CLOUDFLARE_ORIGIN_KEY");
        cmd.env_remove("IMAGE");
        cmd.env_remove("SDL_GEN_LOG");
        cmd
    }

    /// Run the generator with no inputs set.
    pub fn generate(&self) -> Output {
        self.cmd().output().expect("failed to run sdl-gen")
    }

    /// Run the generator with the given env vars set.
    pub fn generate_with(&self, vars: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        for (key, value) in vars {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to run sdl-gen")
    }
}
