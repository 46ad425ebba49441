//! Command-line interface.

pub mod generate;
pub mod output;

use clap::Parser;

/// sdl-gen - render Akash SDL manifests with origin TLS material.
///
/// A single-operation tool: invoking the binary runs the generator.
/// Inputs come from the environment, not from flags.
#[derive(Parser)]
#[command(
    name = "sdl-gen",
    about = "Render the Akash SDL template with origin TLS material from the environment",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the one operation this tool has.
pub fn execute() -> crate::error::Result<()> {
    generate::execute()
}
