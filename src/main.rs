//! sdl-gen - Akash SDL generator with origin TLS injection.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sdl_gen::cli::output;
use sdl_gen::cli::{execute, Cli};
use sdl_gen::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SDL_GEN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sdl_gen=debug")
        } else {
            EnvFilter::new("sdl_gen=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute() {
        let hint = match &e {
            Error::ReadTemplate { .. } => {
                Some("run from the directory containing deploy-akash-ip-lease.yaml")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint_text) = hint {
            output::hint(hint_text);
        }
        std::process::exit(1);
    }
}
