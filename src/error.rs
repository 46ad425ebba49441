use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort generation.
///
/// Only the two file operations are fatal; empty environment inputs and
/// image-pattern misses are deliberately not represented here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
