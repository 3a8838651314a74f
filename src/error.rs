// src/error.rs

//! Error types for recipe configuration resolution
//!
//! Every resolution failure is fatal: a malformed recipe or mismatched
//! environment is surfaced to the invoking operator, never retried.

use thiserror::Error;

/// Errors that can occur while resolving a recipe configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Version pattern absent or malformed in the source artifact
    #[error("Artifact format error: {0}")]
    ArtifactFormat(String),

    /// Configured compiler standard is below the recipe's declared minimum
    #[error("Compiler standard mismatch: recipe requires C++{required}, toolchain is configured for C++{configured}")]
    StandardMismatch { required: u32, configured: u32 },

    /// The opaque external build/install step reported failure
    #[error("External build failed: {0}")]
    BuildFailed(String),

    /// I/O error while reading recipe inputs
    #[error("I/O error: {0}")]
    IoError(String),

    /// Recipe file or settings value could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
