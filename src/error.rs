//! Error types for readme-lint operations.
//!
//! This module defines [`ReadmeLintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Lint findings are *not* errors: a document that fails house-style rules
//! produces [`Finding`](crate::lint::Finding) values, never a
//! `ReadmeLintError`. Errors are reserved for environment failures that
//! prevent linting from happening at all, so a caller can distinguish
//! "bad document" from "broken tool run". A missing document is special-cased
//! as a finding, not an error (see [`Linter::run`](crate::lint::Linter::run)).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for readme-lint operations.
#[derive(Debug, Error)]
pub enum ReadmeLintError {
    /// The target document exists but could not be read (permissions, I/O fault).
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper (output stream failures and the like).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for readme-lint operations.
pub type Result<T> = std::result::Result<T, ReadmeLintError>;
