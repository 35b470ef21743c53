//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{count} {what} do not fit in a 32-bit id space")]
    IdOverflow { what: &'static str, count: usize },
}

/// Shorthand result type for `cc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
