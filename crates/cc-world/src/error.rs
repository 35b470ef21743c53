//! World-subsystem error type.

use thiserror::Error;

use cc_core::CoreError;

/// Errors produced by `cc-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("{kind} index {index} out of range (have {len})")]
    OutOfRange {
        kind:  &'static str,
        index: usize,
        len:   usize,
    },

    #[error("spawn extent {extent} is too small for margin {margin} (need extent > 3 * margin)")]
    SpawnArea { extent: i32, margin: i32 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type WorldResult<T> = Result<T, WorldError>;
