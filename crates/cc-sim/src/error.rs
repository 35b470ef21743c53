use thiserror::Error;

use cc_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match configured count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    World(#[from] WorldError),
}

pub type SimResult<T> = Result<T, SimError>;
