//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are plain indices into the engine's agent and target vectors.  There
//! is no "invalid" sentinel: an absent binding is `Option<TargetId>::None`,
//! never a magic value that could be mistaken for a real index.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty), $what:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Check that a collection of `count` entities can be addressed
            /// by this id type.
            pub fn check_count(count: usize) -> CoreResult<()> {
                if count > <$inner>::MAX as usize {
                    return Err(CoreError::IdOverflow { what: $what, count });
                }
                Ok(())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent (bot).
    pub struct AgentId(u32), "agents";
}

typed_id! {
    /// Index of a target (coin).
    pub struct TargetId(u32), "targets";
}
