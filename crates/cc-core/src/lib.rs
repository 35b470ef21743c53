//! `cc-core`: foundational types for the coin-collector engine.
//!
//! This crate is a dependency of every other `cc-*` crate.  It has no `cc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `TargetId`                                      |
//! | [`geo`]   | `Point`, `Segment`, `distance`, `segments_intersect`       |
//! | [`time`]  | `Tick`                                                     |
//! | [`rng`]   | `SimRng` (seeded spawn randomness)                         |
//! | [`error`] | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Point, Segment, distance, segments_intersect};
pub use ids::{AgentId, TargetId};
pub use rng::SimRng;
pub use time::Tick;
