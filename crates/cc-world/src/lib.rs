//! `cc-world`: the mutable world the engine plays out in.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`entity`]   | `Agent`, `Target`                                         |
//! | [`obstacle`] | `ObstacleSet` (R-tree over wall segments) + `can_move`    |
//! | [`spawn`]    | `SpawnArea`, `SpawnKind`: seeded placement in margins     |
//! | [`world`]    | `World`: agents + targets + obstacles, checked access     |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod entity;
pub mod error;
pub mod obstacle;
pub mod spawn;
pub mod world;


pub use entity::{Agent, Target};
pub use error::{WorldError, WorldResult};
pub use obstacle::ObstacleSet;
pub use spawn::{SpawnArea, SpawnKind};
pub use world::World;
