//! `cc-plan`: deciding which coin each bot goes after.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`assignment`] | `Assignment`: one `Option<TargetId>` per agent               |
//! | [`budget`]     | `SearchBudget`, `SearchStats`: optional node cap             |
//! | [`solver`]     | `AssignmentSolver` trait, `ExhaustiveSolver`, `GreedySolver` |
//! | [`route`]      | `RoutePlanner`, `Route`: best full visiting order per agent  |
//! | [`reassign`]   | nearest-eligible rebinding used every tick                   |
//!
//! # Cost model
//!
//! The exhaustive assignment and route searches are factorial in the target
//! count.  They run once, before the tick loop.  Per-tick rebinding uses the
//! linear [`reassign`] policy instead.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Per-agent route searches run on Rayon's thread pool.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.      |

pub mod assignment;
pub mod budget;
pub mod reassign;
pub mod route;
pub mod solver;

#[cfg(test)]
mod tests;

pub use assignment::Assignment;
pub use budget::{SearchBudget, SearchStats};
pub use reassign::{nearest_eligible, reassess_all, reassign, revalidate_all};
pub use route::{Route, RoutePlanner};
pub use solver::{AssignmentSolver, ExhaustiveSolver, GreedySolver, Solution};
