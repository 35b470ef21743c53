//! `cc-sim`: the coin-collector engine and its tick driver.
//!
//! # Tick
//!
//! ```text
//! startup:  spawn → precompute routes → optimize_assignments
//! per tick:
//!   ① Movement   : each bound agent steps toward its target unless the
//!                  combined step crosses a wall.
//!   ② Collection : bound agents within radius collect and are rebound;
//!                  unbound agents are re-checked; if anything was
//!                  collected, every stale binding is revalidated.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`config`]   | `EngineConfig` + `validate`                               |
//! | [`engine`]   | `Engine`, `MoveReport`, `CollectionReport`, `TickReport`  |
//! | [`builder`]  | `EngineBuilder`: solver choice, explicit positions        |
//! | [`observer`] | `EngineObserver`, `NoopObserver`                          |
//! | [`runner`]   | `Runner` (owns the tick counter), `RunSummary`            |
//! | [`snapshot`] | `Snapshot`: immutable per-frame view                      |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Route precomputation runs on Rayon's thread pool.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config/snapshots. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cc_sim::{Engine, EngineConfig, NoopObserver, Runner};
//!
//! let mut engine = Engine::new(5, 10, 800, 600, EngineConfig::default_walls())?;
//! engine.optimize_assignments();
//! let summary = Runner::new(10_000).run(&mut engine, &mut NoopObserver);
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod runner;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::{CollectionReport, Engine, MoveReport, TickReport};
pub use error::{SimError, SimResult};
pub use observer::{EngineObserver, NoopObserver};
pub use runner::{RunSummary, Runner};
pub use snapshot::{AgentView, Snapshot, TargetView};
