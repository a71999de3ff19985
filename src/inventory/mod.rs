//! Installed-state inventory.
//!
//! The drift checker never talks to the package manager directly. It asks a
//! [`StateSource`] for one [`Facet`] at a time through a per-run
//! [`Snapshot`], which fetches each facet lazily and at most once.
//!
//! # Modules
//!
//! - [`source`] - The `StateSource` trait and `Facet` enum
//! - [`snapshot`] - Memoized per-run view over a source
//! - [`brew`] - Live source backed by `brew` and `mas`
//! - [`memory`] - In-memory source for tests

pub mod brew;
pub mod memory;
pub mod snapshot;
pub mod source;

pub use brew::BrewStateSource;
pub use memory::InMemoryStateSource;
pub use snapshot::Snapshot;
pub use source::{Facet, StateSource};
