//! # Pagecraft Store
//!
//! Async boundary around the synchronous engine: document persistence and
//! shared-block resolution.
//!
//! The engine treats both as opaque collaborators. Saves are last-write-wins
//! with no locking or retry; a failed save is reported once and the caller
//! decides when to re-issue it. Shared-block resolution runs at read/render
//! time only — the engine never blocks an edit on it.

mod blocks;
mod store;

pub use blocks::{resolve_connected, InMemoryBlockSource, SharedBlockSource};
pub use store::{JsonFileStore, PageStore, StoreError};
