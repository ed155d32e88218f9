//! # Pagecraft Editor
//!
//! Stateful page composition engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: sections, themes, presets (pure data)│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: PageDocument lifecycle + mutations  │
//! │  - Ordered section collection + selection   │
//! │  - Atomic, reorder-stable transformations   │
//! │  - Preset application (theme + defaults)    │
//! │  - Undo/redo over restore-style inverses    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: async load/save of the page record   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the unit of durability**: sections, theme and
//!    incentive config persist together or not at all
//! 2. **Synchronous engine, async boundary**: every edit runs to completion
//!    in memory; only load/save suspend, and they never block edits
//! 3. **Dense order invariant**: `order` always equals the 1-based array
//!    index after a mutation — no gaps, no duplicates
//! 4. **Silent no-ops on stale ids**: optimistic UIs race async state;
//!    operating on a vanished section is expected, not exceptional
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pagecraft_editor::{Mutation, PageDocument};
//! use pagecraft_model::{PresetCatalog, SectionKind};
//!
//! let catalog = Arc::new(PresetCatalog::builtin());
//! let mut doc = PageDocument::new("page-84", catalog);
//!
//! doc.apply(Mutation::AddSection { kind: SectionKind::Hero });
//! doc.apply_preset_by_id("modern");
//!
//! let snapshot = doc.version();
//! let record = doc.to_record();
//! // ... hand `record` to the store, then:
//! doc.mark_saved(snapshot);
//! ```

mod collection;
mod controller;
mod document;
mod mutations;
mod undo_stack;

pub use collection::{Outcome, SectionCollection};
pub use document::PageDocument;
pub use mutations::{Mutation, MutationOutcome};
pub use undo_stack::{MutationBatch, UndoStack};
