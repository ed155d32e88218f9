//! # Page Document
//!
//! The unit of editing and durability: ordered sections + design theme +
//! incentive config, with a version counter and a dirty flag.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Hydrate → Edit (mutations) → Snapshot → Save
//!   ↓       ↓            ↓               ↓         ↓
//! Record  Document   version++        Record    Store
//! ```
//!
//! Every public edit runs to completion synchronously against in-memory
//! state. Saves happen at the boundary, are fire-and-forget from the
//! engine's perspective, and never block further edits — hence the
//! snapshot-version handshake in [`PageDocument::mark_saved`].

use std::sync::Arc;

use chrono::{DateTime, Utc};

use pagecraft_model::theme::DesignTheme;
use pagecraft_model::{
    IncentiveConfig, PageRecord, Preset, PresetCatalog, ResolvedTheme, Section,
};

use crate::collection::{Outcome, SectionCollection};
use crate::mutations::{Mutation, MutationOutcome};

/// Editable page document
#[derive(Debug, Clone)]
pub struct PageDocument {
    /// Document identifier; also seeds section ids
    id: String,

    /// Increments on every applied mutation
    version: u64,

    /// In-memory edits not yet confirmed persisted
    dirty: bool,

    /// Process-wide immutable preset catalog, shared by reference
    catalog: Arc<PresetCatalog>,

    pub(crate) sections: SectionCollection,
    pub(crate) theme: DesignTheme,
    pub(crate) incentive: Option<IncentiveConfig>,

    published_at: Option<DateTime<Utc>>,
}

impl PageDocument {
    /// Create an empty document
    pub fn new(id: impl Into<String>, catalog: Arc<PresetCatalog>) -> Self {
        let id = id.into();
        Self {
            sections: SectionCollection::new(&id),
            id,
            version: 0,
            dirty: false,
            catalog,
            theme: DesignTheme::default(),
            incentive: None,
            published_at: None,
        }
    }

    /// Hydrate from a persisted record
    ///
    /// Missing record fields have already been defaulted by serde; sparse
    /// or duplicated orders heal during hydration.
    pub fn hydrate(
        id: impl Into<String>,
        catalog: Arc<PresetCatalog>,
        record: PageRecord,
    ) -> Self {
        let id = id.into();
        Self {
            sections: SectionCollection::hydrate(&id, record.sections),
            id,
            version: 0,
            dirty: false,
            catalog,
            theme: record.design_theme,
            incentive: record.incentive_config,
            published_at: record.published_at,
        }
    }

    /// Snapshot the current state for persistence
    pub fn to_record(&self) -> PageRecord {
        PageRecord {
            sections: self.sections.sections().to_vec(),
            design_theme: self.theme.clone(),
            incentive_config: self.incentive.clone(),
            published_at: self.published_at,
        }
    }

    /// Apply one mutation; bumps the version and dirties the document only
    /// when something actually changed
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        let outcome = mutation.apply_to(self);
        if outcome.applied() {
            self.version += 1;
            self.dirty = true;
        }
        outcome
    }

    /// Closure-based update: read and patch one section atomically
    ///
    /// The mutation-enum path covers serializable intents; this is the
    /// escape hatch for callers that must inspect current settings/content
    /// while deciding the patch, without racing their own stale copies.
    pub fn update_section(&mut self, id: &str, f: impl FnOnce(&mut Section)) -> MutationOutcome {
        let previous = match self.sections.get(id) {
            Some(section) => section.clone(),
            None => return MutationOutcome::Noop,
        };
        match self.sections.update(id, f) {
            Outcome::Changed => {
                self.version += 1;
                self.dirty = true;
                MutationOutcome::single(Mutation::ReplaceSection { section: previous })
            }
            Outcome::Noop => MutationOutcome::Noop,
        }
    }

    /// Mark the first publish; anchors relative incentive deadlines
    ///
    /// The original anchor is kept once set, so relative tiers do not
    /// restart on every republish.
    pub fn publish(&mut self, at: DateTime<Utc>) -> Outcome {
        if self.published_at.is_some() {
            return Outcome::Noop;
        }
        self.published_at = Some(at);
        self.version += 1;
        self.dirty = true;
        Outcome::Changed
    }

    /// Clear the dirty flag for a completed save of `snapshot_version`
    ///
    /// Edits applied while that save was in flight are not part of it; the
    /// flag stays set so the caller issues a follow-up save.
    pub fn mark_saved(&mut self, snapshot_version: u64) {
        if self.version == snapshot_version {
            self.dirty = false;
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn sections(&self) -> &[Section] {
        self.sections.sections()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    /// Selection cursor; cursor moves are UI state, not edits, so they
    /// never dirty the document
    pub fn selected(&self) -> Option<&str> {
        self.sections.selected()
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.sections.select(id);
    }

    pub fn theme(&self) -> &DesignTheme {
        &self.theme
    }

    /// Theme with every knob resolved to a concrete value
    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.theme.resolve()
    }

    pub fn incentive(&self) -> Option<&IncentiveConfig> {
        self.incentive.as_ref()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// The preset this theme currently equals verbatim, if any
    pub fn active_preset(&self) -> Option<&Preset> {
        self.theme
            .active_preset_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::SectionKind;

    fn doc() -> PageDocument {
        PageDocument::new("page-1", Arc::new(PresetCatalog::builtin()))
    }

    #[test]
    fn test_new_document_is_clean_and_empty() {
        let doc = doc();

        assert_eq!(doc.version(), 0);
        assert!(!doc.is_dirty());
        assert!(doc.sections().is_empty());
        assert!(doc.incentive().is_none());
        assert!(doc.published_at().is_none());
    }

    #[test]
    fn test_applied_mutation_bumps_version_and_dirties() {
        let mut doc = doc();

        let outcome = doc.apply(Mutation::AddSection {
            kind: SectionKind::Hero,
        });

        assert!(outcome.applied());
        assert_eq!(doc.version(), 1);
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_noop_mutation_leaves_version_alone() {
        let mut doc = doc();

        let outcome = doc.apply(Mutation::RemoveSection {
            id: "stale".to_string(),
        });

        assert_eq!(outcome, MutationOutcome::Noop);
        assert_eq!(doc.version(), 0);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_mark_saved_respects_in_flight_edits() {
        let mut doc = doc();
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Hero,
        });

        // Caller snapshots version, then issues the async save.
        let snapshot = doc.version();
        let _record = doc.to_record();

        // An edit lands while the save is in flight.
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Faq,
        });

        doc.mark_saved(snapshot);
        assert!(doc.is_dirty(), "later edits keep the document dirty");

        let snapshot = doc.version();
        doc.mark_saved(snapshot);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_record_round_trip() {
        let mut doc = doc();
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Hero,
        });
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Pricing,
        });
        doc.apply(Mutation::ApplyPreset {
            preset_id: "classic".to_string(),
        });

        let record = doc.to_record();
        let rehydrated =
            PageDocument::hydrate("page-1", Arc::new(PresetCatalog::builtin()), record.clone());

        assert_eq!(rehydrated.sections(), doc.sections());
        assert_eq!(rehydrated.theme(), doc.theme());
        assert_eq!(rehydrated.to_record(), record);
    }

    #[test]
    fn test_publish_anchors_once() {
        let mut doc = doc();
        let first: DateTime<Utc> = "2026-08-01T00:00:00Z".parse().unwrap();
        let second: DateTime<Utc> = "2026-08-15T00:00:00Z".parse().unwrap();

        assert_eq!(doc.publish(first), Outcome::Changed);
        assert_eq!(doc.publish(second), Outcome::Noop);
        assert_eq!(doc.published_at(), Some(first));
    }

    #[test]
    fn test_update_section_closure_reads_current_state() {
        let mut doc = doc();
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Hero,
        });
        let id = doc.sections()[0].id.clone();

        doc.update_section(&id, |section| {
            // Read-modify against current state, not a stale copy.
            let label = format!("{} (copy)", section.display_label());
            section.custom_label = Some(label);
        });

        assert_eq!(doc.section(&id).unwrap().display_label(), "Hero (copy)");
    }
}
