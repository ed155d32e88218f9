//! # Section Collection Engine
//!
//! Owns the ordered section list and the selection cursor. Every operation
//! is a synchronous, atomic transformation; after any structural change the
//! `order` field is recomputed as the 1-based array index, so persisted
//! order and array order never drift apart (downstream renderers and
//! drag-and-drop surfaces key by array position).
//!
//! Operations on a missing id are silent no-ops. An interactive editor
//! races optimistic UI state against async saves, so a stale id is an
//! expected condition, not an error.

use pagecraft_model::{
    default_content_for, IdGenerator, Preset, Section, SectionKind, SectionSettings,
    SettingsPatch, SharedBlock, SharedBlockRef,
};
use std::collections::HashMap;

/// Whether an operation changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    /// Target missing or nothing to do; state is untouched
    Noop,
}

impl Outcome {
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

/// Ordered section list plus selection cursor
#[derive(Debug, Clone)]
pub struct SectionCollection {
    sections: Vec<Section>,
    selected: Option<String>,
    ids: IdGenerator,
}

impl SectionCollection {
    pub fn new(document_id: &str) -> Self {
        Self {
            sections: Vec::new(),
            selected: None,
            ids: IdGenerator::new(document_id),
        }
    }

    /// Hydrate from persisted sections
    ///
    /// Sections are re-sorted by their persisted `order` and renumbered, so
    /// a document with gaps or duplicates (hand-edited, or from an older
    /// writer) heals on load. The id generator resumes past taken ids.
    pub fn hydrate(document_id: &str, mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|s| s.order);
        let mut ids = IdGenerator::new(document_id);
        ids.resume_past(sections.iter().map(|s| s.id.as_str()));

        let mut collection = Self {
            sections,
            selected: None,
            ids,
        };
        collection.renumber();
        collection
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Currently selected section id, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Move the selection cursor; selecting a missing id clears it
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.sections.iter().any(|s| s.id == *id))
            .map(str::to_string);
    }

    /// Append a new section and select it. Never fails.
    ///
    /// When a preset is active its settings fragment for this kind seeds the
    /// new section's settings.
    pub fn add(&mut self, kind: SectionKind, preset: Option<&Preset>) -> &Section {
        let id = self.ids.next_id();
        let order = self.sections.len() as u32 + 1;
        let section = Section::create(id.clone(), kind, order, preset);

        self.sections.push(section);
        self.selected = Some(id);
        self.sections.last().expect("just pushed")
    }

    /// Remove a section and renumber; clears the cursor if it pointed there
    pub fn remove(&mut self, id: &str) -> Outcome {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return Outcome::Noop;
        };

        self.sections.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.renumber();
        Outcome::Changed
    }

    /// Remove and return a section (undo support)
    pub(crate) fn take(&mut self, id: &str) -> Option<(Section, usize)> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        let section = self.sections.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.renumber();
        Some((section, index))
    }

    /// Insert a section at an index, clamped to the list length (undo support)
    pub(crate) fn insert_at(&mut self, section: Section, index: usize) {
        let index = index.min(self.sections.len());
        self.sections.insert(index, section);
        self.renumber();
    }

    /// Replace a section in place, matched by id (undo support)
    pub(crate) fn replace(&mut self, section: Section) -> Outcome {
        let Some(slot) = self.sections.iter_mut().find(|s| s.id == section.id) else {
            return Outcome::Noop;
        };
        let order = slot.order;
        *slot = section;
        slot.order = order;
        Outcome::Changed
    }

    /// Apply a closure to one section, reading and writing atomically
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut Section)) -> Outcome {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            return Outcome::Noop;
        };
        let order = section.order;
        f(section);
        // Order is owned by the collection, never by callers.
        section.order = order;
        Outcome::Changed
    }

    /// Commit a permutation of the existing sections
    ///
    /// The caller supplies the full list of ids in their new order (the
    /// drag gesture itself lives upstream). Unknown ids are ignored;
    /// sections missing from the list keep their relative order at the
    /// tail. Everything is renumbered to a dense 1..N afterwards.
    pub fn reorder(&mut self, ordered_ids: &[String]) -> Outcome {
        if self.sections.is_empty() {
            return Outcome::Noop;
        }

        let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(ordered_ids.len());
        for (position, id) in ordered_ids.iter().enumerate() {
            by_id.entry(id.as_str()).or_insert(position);
        }

        // Stable sort: listed sections take their new positions, unlisted
        // ones sink to the tail keeping their relative order.
        self.sections.sort_by_key(|s| {
            by_id
                .get(s.id.as_str())
                .copied()
                .unwrap_or(usize::MAX)
        });
        self.renumber();
        Outcome::Changed
    }

    /// Flip visibility; order is untouched so the toggle is reversible
    pub fn toggle_visibility(&mut self, id: &str) -> Outcome {
        self.update(id, |section| section.visible = !section.visible)
    }

    /// Append a copy of a shared block as a new section
    ///
    /// With `connected = true` the section carries a [`SharedBlockRef`] so
    /// the render-time resolver substitutes the block's latest content and
    /// local edits can later be recognized as diverging from the source.
    pub fn attach_shared_block(&mut self, block: &SharedBlock, connected: bool) -> &Section {
        let id = self.ids.next_id();
        let order = self.sections.len() as u32 + 1;

        let section = Section {
            id: id.clone(),
            kind: block.kind,
            order,
            visible: true,
            custom_label: Some(block.name.clone()),
            settings: block.settings.clone(),
            content: block.content.clone(),
            shared_block: connected.then(|| SharedBlockRef {
                id: block.id.clone(),
                name: block.name.clone(),
                connected: true,
            }),
        };

        self.sections.push(section);
        self.selected = Some(id);
        self.sections.last().expect("just pushed")
    }

    /// Clear the shared-block link, keeping settings/content as an
    /// independent copy. There is no re-attach short of repeating
    /// [`SectionCollection::attach_shared_block`].
    pub fn detach_shared_block(&mut self, id: &str) -> Outcome {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            return Outcome::Noop;
        };
        if section.shared_block.is_none() {
            return Outcome::Noop;
        }
        section.shared_block = None;
        Outcome::Changed
    }

    /// Fill preset defaults into sections the user has not customized
    ///
    /// A section with an explicit `variant` already chosen is left entirely
    /// untouched; one without a variant receives the preset's fragment for
    /// its kind. This is the non-destructive half of preset application.
    pub fn apply_preset_defaults(
        &mut self,
        defaults: &HashMap<SectionKind, SettingsPatch>,
    ) -> Vec<(String, SectionSettings)> {
        let mut touched = Vec::new();
        for section in &mut self.sections {
            if section.settings.variant.is_some() {
                continue;
            }
            if let Some(fragment) = defaults.get(&section.kind) {
                touched.push((section.id.clone(), section.settings.clone()));
                section.settings.merge_defaults(fragment);
            }
        }
        touched
    }

    /// Change a content block's kind, resetting content to the new kind's
    /// placeholder. Only content blocks may change kind.
    pub fn convert_content_block(&mut self, id: &str, kind: SectionKind) -> Outcome {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            return Outcome::Noop;
        };
        if section.kind != SectionKind::ContentBlock || kind == SectionKind::ContentBlock {
            return Outcome::Noop;
        }

        section.kind = kind;
        section.content = default_content_for(kind);
        Outcome::Changed
    }

    /// Restore order to the dense 1-based array index
    fn renumber(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{PresetCatalog, SectionContent};

    fn collection() -> SectionCollection {
        SectionCollection::new("doc-1")
    }

    fn orders(c: &SectionCollection) -> Vec<u32> {
        c.sections().iter().map(|s| s.order).collect()
    }

    #[test]
    fn test_add_appends_and_selects() {
        let mut c = collection();

        let hero_id = c.add(SectionKind::Hero, None).id.clone();
        assert_eq!(c.selected(), Some(hero_id.as_str()));

        c.add(SectionKind::Pricing, None);
        c.add(SectionKind::Faq, None);

        assert_eq!(orders(&c), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_seeds_preset_defaults() {
        let catalog = PresetCatalog::builtin();
        let mut c = collection();

        let section = c.add(SectionKind::Hero, catalog.get("modern"));
        assert_eq!(section.settings.variant.as_deref(), Some("clean"));

        // No fragment for this kind under the preset
        let section = c.add(SectionKind::Video, catalog.get("modern"));
        assert!(section.settings.variant.is_none());
    }

    #[test]
    fn test_remove_renumbers_densely() {
        let mut c = collection();
        c.add(SectionKind::Hero, None);
        let middle = c.add(SectionKind::Pricing, None).id.clone();
        c.add(SectionKind::Faq, None);

        assert_eq!(c.remove(&middle), Outcome::Changed);
        assert_eq!(orders(&c), vec![1, 2]);
        assert_eq!(c.sections()[1].kind, SectionKind::Faq);
    }

    #[test]
    fn test_remove_clears_selection_of_removed() {
        let mut c = collection();
        c.add(SectionKind::Hero, None);
        let id = c.add(SectionKind::Pricing, None).id.clone();
        assert_eq!(c.selected(), Some(id.as_str()));

        c.remove(&id);
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn test_missing_id_operations_are_noops() {
        let mut c = collection();
        c.add(SectionKind::Hero, None);
        let before = c.sections().to_vec();

        assert_eq!(c.remove("nope"), Outcome::Noop);
        assert_eq!(c.toggle_visibility("nope"), Outcome::Noop);
        assert_eq!(c.update("nope", |s| s.visible = false), Outcome::Noop);
        assert_eq!(c.detach_shared_block("nope"), Outcome::Noop);

        assert_eq!(c.sections(), before.as_slice());
    }

    #[test]
    fn test_reorder_commits_permutation() {
        let mut c = collection();
        let hero = c.add(SectionKind::Hero, None).id.clone();
        let pricing = c.add(SectionKind::Pricing, None).id.clone();
        let faq = c.add(SectionKind::Faq, None).id.clone();

        c.reorder(&[faq.clone(), hero.clone(), pricing.clone()]);

        let kinds: Vec<_> = c.sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Faq, SectionKind::Hero, SectionKind::Pricing]
        );
        assert_eq!(orders(&c), vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_with_partial_list_keeps_rest_at_tail() {
        let mut c = collection();
        let hero = c.add(SectionKind::Hero, None).id.clone();
        c.add(SectionKind::Pricing, None);
        let faq = c.add(SectionKind::Faq, None).id.clone();

        c.reorder(&[faq, hero, "stale-id".to_string()]);

        let kinds: Vec<_> = c.sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Faq, SectionKind::Hero, SectionKind::Pricing]
        );
        assert_eq!(orders(&c), vec![1, 2, 3]);
    }

    #[test]
    fn test_toggle_visibility_keeps_order() {
        let mut c = collection();
        c.add(SectionKind::Hero, None);
        let id = c.add(SectionKind::Pricing, None).id.clone();

        c.toggle_visibility(&id);
        assert!(!c.get(&id).unwrap().visible);
        assert_eq!(c.get(&id).unwrap().order, 2);

        c.toggle_visibility(&id);
        assert!(c.get(&id).unwrap().visible);
    }

    #[test]
    fn test_update_cannot_change_order() {
        let mut c = collection();
        c.add(SectionKind::Hero, None);
        let id = c.add(SectionKind::Pricing, None).id.clone();

        c.update(&id, |s| s.order = 99);

        assert_eq!(orders(&c), vec![1, 2]);
    }

    #[test]
    fn test_attach_connected_block_stamps_ref() {
        let mut c = collection();
        let block = SharedBlock {
            id: "blk-1".to_string(),
            name: "Service area".to_string(),
            kind: SectionKind::Faq,
            settings: SectionSettings {
                variant: Some("accordion".to_string()),
                ..SectionSettings::default()
            },
            content: default_content_for(SectionKind::Faq),
        };

        let section = c.attach_shared_block(&block, true);
        let shared = section.shared_block.as_ref().unwrap();
        assert_eq!(shared.id, "blk-1");
        assert!(shared.connected);
        assert_eq!(section.settings.variant.as_deref(), Some("accordion"));

        let copy = c.attach_shared_block(&block, false);
        assert!(copy.shared_block.is_none());
    }

    #[test]
    fn test_detach_keeps_content_copy() {
        let mut c = collection();
        let block = SharedBlock {
            id: "blk-1".to_string(),
            name: "Hours".to_string(),
            kind: SectionKind::Contact,
            settings: SectionSettings::default(),
            content: default_content_for(SectionKind::Contact),
        };

        let id = c.attach_shared_block(&block, true).id.clone();
        assert_eq!(c.detach_shared_block(&id), Outcome::Changed);

        let section = c.get(&id).unwrap();
        assert!(section.shared_block.is_none());
        assert_eq!(section.content, block.content);
        assert_eq!(section.settings, block.settings);

        // detaching twice is a no-op
        assert_eq!(c.detach_shared_block(&id), Outcome::Noop);
    }

    #[test]
    fn test_preset_defaults_skip_customized_sections() {
        let catalog = PresetCatalog::builtin();
        let mut c = collection();
        let custom = c.add(SectionKind::Hero, None).id.clone();
        let fresh = c.add(SectionKind::Pricing, None).id.clone();

        c.update(&custom, |s| s.settings.variant = Some("split".to_string()));

        let defaults = &catalog.get("modern").unwrap().section_defaults;
        c.apply_preset_defaults(defaults);

        assert_eq!(c.get(&custom).unwrap().settings.variant.as_deref(), Some("split"));
        assert_eq!(c.get(&fresh).unwrap().settings.variant.as_deref(), Some("cards"));
    }

    #[test]
    fn test_convert_content_block_only() {
        let mut c = collection();
        let hero = c.add(SectionKind::Hero, None).id.clone();
        let block = c.add(SectionKind::ContentBlock, None).id.clone();

        assert_eq!(c.convert_content_block(&hero, SectionKind::Faq), Outcome::Noop);
        assert_eq!(c.convert_content_block(&block, SectionKind::Faq), Outcome::Changed);

        let converted = c.get(&block).unwrap();
        assert_eq!(converted.kind, SectionKind::Faq);
        assert!(matches!(converted.content, SectionContent::Faq(_)));
    }

    #[test]
    fn test_hydrate_heals_sparse_orders() {
        let mut source = collection();
        source.add(SectionKind::Hero, None);
        source.add(SectionKind::Pricing, None);
        let mut sections = source.sections().to_vec();
        sections[0].order = 7;
        sections[1].order = 3;

        let c = SectionCollection::hydrate("doc-1", sections);

        assert_eq!(orders(&c), vec![1, 2]);
        assert_eq!(c.sections()[0].kind, SectionKind::Pricing);
    }

    #[test]
    fn test_hydrated_ids_do_not_collide() {
        let mut source = collection();
        source.add(SectionKind::Hero, None);
        let sections = source.sections().to_vec();
        let existing = sections[0].id.clone();

        let mut c = SectionCollection::hydrate("doc-1", sections);
        let fresh = c.add(SectionKind::Faq, None).id.clone();

        assert_ne!(existing, fresh);
    }
}
