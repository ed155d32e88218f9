//! # Shared-Block Resolution
//!
//! Sections attached from a shared block with `connected = true` show the
//! block's *current* content when rendered, not the copy captured at attach
//! time. That substitution happens here, at read time — the engine only
//! carries the reference and never blocks an edit on it.
//!
//! Resolution degrades instead of failing: a ref whose block has vanished
//! (or changed kind) keeps the section's local copy.

use std::collections::HashMap;

use tracing::warn;

use pagecraft_model::{Section, SharedBlock};

/// Source of shared blocks, keyed by block id
pub trait SharedBlockSource {
    fn block(&self, id: &str) -> Option<&SharedBlock>;
}

/// Block source backed by a plain map; also the test double
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlockSource {
    blocks: HashMap<String, SharedBlock>,
}

impl InMemoryBlockSource {
    pub fn new(blocks: impl IntoIterator<Item = SharedBlock>) -> Self {
        Self {
            blocks: blocks
                .into_iter()
                .map(|b| (b.id.clone(), b))
                .collect(),
        }
    }
}

impl SharedBlockSource for InMemoryBlockSource {
    fn block(&self, id: &str) -> Option<&SharedBlock> {
        self.blocks.get(id)
    }
}

/// Substitute current shared-block content into connected sections
///
/// Invoked by the rendering surface on its copy of the section list.
/// Disconnected refs and plain sections pass through untouched.
pub fn resolve_connected(sections: &[Section], source: &dyn SharedBlockSource) -> Vec<Section> {
    sections
        .iter()
        .map(|section| {
            let Some(shared) = section.shared_block.as_ref().filter(|r| r.connected) else {
                return section.clone();
            };

            let Some(block) = source.block(&shared.id) else {
                warn!(
                    section_id = %section.id,
                    block_id = %shared.id,
                    "connected shared block missing; rendering local copy"
                );
                return section.clone();
            };

            if block.kind != section.kind {
                warn!(
                    section_id = %section.id,
                    block_id = %shared.id,
                    "shared block changed kind; rendering local copy"
                );
                return section.clone();
            }

            let mut resolved = section.clone();
            resolved.settings = block.settings.clone();
            resolved.content = block.content.clone();
            resolved
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{
        default_content_for, SectionContent, SectionKind, SectionSettings, SharedBlockRef,
    };

    fn section_with_ref(connected: bool) -> Section {
        Section {
            id: "s-1".to_string(),
            kind: SectionKind::Faq,
            order: 1,
            visible: true,
            custom_label: None,
            settings: SectionSettings::default(),
            content: default_content_for(SectionKind::Faq),
            shared_block: Some(SharedBlockRef {
                id: "blk-1".to_string(),
                name: "Common questions".to_string(),
                connected,
            }),
        }
    }

    fn upstream_block() -> SharedBlock {
        SharedBlock {
            id: "blk-1".to_string(),
            name: "Common questions".to_string(),
            kind: SectionKind::Faq,
            settings: SectionSettings {
                variant: Some("accordion".to_string()),
                ..SectionSettings::default()
            },
            content: default_content_for(SectionKind::Faq),
        }
    }

    #[test]
    fn test_connected_section_gets_current_block_content() {
        let source = InMemoryBlockSource::new([upstream_block()]);
        let sections = vec![section_with_ref(true)];

        let resolved = resolve_connected(&sections, &source);

        assert_eq!(resolved[0].settings.variant.as_deref(), Some("accordion"));
        // the ref itself survives resolution
        assert!(resolved[0].shared_block.is_some());
    }

    #[test]
    fn test_disconnected_section_keeps_local_copy() {
        let source = InMemoryBlockSource::new([upstream_block()]);
        let sections = vec![section_with_ref(false)];

        let resolved = resolve_connected(&sections, &source);

        assert!(resolved[0].settings.variant.is_none());
    }

    #[test]
    fn test_missing_block_degrades_to_local_copy() {
        let source = InMemoryBlockSource::default();
        let sections = vec![section_with_ref(true)];

        let resolved = resolve_connected(&sections, &source);

        assert_eq!(resolved[0], sections[0]);
    }

    #[test]
    fn test_kind_mismatch_degrades_to_local_copy() {
        let mut block = upstream_block();
        block.kind = SectionKind::Hero;
        block.content = default_content_for(SectionKind::Hero);
        let source = InMemoryBlockSource::new([block]);
        let sections = vec![section_with_ref(true)];

        let resolved = resolve_connected(&sections, &source);

        assert!(matches!(resolved[0].content, SectionContent::Faq(_)));
    }
}
