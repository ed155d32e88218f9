//! # Section Model
//!
//! A [`Section`] is one composable, independently configurable unit of a
//! page: hero, pricing table, FAQ, and so on. Sections are pure data — the
//! ordering, selection and mutation rules live in the editor's collection
//! engine.
//!
//! Invariants enforced by the collection engine, stated here for reference:
//!
//! - `order` values form a dense `1..=N` permutation after every mutation
//! - no two sections in a document share an `id`
//! - `kind` is immutable once created, except for `ContentBlock` cells
//!   converted through the explicit conversion mutation

use serde::{Deserialize, Serialize};

use crate::content::{default_content_for, SectionContent};
use crate::settings::SectionSettings;

/// Closed enumeration of section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Hero,
    Pricing,
    Faq,
    Gallery,
    Testimonials,
    Contact,
    Video,
    Cta,
    /// Free-form cell with a user-defined payload (custom HTML, embeds)
    ContentBlock,
}

impl SectionKind {
    /// All kinds, in the order the section picker presents them
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Hero,
        SectionKind::Pricing,
        SectionKind::Faq,
        SectionKind::Gallery,
        SectionKind::Testimonials,
        SectionKind::Contact,
        SectionKind::Video,
        SectionKind::Cta,
        SectionKind::ContentBlock,
    ];

    /// Default display label, overridable per section via `custom_label`
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero",
            SectionKind::Pricing => "Pricing",
            SectionKind::Faq => "FAQ",
            SectionKind::Gallery => "Gallery",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Contact => "Contact",
            SectionKind::Video => "Video",
            SectionKind::Cta => "Call to Action",
            SectionKind::ContentBlock => "Content Block",
        }
    }
}

/// Link from a section back to the shared block it was attached from
///
/// While `connected` is true an external resolver is expected to substitute
/// the block's current content at render time. The engine only carries the
/// reference; it never auto-disconnects on local edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedBlockRef {
    pub id: String,
    pub name: String,
    pub connected: bool,
}

/// A reusable block stored once and attachable to many documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedBlock {
    pub id: String,
    pub name: String,
    pub kind: SectionKind,
    pub settings: SectionSettings,
    pub content: SectionContent,
}

/// One composable unit of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Opaque identifier, stable for the section's lifetime
    pub id: String,

    pub kind: SectionKind,

    /// 1-based position among siblings; dense, no gaps or duplicates
    pub order: u32,

    /// Hidden sections are retained so the toggle is reversible
    pub visible: bool,

    /// Optional label overriding `kind.label()` in editor chrome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,

    #[serde(default)]
    pub settings: SectionSettings,

    pub content: SectionContent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_block: Option<SharedBlockRef>,
}

impl Section {
    /// Construct a fresh section with placeholder content
    ///
    /// Pure construction: the caller supplies the id and target order and is
    /// responsible for inserting the result into a collection. When a preset
    /// is active its settings fragment for this kind seeds `settings`.
    pub fn create(
        id: String,
        kind: SectionKind,
        order: u32,
        preset: Option<&crate::preset::Preset>,
    ) -> Self {
        let settings = preset
            .and_then(|p| p.section_defaults.get(&kind))
            .map(|fragment| {
                let mut s = SectionSettings::default();
                s.merge(fragment);
                s
            })
            .unwrap_or_default();

        Self {
            id,
            kind,
            order,
            visible: true,
            custom_label: None,
            settings,
            content: default_content_for(kind),
            shared_block: None,
        }
    }

    /// Display label for editor chrome
    pub fn display_label(&self) -> &str {
        self.custom_label.as_deref().unwrap_or_else(|| self.kind.label())
    }

    /// Whether this section tracks a shared block for render-time sync
    pub fn is_connected(&self) -> bool {
        self.shared_block.as_ref().map(|r| r.connected).unwrap_or(false)
    }
}
