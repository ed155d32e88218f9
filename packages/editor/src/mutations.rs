//! # Document Mutations
//!
//! Intent-preserving operations on a [`PageDocument`], one variant per
//! editor action.
//!
//! ## Mutation Semantics
//!
//! ### Structural (AddSection / RemoveSection / Reorder / AttachSharedBlock)
//! - Atomic against the in-memory document
//! - Orders are renumbered to a dense 1..N after every application
//!
//! ### Content and settings
//! - `UpdateSettings` merges field-wise; `ReplaceContent` is an atomic
//!   payload swap (no diffing) and silently refuses a kind mismatch
//!
//! ### Stale targets
//! - Every mutation aimed at a missing id is a silent no-op. Optimistic UI
//!   races against async saves are expected; the engine favors resilience
//!   over errors here.
//!
//! ### Inverses
//! - An applied mutation reports restore-style inverses (captured state,
//!   not replayed intents) so undo/redo keeps generated ids stable.

use serde::{Deserialize, Serialize};

use pagecraft_model::theme::DesignTheme;
use pagecraft_model::{
    IncentiveConfig, Section, SectionContent, SectionKind, SectionSettings, SettingsPatch,
    SharedBlock, SharedBlockRef, ThemePatch,
};

use crate::collection::Outcome;
use crate::document::PageDocument;

/// One editor operation on a page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a section of the given kind at the end, selecting it
    AddSection { kind: SectionKind },

    RemoveSection { id: String },

    /// Merge a partial settings patch into one section
    UpdateSettings { id: String, patch: SettingsPatch },

    /// Swap a section's payload wholesale; the payload kind must match
    ReplaceContent { id: String, content: SectionContent },

    SetCustomLabel { id: String, label: Option<String> },

    ToggleVisibility { id: String },

    /// Commit a permutation of existing section ids
    Reorder { ordered_ids: Vec<String> },

    /// Append a copy of a shared block, optionally keeping it connected
    AttachSharedBlock { block: SharedBlock, connected: bool },

    /// Sever the shared-block link, keeping the local copy
    DetachSharedBlock { id: String },

    /// Change a content block's kind (only offered for content blocks)
    ConvertContentBlock { id: String, kind: SectionKind },

    /// Replace the theme with a preset's and fill section defaults, as one
    /// atomic commit
    ApplyPreset { preset_id: String },

    /// Shallow-merge theme knobs; detaches the theme from any preset
    UpdateTheme { patch: ThemePatch },

    SetIncentive { config: Option<IncentiveConfig> },

    // Restore-style mutations. Produced as inverses; also applied directly
    // by the undo stack.
    RestoreSection { section: Section, index: usize },
    ReplaceSection { section: Section },
    ReplaceSettings { id: String, settings: SectionSettings },
    RestoreSharedRef { id: String, shared: Option<SharedBlockRef> },
    RestoreTheme { theme: DesignTheme },
    RestoreSettingsBulk { settings: Vec<(String, SectionSettings)> },
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The document changed; `inverses`, applied in order, revert it
    Applied { inverses: Vec<Mutation> },

    /// Stale target or nothing to do; the document is untouched
    Noop,
}

impl MutationOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }

    pub(crate) fn single(inverse: Mutation) -> Self {
        MutationOutcome::Applied {
            inverses: vec![inverse],
        }
    }
}

impl Mutation {
    /// Apply to a document's state. Version/dirty bookkeeping belongs to
    /// [`PageDocument::apply`], which is the public entry point.
    pub(crate) fn apply_to(&self, doc: &mut PageDocument) -> MutationOutcome {
        match self {
            Mutation::AddSection { kind } => {
                let preset = doc.active_preset().cloned();
                let id = doc.sections.add(*kind, preset.as_ref()).id.clone();
                MutationOutcome::single(Mutation::RemoveSection { id })
            }

            Mutation::RemoveSection { id } => match doc.sections.take(id) {
                Some((section, index)) => {
                    MutationOutcome::single(Mutation::RestoreSection { section, index })
                }
                None => MutationOutcome::Noop,
            },

            Mutation::UpdateSettings { id, patch } => {
                if patch.is_empty() {
                    return MutationOutcome::Noop;
                }
                let mut previous = None;
                let outcome = doc.sections.update(id, |section| {
                    previous = Some(section.settings.clone());
                    section.settings.merge(patch);
                });
                match (outcome, previous) {
                    (Outcome::Changed, Some(settings)) => {
                        MutationOutcome::single(Mutation::ReplaceSettings {
                            id: id.clone(),
                            settings,
                        })
                    }
                    _ => MutationOutcome::Noop,
                }
            }

            Mutation::ReplaceContent { id, content } => {
                let Some(section) = doc.sections.get(id) else {
                    return MutationOutcome::Noop;
                };
                // A payload of the wrong kind would desync renderer and
                // section; refuse silently like any other stale input.
                if content.kind() != section.kind {
                    return MutationOutcome::Noop;
                }
                let previous = section.clone();
                doc.sections.update(id, |section| {
                    section.content = content.clone();
                });
                MutationOutcome::single(Mutation::ReplaceSection { section: previous })
            }

            Mutation::SetCustomLabel { id, label } => {
                let mut previous = None;
                let outcome = doc.sections.update(id, |section| {
                    previous = Some(section.custom_label.take());
                    section.custom_label = label.clone();
                });
                match (outcome, previous) {
                    (Outcome::Changed, Some(label)) => {
                        MutationOutcome::single(Mutation::SetCustomLabel {
                            id: id.clone(),
                            label,
                        })
                    }
                    _ => MutationOutcome::Noop,
                }
            }

            Mutation::ToggleVisibility { id } => match doc.sections.toggle_visibility(id) {
                Outcome::Changed => {
                    MutationOutcome::single(Mutation::ToggleVisibility { id: id.clone() })
                }
                Outcome::Noop => MutationOutcome::Noop,
            },

            Mutation::Reorder { ordered_ids } => {
                let previous: Vec<String> = doc
                    .sections
                    .sections()
                    .iter()
                    .map(|s| s.id.clone())
                    .collect();
                match doc.sections.reorder(ordered_ids) {
                    Outcome::Changed => MutationOutcome::single(Mutation::Reorder {
                        ordered_ids: previous,
                    }),
                    Outcome::Noop => MutationOutcome::Noop,
                }
            }

            Mutation::AttachSharedBlock { block, connected } => {
                let id = doc
                    .sections
                    .attach_shared_block(block, *connected)
                    .id
                    .clone();
                MutationOutcome::single(Mutation::RemoveSection { id })
            }

            Mutation::DetachSharedBlock { id } => {
                let previous = doc.sections.get(id).and_then(|s| s.shared_block.clone());
                match doc.sections.detach_shared_block(id) {
                    Outcome::Changed => MutationOutcome::single(Mutation::RestoreSharedRef {
                        id: id.clone(),
                        shared: previous,
                    }),
                    Outcome::Noop => MutationOutcome::Noop,
                }
            }

            Mutation::ConvertContentBlock { id, kind } => {
                let Some(previous) = doc.sections.get(id).cloned() else {
                    return MutationOutcome::Noop;
                };
                match doc.sections.convert_content_block(id, *kind) {
                    Outcome::Changed => {
                        MutationOutcome::single(Mutation::ReplaceSection { section: previous })
                    }
                    Outcome::Noop => MutationOutcome::Noop,
                }
            }

            Mutation::ApplyPreset { preset_id } => doc.apply_preset_parts(preset_id),

            Mutation::UpdateTheme { patch } => {
                let previous = doc.theme.clone();
                doc.theme.apply_patch(patch);
                MutationOutcome::single(Mutation::RestoreTheme { theme: previous })
            }

            Mutation::SetIncentive { config } => {
                let previous = doc.incentive.take();
                doc.incentive = config.clone();
                MutationOutcome::single(Mutation::SetIncentive { config: previous })
            }

            Mutation::RestoreSection { section, index } => {
                let id = section.id.clone();
                doc.sections.insert_at(section.clone(), *index);
                MutationOutcome::single(Mutation::RemoveSection { id })
            }

            Mutation::ReplaceSection { section } => {
                let Some(previous) = doc.sections.get(&section.id).cloned() else {
                    return MutationOutcome::Noop;
                };
                match doc.sections.replace(section.clone()) {
                    Outcome::Changed => {
                        MutationOutcome::single(Mutation::ReplaceSection { section: previous })
                    }
                    Outcome::Noop => MutationOutcome::Noop,
                }
            }

            Mutation::ReplaceSettings { id, settings } => {
                let mut previous = None;
                let outcome = doc.sections.update(id, |section| {
                    previous = Some(std::mem::replace(&mut section.settings, settings.clone()));
                });
                match (outcome, previous) {
                    (Outcome::Changed, Some(settings)) => {
                        MutationOutcome::single(Mutation::ReplaceSettings {
                            id: id.clone(),
                            settings,
                        })
                    }
                    _ => MutationOutcome::Noop,
                }
            }

            Mutation::RestoreSharedRef { id, shared } => {
                let mut previous = None;
                let outcome = doc.sections.update(id, |section| {
                    previous = Some(section.shared_block.take());
                    section.shared_block = shared.clone();
                });
                match (outcome, previous) {
                    (Outcome::Changed, Some(shared)) => {
                        MutationOutcome::single(Mutation::RestoreSharedRef {
                            id: id.clone(),
                            shared,
                        })
                    }
                    _ => MutationOutcome::Noop,
                }
            }

            Mutation::RestoreTheme { theme } => {
                let previous = std::mem::replace(&mut doc.theme, theme.clone());
                MutationOutcome::single(Mutation::RestoreTheme { theme: previous })
            }

            Mutation::RestoreSettingsBulk { settings } => {
                let mut previous = Vec::with_capacity(settings.len());
                for (id, restored) in settings {
                    let mut taken = None;
                    doc.sections.update(id, |section| {
                        taken = Some(std::mem::replace(&mut section.settings, restored.clone()));
                    });
                    if let Some(old) = taken {
                        previous.push((id.clone(), old));
                    }
                }
                if previous.is_empty() {
                    MutationOutcome::Noop
                } else {
                    MutationOutcome::single(Mutation::RestoreSettingsBulk { settings: previous })
                }
            }
        }
    }

    /// Debug name for history surfaces
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddSection { .. } => "add-section",
            Mutation::RemoveSection { .. } => "remove-section",
            Mutation::UpdateSettings { .. } => "update-settings",
            Mutation::ReplaceContent { .. } => "replace-content",
            Mutation::SetCustomLabel { .. } => "set-custom-label",
            Mutation::ToggleVisibility { .. } => "toggle-visibility",
            Mutation::Reorder { .. } => "reorder",
            Mutation::AttachSharedBlock { .. } => "attach-shared-block",
            Mutation::DetachSharedBlock { .. } => "detach-shared-block",
            Mutation::ConvertContentBlock { .. } => "convert-content-block",
            Mutation::ApplyPreset { .. } => "apply-preset",
            Mutation::UpdateTheme { .. } => "update-theme",
            Mutation::SetIncentive { .. } => "set-incentive",
            Mutation::RestoreSection { .. } => "restore-section",
            Mutation::ReplaceSection { .. } => "replace-section",
            Mutation::ReplaceSettings { .. } => "replace-settings",
            Mutation::RestoreSharedRef { .. } => "restore-shared-ref",
            Mutation::RestoreTheme { .. } => "restore-theme",
            Mutation::RestoreSettingsBulk { .. } => "restore-settings-bulk",
        }
    }
}
