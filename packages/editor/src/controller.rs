//! # Theme / Preset Controller
//!
//! Coordinates preset selection across the design theme and the section
//! collection. Applying a preset does two things in one synchronous commit:
//!
//! 1. Replace the theme with the preset's theme verbatim, stamping
//!    `active_preset_id`.
//! 2. Fill the preset's per-kind settings defaults into every section the
//!    user has not customized (no `variant` chosen yet).
//!
//! Because the engine is single-threaded and both steps run inside one
//! `&mut self` call, no caller can observe a half-applied preset.
//!
//! An unknown preset id is a silent no-op: a removed catalog entry must
//! never crash a renderer, which simply keeps resolving the current theme
//! through its fallbacks.

use pagecraft_model::{Preset, ThemePatch};

use crate::document::PageDocument;
use crate::mutations::{Mutation, MutationOutcome};

impl PageDocument {
    /// Apply a catalog preset: theme replacement + section defaults,
    /// committed together
    pub fn apply_preset_by_id(&mut self, preset_id: &str) -> MutationOutcome {
        self.apply(Mutation::ApplyPreset {
            preset_id: preset_id.to_string(),
        })
    }

    /// Shallow-merge theme knobs; the theme stops equaling any preset
    pub fn update_theme(&mut self, patch: ThemePatch) -> MutationOutcome {
        self.apply(Mutation::UpdateTheme { patch })
    }

    /// Raw preset application, shared by [`Mutation::ApplyPreset`]
    pub(crate) fn apply_preset_parts(&mut self, preset_id: &str) -> MutationOutcome {
        let Some(preset) = self.catalog().get(preset_id).cloned() else {
            return MutationOutcome::Noop;
        };
        self.apply_preset_inner(&preset)
    }

    fn apply_preset_inner(&mut self, preset: &Preset) -> MutationOutcome {
        let previous_theme = std::mem::replace(&mut self.theme, preset.theme.clone());
        self.theme.active_preset_id = Some(preset.id.clone());

        let touched = self
            .sections
            .apply_preset_defaults(&preset.section_defaults);

        let mut inverses = Vec::with_capacity(2);
        if !touched.is_empty() {
            inverses.push(Mutation::RestoreSettingsBulk { settings: touched });
        }
        inverses.push(Mutation::RestoreTheme {
            theme: previous_theme,
        });

        MutationOutcome::Applied { inverses }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pagecraft_model::{PresetCatalog, SectionKind, SettingsPatch};

    use super::*;

    fn doc() -> PageDocument {
        PageDocument::new("page-1", Arc::new(PresetCatalog::builtin()))
    }

    #[test]
    fn test_apply_preset_stamps_active_id() {
        let mut doc = doc();

        let outcome = doc.apply_preset_by_id("modern");

        assert!(outcome.applied());
        assert_eq!(doc.theme().active_preset_id.as_deref(), Some("modern"));
        assert_eq!(doc.theme().border_radius.as_deref(), Some("lg"));
    }

    #[test]
    fn test_unknown_preset_is_silent_noop() {
        let mut doc = doc();
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Hero,
        });
        let theme_before = doc.theme().clone();
        let version_before = doc.version();

        let outcome = doc.apply_preset_by_id("retired-preset");

        assert_eq!(outcome, MutationOutcome::Noop);
        assert_eq!(doc.theme(), &theme_before);
        assert_eq!(doc.version(), version_before);
    }

    #[test]
    fn test_preset_fills_defaults_without_clobbering() {
        let mut doc = doc();
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Hero,
        });
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Pricing,
        });
        let hero = doc.sections()[0].id.clone();
        let pricing = doc.sections()[1].id.clone();

        doc.apply(Mutation::UpdateSettings {
            id: hero.clone(),
            patch: SettingsPatch::variant("split"),
        });

        doc.apply_preset_by_id("modern");

        // customized hero keeps its variant; untouched pricing gets the
        // preset default
        assert_eq!(
            doc.section(&hero).unwrap().settings.variant.as_deref(),
            Some("split")
        );
        assert_eq!(
            doc.section(&pricing).unwrap().settings.variant.as_deref(),
            Some("cards")
        );
    }

    #[test]
    fn test_theme_and_defaults_commit_together() {
        let mut doc = doc();
        doc.apply(Mutation::AddSection {
            kind: SectionKind::Faq,
        });
        let faq = doc.sections()[0].id.clone();

        let version_before = doc.version();
        doc.apply_preset_by_id("modern");

        // one version step covers both halves of the commit
        assert_eq!(doc.version(), version_before + 1);
        assert_eq!(doc.theme().active_preset_id.as_deref(), Some("modern"));
        assert_eq!(
            doc.section(&faq).unwrap().settings.variant.as_deref(),
            Some("accordion")
        );
    }

    #[test]
    fn test_manual_theme_edit_detaches_preset() {
        let mut doc = doc();
        doc.apply_preset_by_id("classic");
        assert_eq!(doc.theme().active_preset_id.as_deref(), Some("classic"));

        doc.update_theme(ThemePatch {
            button_style: Some("ghost".to_string()),
            ..ThemePatch::default()
        });

        assert!(doc.theme().active_preset_id.is_none());
        assert_eq!(doc.theme().button_style.as_deref(), Some("ghost"));
        // the rest of the preset theme survives the detach
        assert_eq!(doc.theme().heading_font.as_deref(), Some("Playfair Display"));
    }

    #[test]
    fn test_new_sections_inherit_active_preset_defaults() {
        let mut doc = doc();
        doc.apply_preset_by_id("modern");

        doc.apply(Mutation::AddSection {
            kind: SectionKind::Faq,
        });

        assert_eq!(
            doc.sections()[0].settings.variant.as_deref(),
            Some("accordion")
        );
    }
}
