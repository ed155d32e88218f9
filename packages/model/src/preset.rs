//! # Preset Catalog
//!
//! Named bundles of a full design theme plus default per-section-kind
//! settings fragments. Presets are static configuration: the catalog is
//! built once at startup (from the builtin set or a JSON data file) and
//! passed by reference into the engine. Adding a preset is a data change,
//! never a code change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::SectionKind;
use crate::settings::SettingsPatch;
use crate::theme::DesignTheme;

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub theme: DesignTheme,
    /// Default settings fragment per section kind, e.g. hero → variant "clean"
    #[serde(default)]
    pub section_defaults: HashMap<SectionKind, SettingsPatch>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate preset id: {0}")]
    DuplicateId(String),
}

/// Lookup table over an immutable preset list
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
    by_id: HashMap<String, usize>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<Preset>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(presets.len());
        for (index, preset) in presets.iter().enumerate() {
            if by_id.insert(preset.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(preset.id.clone()));
            }
        }
        Ok(Self { presets, by_id })
    }

    /// Load a catalog from its JSON data file
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;
        Self::new(presets)
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.by_id.get(id).map(|&index| &self.presets[index])
    }

    /// Default settings fragment for one kind under one preset
    pub fn section_defaults(&self, preset_id: &str, kind: SectionKind) -> Option<&SettingsPatch> {
        self.get(preset_id)
            .and_then(|preset| preset.section_defaults.get(&kind))
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// The catalog shipped with the engine
    pub fn builtin() -> Self {
        let presets = vec![
            Preset {
                id: "modern".to_string(),
                name: "Modern".to_string(),
                description: "Clean lines, generous spacing.".to_string(),
                theme: DesignTheme {
                    heading_font: Some("Inter".to_string()),
                    body_font: Some("Inter".to_string()),
                    heading_weight: Some("semibold".to_string()),
                    border_radius: Some("lg".to_string()),
                    card_style: Some("shadow".to_string()),
                    button_style: Some("solid".to_string()),
                    section_spacing: Some("relaxed".to_string()),
                    active_preset_id: Some("modern".to_string()),
                    ..DesignTheme::default()
                },
                section_defaults: HashMap::from([
                    (SectionKind::Hero, SettingsPatch::variant("clean")),
                    (SectionKind::Pricing, SettingsPatch::variant("cards")),
                    (SectionKind::Faq, SettingsPatch::variant("accordion")),
                ]),
            },
            Preset {
                id: "classic".to_string(),
                name: "Classic".to_string(),
                description: "Traditional serif look for established trades.".to_string(),
                theme: DesignTheme {
                    heading_font: Some("Playfair Display".to_string()),
                    body_font: Some("Lora".to_string()),
                    heading_weight: Some("bold".to_string()),
                    heading_case: Some("none".to_string()),
                    border_radius: Some("sm".to_string()),
                    card_style: Some("bordered".to_string()),
                    button_style: Some("outline".to_string()),
                    divider_style: Some("line".to_string()),
                    active_preset_id: Some("classic".to_string()),
                    ..DesignTheme::default()
                },
                section_defaults: HashMap::from([
                    (SectionKind::Hero, SettingsPatch::variant("centered")),
                    (SectionKind::Pricing, SettingsPatch::variant("table")),
                ]),
            },
            Preset {
                id: "bold".to_string(),
                name: "Bold".to_string(),
                description: "High contrast, uppercase headings.".to_string(),
                theme: DesignTheme {
                    heading_font: Some("Archivo".to_string()),
                    heading_weight: Some("black".to_string()),
                    heading_case: Some("uppercase".to_string()),
                    border_radius: Some("none".to_string()),
                    card_style: Some("flat".to_string()),
                    button_style: Some("solid".to_string()),
                    background_pattern: Some("diagonal".to_string()),
                    active_preset_id: Some("bold".to_string()),
                    ..DesignTheme::default()
                },
                section_defaults: HashMap::from([
                    (SectionKind::Hero, SettingsPatch::variant("split")),
                    (SectionKind::Cta, SettingsPatch::variant("banner")),
                ]),
            },
        ];

        // Builtin data is known-good; the only constructor error is a
        // duplicate id.
        Self::new(presets).expect("builtin preset catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = PresetCatalog::builtin();

        let modern = catalog.get("modern").unwrap();
        assert_eq!(modern.name, "Modern");
        assert_eq!(modern.theme.active_preset_id.as_deref(), Some("modern"));

        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn test_section_defaults_lookup() {
        let catalog = PresetCatalog::builtin();

        let hero = catalog.section_defaults("modern", SectionKind::Hero).unwrap();
        assert_eq!(hero.variant.as_deref(), Some("clean"));

        assert!(catalog.section_defaults("modern", SectionKind::Video).is_none());
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {
                "id": "minimal",
                "name": "Minimal",
                "theme": { "cardStyle": "flat", "activePresetId": "minimal" },
                "sectionDefaults": { "hero": { "variant": "quiet" } }
            }
        ]"#;

        let catalog = PresetCatalog::from_json_str(json).unwrap();
        let preset = catalog.get("minimal").unwrap();

        assert_eq!(preset.theme.card_style.as_deref(), Some("flat"));
        assert_eq!(
            preset.section_defaults[&SectionKind::Hero].variant.as_deref(),
            Some("quiet")
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let preset = PresetCatalog::builtin().get("modern").unwrap().clone();
        let result = PresetCatalog::new(vec![preset.clone(), preset]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }
}
