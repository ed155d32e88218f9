//! Per-section visual settings and the partial patches that update them.
//!
//! Settings are the knobs shared by every section kind: the renderer variant
//! plus a handful of spacing/color overrides. Kind-specific extras ride in
//! the open `extra` map, since they are defined by individual renderers
//! rather than the engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visual settings attached to one section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSettings {
    /// Renderer variant (e.g. "clean", "bold"). `None` means the section has
    /// never been customized and is eligible for preset defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,

    /// Renderer-defined extras, keyed per section kind
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, Value>,
}

impl SectionSettings {
    /// Merge a patch, overwriting only the fields the patch carries
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(variant) = &patch.variant {
            self.variant = Some(variant.clone());
        }
        if let Some(color) = &patch.background_color {
            self.background_color = Some(color.clone());
        }
        if let Some(padding) = &patch.padding {
            self.padding = Some(padding.clone());
        }
        if let Some(align) = &patch.text_align {
            self.text_align = Some(align.clone());
        }
        for (key, value) in &patch.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }

    /// Merge a patch without touching fields that are already set
    ///
    /// Used by preset application: defaults fill gaps, they never clobber a
    /// value the user already chose.
    pub fn merge_defaults(&mut self, patch: &SettingsPatch) {
        if self.variant.is_none() {
            self.variant = patch.variant.clone();
        }
        if self.background_color.is_none() {
            self.background_color = patch.background_color.clone();
        }
        if self.padding.is_none() {
            self.padding = patch.padding.clone();
        }
        if self.text_align.is_none() {
            self.text_align = patch.text_align.clone();
        }
        for (key, value) in &patch.extra {
            self.extra.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
}

/// Partial update to [`SectionSettings`]; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,

    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, Value>,
}

impl SettingsPatch {
    pub fn variant(value: impl Into<String>) -> Self {
        Self {
            variant: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variant.is_none()
            && self.background_color.is_none()
            && self.padding.is_none()
            && self.text_align.is_none()
            && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overwrites_present_fields_only() {
        let mut settings = SectionSettings {
            variant: Some("bold".to_string()),
            padding: Some("lg".to_string()),
            ..SectionSettings::default()
        };

        settings.merge(&SettingsPatch {
            variant: Some("clean".to_string()),
            background_color: Some("#fff".to_string()),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.variant.as_deref(), Some("clean"));
        assert_eq!(settings.background_color.as_deref(), Some("#fff"));
        // untouched by the patch
        assert_eq!(settings.padding.as_deref(), Some("lg"));
    }

    #[test]
    fn test_merge_defaults_never_clobbers() {
        let mut settings = SectionSettings {
            variant: Some("bold".to_string()),
            ..SectionSettings::default()
        };

        settings.merge_defaults(&SettingsPatch {
            variant: Some("clean".to_string()),
            padding: Some("md".to_string()),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.variant.as_deref(), Some("bold"));
        assert_eq!(settings.padding.as_deref(), Some("md"));
    }

    #[test]
    fn test_patch_skips_absent_fields_in_json() {
        let patch = SettingsPatch::variant("clean");
        let json = serde_json::to_string(&patch).unwrap();

        assert_eq!(json, r#"{"variant":"clean"}"#);
    }
}
