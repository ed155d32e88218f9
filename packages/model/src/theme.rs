//! # Design Theme
//!
//! A sparse record of visual knobs applied uniformly across a page. Every
//! property is optional in the persisted shape; rendering always goes
//! through [`DesignTheme::resolve`], which substitutes the documented
//! fallback constants so a renderer never sees a missing knob.
//!
//! `active_preset_id` marks "this theme currently equals preset X verbatim".
//! Any manual edit clears it — a hand-tuned theme is no longer attributable
//! to a single preset.

use serde::{Deserialize, Serialize};

/// Documented fallback values for unset theme properties
pub mod fallback {
    pub const HEADING_FONT: &str = "Inter";
    pub const BODY_FONT: &str = "Inter";
    pub const HEADING_WEIGHT: &str = "semibold";
    pub const HEADING_CASE: &str = "none";
    pub const BORDER_RADIUS: &str = "md";
    pub const CARD_STYLE: &str = "shadow";
    pub const BUTTON_STYLE: &str = "solid";
    pub const SECTION_SPACING: &str = "normal";
    pub const CONTENT_WIDTH: &str = "standard";
    pub const HEADER_STYLE: &str = "classic";
    pub const BACKGROUND_PATTERN: &str = "none";
    pub const ACCENT_PLACEMENT: &str = "left";
    pub const DIVIDER_STYLE: &str = "none";
    pub const HOVER_EFFECT: &str = "lift";
}

/// Sparse, persistable theme record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_placement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_effect: Option<String>,

    /// Set when this theme equals a catalog preset verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_preset_id: Option<String>,
}

impl DesignTheme {
    /// Shallow-merge a patch and detach from any preset
    pub fn apply_patch(&mut self, patch: &ThemePatch) {
        macro_rules! take {
            ($field:ident) => {
                if let Some(value) = &patch.$field {
                    self.$field = Some(value.clone());
                }
            };
        }
        take!(heading_font);
        take!(body_font);
        take!(heading_weight);
        take!(heading_case);
        take!(border_radius);
        take!(card_style);
        take!(button_style);
        take!(section_spacing);
        take!(content_width);
        take!(header_style);
        take!(background_pattern);
        take!(accent_placement);
        take!(divider_style);
        take!(hover_effect);

        // A manual edit means the theme no longer equals any preset.
        self.active_preset_id = None;
    }

    /// Resolve every knob to a concrete value
    pub fn resolve(&self) -> ResolvedTheme {
        macro_rules! pick {
            ($field:ident, $fallback:expr) => {
                self.$field.clone().unwrap_or_else(|| $fallback.to_string())
            };
        }
        ResolvedTheme {
            heading_font: pick!(heading_font, fallback::HEADING_FONT),
            body_font: pick!(body_font, fallback::BODY_FONT),
            heading_weight: pick!(heading_weight, fallback::HEADING_WEIGHT),
            heading_case: pick!(heading_case, fallback::HEADING_CASE),
            border_radius: pick!(border_radius, fallback::BORDER_RADIUS),
            card_style: pick!(card_style, fallback::CARD_STYLE),
            button_style: pick!(button_style, fallback::BUTTON_STYLE),
            section_spacing: pick!(section_spacing, fallback::SECTION_SPACING),
            content_width: pick!(content_width, fallback::CONTENT_WIDTH),
            header_style: pick!(header_style, fallback::HEADER_STYLE),
            background_pattern: pick!(background_pattern, fallback::BACKGROUND_PATTERN),
            accent_placement: pick!(accent_placement, fallback::ACCENT_PLACEMENT),
            divider_style: pick!(divider_style, fallback::DIVIDER_STYLE),
            hover_effect: pick!(hover_effect, fallback::HOVER_EFFECT),
        }
    }
}

/// Partial theme update; absent fields are left untouched
pub type ThemePatch = DesignTheme;

/// Fully-resolved theme handed to renderers — no optional fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub heading_font: String,
    pub body_font: String,
    pub heading_weight: String,
    pub heading_case: String,
    pub border_radius: String,
    pub card_style: String,
    pub button_style: String,
    pub section_spacing: String,
    pub content_width: String,
    pub header_style: String,
    pub background_pattern: String,
    pub accent_placement: String,
    pub divider_style: String,
    pub hover_effect: String,
}
