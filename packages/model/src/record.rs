//! Persisted document shape.
//!
//! This is the round-trip contract with the persistence adapter: every field
//! is optional on the wire and defaults exactly as documented — missing
//! `sections` means an empty list, a missing theme means an all-fallback
//! theme, a missing incentive config means incentives are off. Unknown
//! fields are ignored so older engines tolerate newer documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::incentive::IncentiveConfig;
use crate::section::Section;
use crate::theme::DesignTheme;

/// The document as the unit of durability: sections + theme + incentives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub design_theme: DesignTheme,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incentive_config: Option<IncentiveConfig>,

    /// Set the first time the document is published; anchors relative
    /// incentive deadlines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}
