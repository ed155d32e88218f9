//! Incentive configuration: time-boxed pricing tiers with a
//! relative-or-absolute deadline and a percentage-or-flat discount.
//!
//! These are persisted value types only. The deadline arithmetic and tier
//! selection live in `pagecraft-incentive`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document-level incentive settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub tiers: Vec<IncentiveTier>,

    /// Shown once every tier has expired
    #[serde(default = "default_expired_message")]
    pub expired_message: String,

    #[serde(default = "default_true")]
    pub show_countdown: bool,

    #[serde(default = "default_true")]
    pub show_savings: bool,

    /// Label for the undiscounted base rate, e.g. "Standard rate"
    #[serde(default = "default_base_rate_label")]
    pub base_rate_label: String,
}

fn default_expired_message() -> String {
    "This offer has ended.".to_string()
}

fn default_base_rate_label() -> String {
    "Standard rate".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for IncentiveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tiers: Vec::new(),
            expired_message: default_expired_message(),
            show_countdown: true,
            show_savings: true,
            base_rate_label: default_base_rate_label(),
        }
    }
}

/// One time-boxed discount rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveTier {
    pub id: String,
    pub label: String,
    pub deadline: DeadlineSpec,
    pub discount: DiscountSpec,

    /// Optional message shown while this tier is the applicable one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Deadline, with exactly one authoritative form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum DeadlineSpec {
    /// Hours after the document's publish time. Zero expires at the publish
    /// instant.
    Relative { hours: i64 },

    /// A fixed timestamp, independent of publish time
    Absolute { at: DateTime<Utc> },
}

/// Discount, as a percentage of the base amount or a flat amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiscountSpec {
    Percentage { value: i64 },
    Flat { cents: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: IncentiveConfig = serde_json::from_str("{}").unwrap();

        assert!(!config.enabled);
        assert!(config.tiers.is_empty());
        assert!(config.show_countdown);
        assert!(config.show_savings);
        assert_eq!(config.expired_message, "This offer has ended.");
        assert_eq!(config.base_rate_label, "Standard rate");
    }

    #[test]
    fn test_deadline_spec_is_tagged_by_mode() {
        let relative = DeadlineSpec::Relative { hours: 48 };
        let json = serde_json::to_value(relative).unwrap();
        assert_eq!(json["mode"], "relative");
        assert_eq!(json["hours"], 48);

        let parsed: DeadlineSpec = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, relative);
    }

    #[test]
    fn test_tier_round_trips() {
        let tier = IncentiveTier {
            id: "early".to_string(),
            label: "Early bird".to_string(),
            deadline: DeadlineSpec::Relative { hours: 72 },
            discount: DiscountSpec::Percentage { value: 10 },
            message: Some("Book within 3 days and save 10%".to_string()),
        };

        let json = serde_json::to_string(&tier).unwrap();
        let back: IncentiveTier = serde_json::from_str(&json).unwrap();
        assert_eq!(tier, back);
    }
}
