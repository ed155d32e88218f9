//! # Incentive Tier Calculator
//!
//! Pure deadline and discount arithmetic over [`IncentiveTier`] values.
//! The calculator never reads the clock itself: callers pass the server's
//! current time and the document's publish time, so evaluation is
//! deterministic and testable.
//!
//! ## Semantics
//!
//! - A relative deadline is anchored to the publish time. Before the
//!   document has ever been published a relative tier is **not yet active**
//!   — it cannot expire before its clock has started.
//! - `remaining <= 0` means expired. `relative hours = 0` expires at the
//!   publish instant.
//! - The applicable tier among many is the earliest unexpired deadline
//!   (soonest-deadline-wins); list order breaks ties.
//! - A flat discount never exceeds the amount it discounts. Beyond that the
//!   calculator does not sanitize configuration (negative or >100% values
//!   pass through); validation belongs to the editing surface.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use pagecraft_model::{DeadlineSpec, DiscountSpec, IncentiveTier};

/// Lifecycle state of a tier at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TierState {
    /// Relative deadline with no publish time: the clock has not started
    NotYetActive,
    Active,
    Expired,
}

/// Result of evaluating one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierEvaluation {
    /// Resolved deadline; `None` for a not-yet-active relative tier
    pub deadline: Option<DateTime<Utc>>,

    /// Time left until the deadline; `None` unless the tier is active
    pub remaining: Option<Duration>,

    pub state: TierState,
}

impl TierEvaluation {
    pub fn is_expired(&self) -> bool {
        self.state == TierState::Expired
    }
}

/// Resolve a tier's deadline against the publish time
///
/// `None` means the deadline cannot be resolved yet (relative tier on an
/// unpublished document).
pub fn resolve_deadline(
    tier: &IncentiveTier,
    published_at: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    match tier.deadline {
        DeadlineSpec::Relative { hours } => published_at.map(|at| at + Duration::hours(hours)),
        DeadlineSpec::Absolute { at } => Some(at),
    }
}

/// Evaluate one tier at `now`
pub fn evaluate(
    tier: &IncentiveTier,
    now: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
) -> TierEvaluation {
    let Some(deadline) = resolve_deadline(tier, published_at) else {
        return TierEvaluation {
            deadline: None,
            remaining: None,
            state: TierState::NotYetActive,
        };
    };

    let remaining = deadline - now;
    if remaining <= Duration::zero() {
        TierEvaluation {
            deadline: Some(deadline),
            remaining: None,
            state: TierState::Expired,
        }
    } else {
        TierEvaluation {
            deadline: Some(deadline),
            remaining: Some(remaining),
            state: TierState::Active,
        }
    }
}

/// Discount a tier grants against a base amount in cents
///
/// Percentage discounts round toward zero. Flat discounts are capped at the
/// base amount.
pub fn discount_amount(tier: &IncentiveTier, base_cents: i64) -> i64 {
    match tier.discount {
        DiscountSpec::Percentage { value } => base_cents * value / 100,
        DiscountSpec::Flat { cents } => cents.min(base_cents),
    }
}

/// Pick the applicable tier: earliest unexpired deadline wins
///
/// Ties on the deadline go to the earlier list position. Not-yet-active
/// tiers are never applicable. `None` means every tier is expired (or
/// unresolvable) and the caller should fall back to the configured
/// expired message.
pub fn applicable_tier<'a>(
    tiers: &'a [IncentiveTier],
    now: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
) -> Option<&'a IncentiveTier> {
    tiers
        .iter()
        .filter_map(|tier| {
            let eval = evaluate(tier, now, published_at);
            match eval.state {
                TierState::Active => Some((tier, eval.deadline?)),
                _ => None,
            }
        })
        // min_by_key keeps the first of equal keys, which is the tie-break.
        .min_by_key(|&(_, deadline)| deadline)
        .map(|(tier, _)| tier)
}

/// Countdown breakdown for display surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn from_remaining(remaining: Duration) -> Self {
        let total = remaining.num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}
