//! Review state and quality ratings.
//!
//! A [`ReviewState`] is the per-learner, per-item scheduling record the
//! engine operates on. The engine never owns a collection of these; the
//! caller loads one, passes it through the calculator, and persists the
//! returned copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::ReviewError;

/// Tolerance for ease-factor comparisons, so floating drift does not pin
/// a value at 1.2999999 instead of the 1.3 floor.
pub const EASE_EPSILON: f64 = 1e-9;

/// Learner's self-assessed recall quality on the compressed 4-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Again = 0,
    Hard = 1,
    Good = 2,
    Easy = 3,
}

impl Quality {
    /// Convert a raw rating, clamping out-of-range values to the nearest
    /// bound. This is the engine's default policy: a buggy upstream UI
    /// sending 7 should degrade to Easy, not crash a review flow. Callers
    /// that prefer rejection use the [`TryFrom`] impl instead.
    pub fn from_raw(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Quality::Again,
            1 => Quality::Hard,
            2 => Quality::Good,
            _ => Quality::Easy,
        }
    }

    /// Numeric rating on the 0-3 scale.
    pub fn score(self) -> u8 {
        self as u8
    }

    /// A lapse is a failed review; everything else is a success.
    pub fn is_lapse(self) -> bool {
        matches!(self, Quality::Again)
    }
}

impl TryFrom<i64> for Quality {
    type Error = ReviewError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Quality::Again),
            1 => Ok(Quality::Hard),
            2 => Ok(Quality::Good),
            3 => Ok(Quality::Easy),
            _ => Err(ReviewError::InvalidQuality { value }),
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Quality::Again => "again",
            Quality::Hard => "hard",
            Quality::Good => "good",
            Quality::Easy => "easy",
        };
        write!(f, "{name}")
    }
}

/// Scheduling state for one learner x item pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Opaque identifier of the learnable unit.
    pub item_id: String,
    /// Multiplier governing interval growth. Never below the configured floor.
    pub ease_factor: f64,
    /// Whole days until the next review. 0 means never successfully reviewed.
    pub interval_days: u32,
    /// Consecutive successful reviews since the last lapse.
    pub repetitions: u32,
    /// The item is due when `now >= next_review_at`.
    pub next_review_at: DateTime<Utc>,
    /// Absent until the item has been reviewed at least once.
    #[serde(default)]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// State for an item seen for the first time: immediately due, with
    /// the default-config starting ease. Prefer
    /// [`IntervalCalculator::new_state`](crate::scheduler::IntervalCalculator::new_state)
    /// when running under a custom configuration.
    pub fn new(item_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_starting_ease(item_id, now, SchedulerConfig::default().starting_ease_factor)
    }

    pub(crate) fn with_starting_ease(
        item_id: impl Into<String>,
        now: DateTime<Utc>,
        starting_ease: f64,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            ease_factor: starting_ease,
            interval_days: 0,
            repetitions: 0,
            next_review_at: now,
            last_reviewed_at: None,
        }
    }

    /// Whether this item should appear in a session composed at `now`.
    ///
    /// Never-reviewed items are always due, whatever their recorded
    /// creation time.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.last_reviewed_at.is_none() || self.next_review_at <= now
    }

    /// Repair state that drifted in storage: a non-finite ease factor is
    /// reset to the starting value and anything below the floor is
    /// clamped up to it. Fresh engine output never needs this.
    pub fn normalized(&self, config: &SchedulerConfig) -> Self {
        let mut state = self.clone();
        if !state.ease_factor.is_finite() {
            state.ease_factor = config.starting_ease_factor;
        }
        state.ease_factor = clamp_ease(state.ease_factor, config.ease_floor);
        state
    }
}

/// Floor an ease factor, snapping values within [`EASE_EPSILON`] of the
/// floor to exactly the floor.
pub(crate) fn clamp_ease(ease: f64, floor: f64) -> f64 {
    if ease < floor + EASE_EPSILON {
        floor
    } else {
        ease
    }
}
