//! Interval calculator.
//!
//! SM-2-derived scheduling over the compressed 0-3 quality scale. The
//! calculator is a pure state transformation: it reads one
//! [`ReviewState`], returns a new one, and mutates nothing, so reviews
//! for different items can be computed in parallel without locks.
//!
//! ## Algorithm
//!
//! ```text
//! Again      -> repetitions = 0, interval = 1 day, ease -= lapse_penalty
//! Hard..Easy -> repetitions += 1
//!               interval = 1 / 6 / round(prev * ease') by repetition count
//!               ease' = ease + (0.1 - (3-q)*(0.08 + (3-q)*0.02))
//! ```
//!
//! The ease factor never drops below the configured floor; no ceiling is
//! imposed, so very easy items space out indefinitely.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::review::{clamp_ease, Quality, ReviewState};

/// Computes the next scheduling state for a reviewed item.
#[derive(Debug, Clone)]
pub struct IntervalCalculator {
    config: SchedulerConfig,
}

/// The would-be next state for each rating, for callers that show the
/// learner what every answer costs before they pick one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStates {
    pub again: ReviewState,
    pub hard: ReviewState,
    pub good: ReviewState,
    pub easy: ReviewState,
}

impl IntervalCalculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Lazily create the state for an item presented for the first time.
    ///
    /// New items start immediately due with the configured starting ease.
    pub fn new_state(&self, item_id: impl Into<String>, now: DateTime<Utc>) -> ReviewState {
        ReviewState::with_starting_ease(item_id, now, self.config.starting_ease_factor)
    }

    /// Compute the next scheduling state after a review.
    ///
    /// Pure: the input state is read once (normalizing any storage
    /// drift), and a fresh state is returned with `next_review_at = now +
    /// interval days` and `last_reviewed_at = now`.
    pub fn next_state(
        &self,
        state: &ReviewState,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> ReviewState {
        let current = state.normalized(&self.config);
        let floor = self.config.ease_floor;

        let (ease_factor, interval_days, repetitions) = if quality.is_lapse() {
            // Failed review: reset the streak, resurface after the short
            // relearning step, penalize ease.
            let ease = clamp_ease(current.ease_factor - self.config.lapse_penalty, floor);
            (ease, self.config.lapse_interval_days, 0)
        } else {
            // Classic SM-2 ease adjustment with (3 - q) in place of the
            // original scale's (5 - q): Easy gains the most, Good stays
            // near-neutral, Hard loses a little.
            let spread = 3.0 - f64::from(quality.score());
            let ease = clamp_ease(
                current.ease_factor + (0.1 - spread * (0.08 + spread * 0.02)),
                floor,
            );
            let repetitions = current.repetitions + 1;
            let interval = match repetitions {
                1 => self.config.first_interval_days,
                2 => self.config.second_interval_days,
                _ => round_days(f64::from(current.interval_days) * ease),
            };
            (ease, interval, repetitions)
        };

        ReviewState {
            item_id: current.item_id,
            ease_factor,
            interval_days,
            repetitions,
            next_review_at: now + Duration::days(i64::from(interval_days)),
            last_reviewed_at: Some(now),
        }
    }

    /// Project the next state for all four ratings without committing to
    /// any of them. Each arm equals what [`next_state`](Self::next_state)
    /// would return for that rating.
    pub fn preview(&self, state: &ReviewState, now: DateTime<Utc>) -> NextStates {
        NextStates {
            again: self.next_state(state, Quality::Again, now),
            hard: self.next_state(state, Quality::Hard, now),
            good: self.next_state(state, Quality::Good, now),
            easy: self.next_state(state, Quality::Easy, now),
        }
    }
}

impl Default for IntervalCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a fractional day count half-up to a whole number of days.
fn round_days(days: f64) -> u32 {
    if days <= 0.0 {
        return 0;
    }
    days.round() as u32
}
