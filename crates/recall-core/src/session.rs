//! Session composer.
//!
//! Selects which items are due at a given instant and orders them into a
//! bounded review session:
//! - Most overdue first (a 5-day-overdue item outranks a 1-day one)
//! - Among equally overdue, lower ease (harder items) first
//! - Then fewer repetitions (less consolidated) first
//! - Item id as the final tie-break, so the ordering is a deterministic
//!   total order
//!
//! The composer is a stateless projection over whatever snapshot the
//! caller supplies; it recomputes from scratch on every call and never
//! pads a short session with not-yet-due items.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::config::SchedulerConfig;
use crate::review::ReviewState;

/// Composes priority-ordered review sessions from a state snapshot.
#[derive(Debug, Clone)]
pub struct SessionComposer {
    config: SchedulerConfig,
}

impl SessionComposer {
    /// Create a composer with the default configuration.
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

    /// All items due at `now`, unordered. Empty input yields an empty
    /// list; never-reviewed items are always due.
    pub fn due<'a>(&self, states: &'a [ReviewState], now: DateTime<Utc>) -> Vec<&'a ReviewState> {
        states.iter().filter(|s| s.is_due(now)).collect()
    }

    /// Compose a session of at most `limit` item ids, highest priority
    /// first. A non-positive `limit` yields an empty session rather than
    /// an error, since session size is typically UI-supplied.
    pub fn compose(&self, states: &[ReviewState], now: DateTime<Utc>, limit: i64) -> Vec<String> {
        if limit <= 0 {
            return Vec::new();
        }

        let mut due = self.due(states, now);
        due.sort_by(|a, b| priority_order(a, b, now));
        due.into_iter()
            .take(limit as usize)
            .map(|s| s.item_id.clone())
            .collect()
    }

    /// Compose with the configured default session size.
    pub fn compose_default(&self, states: &[ReviewState], now: DateTime<Utc>) -> Vec<String> {
        self.compose(states, now, i64::from(self.config.default_session_size))
    }
}

impl Default for SessionComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite priority: overdue duration descending, then ease ascending,
/// then repetitions ascending, then item id ascending.
fn priority_order(a: &ReviewState, b: &ReviewState, now: DateTime<Utc>) -> Ordering {
    let overdue_a = now - a.next_review_at;
    let overdue_b = now - b.next_review_at;
    overdue_b
        .cmp(&overdue_a)
        .then_with(|| a.ease_factor.total_cmp(&b.ease_factor))
        .then_with(|| a.repetitions.cmp(&b.repetitions))
        .then_with(|| a.item_id.cmp(&b.item_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn reviewed(id: &str, due_in_days: i64, ease: f64, reps: u32, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            item_id: id.into(),
            ease_factor: ease,
            interval_days: 1,
            repetitions: reps,
            next_review_at: now + Duration::days(due_in_days),
            last_reviewed_at: Some(now - Duration::days(1)),
        }
    }

    #[test]
    fn test_empty_input() {
        let composer = SessionComposer::new();
        assert!(composer.compose(&[], Utc::now(), 20).is_empty());
    }

    #[test]
    fn test_due_filter_excludes_future_items() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        let states = vec![
            reviewed("overdue", -3, 2.5, 2, now),
            reviewed("due-now", 0, 2.5, 2, now),
            reviewed("tomorrow", 1, 2.5, 2, now),
        ];

        let due = composer.due(&states, now);
        let ids: Vec<_> = due.iter().map(|s| s.item_id.as_str()).collect();
        assert_eq!(ids, vec!["overdue", "due-now"]);
    }

    #[test]
    fn test_never_reviewed_is_always_due() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        // Recorded creation time in the future relative to `now`
        let fresh = ReviewState::new("fresh", now + Duration::days(2));
        let session = composer.compose(&[fresh], now, 20);
        assert_eq!(session, vec!["fresh".to_string()]);
    }

    #[test]
    fn test_more_overdue_first() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        let states = vec![
            reviewed("one-day", -1, 2.5, 2, now),
            reviewed("five-days", -5, 2.5, 2, now),
            reviewed("two-days", -2, 2.5, 2, now),
        ];

        let session = composer.compose(&states, now, 20);
        assert_eq!(session, vec!["five-days", "two-days", "one-day"]);
    }

    #[test]
    fn test_ties_break_on_ease_then_repetitions_then_id() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        let states = vec![
            reviewed("easy-item", -1, 2.8, 2, now),
            reviewed("hard-item", -1, 1.5, 2, now),
            reviewed("b-card", -1, 1.5, 1, now),
            reviewed("a-card", -1, 1.5, 1, now),
        ];

        let session = composer.compose(&states, now, 20);
        assert_eq!(session, vec!["a-card", "b-card", "hard-item", "easy-item"]);
    }

    #[test]
    fn test_truncation_keeps_highest_priority() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        let states: Vec<_> = (0..25)
            .map(|i| reviewed(&format!("item-{i:02}"), -i64::from(i), 2.5, 2, now))
            .collect();

        let session = composer.compose(&states, now, 20);
        assert_eq!(session.len(), 20);
        // Most overdue (highest index) first; the 5 least-overdue are excluded
        assert_eq!(session[0], "item-24");
        assert_eq!(session[19], "item-05");
        for excluded in ["item-00", "item-01", "item-02", "item-03", "item-04"] {
            assert!(!session.contains(&excluded.to_string()));
        }
    }

    #[test]
    fn test_short_due_set_is_not_padded() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        let states = vec![
            reviewed("due", -1, 2.5, 2, now),
            reviewed("future", 3, 2.5, 2, now),
        ];
        let session = composer.compose(&states, now, 20);
        assert_eq!(session, vec!["due".to_string()]);
    }

    #[test]
    fn test_non_positive_limit_is_empty() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        let states = vec![reviewed("due", -1, 2.5, 2, now)];
        assert!(composer.compose(&states, now, 0).is_empty());
        assert!(composer.compose(&states, now, -7).is_empty());
    }

    #[test]
    fn test_deterministic_across_calls() {
        let composer = SessionComposer::new();
        let now = Utc::now();
        let states: Vec<_> = (0..50)
            .map(|i| reviewed(&format!("item-{i:02}"), -(i64::from(i) % 5), 2.5, 2, now))
            .collect();

        let first = composer.compose(&states, now, 30);
        let second = composer.compose(&states, now, 30);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_default_uses_configured_size() {
        let mut config = SchedulerConfig::default();
        config.default_session_size = 3;
        let composer = SessionComposer::with_config(config);
        let now = Utc::now();
        let states: Vec<_> = (0..10)
            .map(|i| reviewed(&format!("item-{i}"), -1, 2.5, 2, now))
            .collect();

        assert_eq!(composer.compose_default(&states, now).len(), 3);
    }
}
