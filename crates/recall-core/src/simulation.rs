//! Deterministic simulation harness for the scheduling engine.
//!
//! Drives the calculator and composer through a multi-day scenario with a
//! seeded simulated learner, so interval-growth curves and backlog
//! behavior can be inspected reproducibly:
//! - Seed-based deterministic rating sequences
//! - Named scenarios for regression testing
//! - Aggregate report over the final state collection
//!
//! Same scenario, same seed, same report. Useful when tuning the
//! ease-adjustment coefficients against desired growth curves.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::review::{Quality, ReviewState};
use crate::scheduler::IntervalCalculator;
use crate::session::SessionComposer;

/// Seed for deterministic random number generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationSeed(pub u64);

impl SimulationSeed {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Generate a seed from a string (for named scenarios)
    pub fn from_string(s: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        s.hash(&mut hasher);
        Self(hasher.finish())
    }
}

impl Default for SimulationSeed {
    fn default() -> Self {
        Self(42) // Default seed for reproducibility
    }
}

/// Deterministic random number generator (Xorshift64*)
#[derive(Debug, Clone, Copy)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    pub fn new(seed: SimulationSeed) -> Self {
        // Xorshift state must be non-zero
        Self {
            state: seed.0 | 1,
        }
    }

    fn next_u64(&mut self) -> u64 {
        // Xorshift64* algorithm
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// How the simulated learner answers, as cumulative odds per rating.
/// Whatever probability mass is left after lapse/hard/easy goes to Good.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub lapse_odds: f64,
    pub hard_odds: f64,
    pub easy_odds: f64,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            lapse_odds: 0.10,
            hard_odds: 0.20,
            easy_odds: 0.25,
        }
    }
}

impl LearnerProfile {
    fn rate(&self, rng: &mut DeterministicRng) -> Quality {
        let draw = rng.next_f64();
        if draw < self.lapse_odds {
            Quality::Again
        } else if draw < self.lapse_odds + self.hard_odds {
            Quality::Hard
        } else if draw < self.lapse_odds + self.hard_odds + self.easy_odds {
            Quality::Easy
        } else {
            Quality::Good
        }
    }
}

/// Simulation scenario definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationScenario {
    /// Scenario name
    pub name: String,
    /// Random seed
    pub seed: SimulationSeed,
    /// Number of simulated days
    pub days: u32,
    /// Fresh items introduced at the start of each day
    pub new_items_per_day: u32,
    /// Session size per day (non-positive means no reviews happen)
    pub session_limit: i64,
    /// Simulated learner behavior
    pub learner: LearnerProfile,
}

impl Default for SimulationScenario {
    fn default() -> Self {
        Self {
            name: "default".into(),
            seed: SimulationSeed::default(),
            days: 60,
            new_items_per_day: 8,
            session_limit: 20,
            learner: LearnerProfile::default(),
        }
    }
}

/// Aggregate outcome of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub scenario: String,
    pub days: u32,
    pub items_introduced: usize,
    pub reviews: u64,
    pub lapses: u64,
    /// Items still due when the simulation ends
    pub backlog: usize,
    pub average_interval_days: f64,
    pub average_ease: f64,
}

/// Run a scenario against the given configuration.
///
/// Each simulated day introduces fresh items, composes a session, has the
/// seeded learner rate every card in it, and advances each card's state
/// through the calculator.
pub fn run_simulation(scenario: &SimulationScenario, config: &SchedulerConfig) -> SimulationReport {
    let calculator = IntervalCalculator::with_config(config.clone());
    let composer = SessionComposer::with_config(config.clone());
    let mut rng = DeterministicRng::new(scenario.seed);

    // Fixed epoch so the report depends only on scenario + config
    let start = DateTime::<Utc>::UNIX_EPOCH;
    let mut states: Vec<ReviewState> = Vec::new();
    let mut reviews: u64 = 0;
    let mut lapses: u64 = 0;
    let mut item_counter: usize = 0;

    for day in 0..scenario.days {
        let now = start + Duration::days(i64::from(day));

        for _ in 0..scenario.new_items_per_day {
            states.push(calculator.new_state(format!("item-{item_counter:05}"), now));
            item_counter += 1;
        }

        for item_id in composer.compose(&states, now, scenario.session_limit) {
            let Some(index) = states.iter().position(|s| s.item_id == item_id) else {
                continue;
            };
            let quality = scenario.learner.rate(&mut rng);
            if quality.is_lapse() {
                lapses += 1;
            }
            states[index] = calculator.next_state(&states[index], quality, now);
            reviews += 1;
        }
    }

    let end = start + Duration::days(i64::from(scenario.days));
    let backlog = composer.due(&states, end).len();
    let count = states.len().max(1) as f64;
    let average_interval_days =
        states.iter().map(|s| f64::from(s.interval_days)).sum::<f64>() / count;
    let average_ease = states.iter().map(|s| s.ease_factor).sum::<f64>() / count;

    SimulationReport {
        scenario: scenario.name.clone(),
        days: scenario.days,
        items_introduced: item_counter,
        reviews,
        lapses,
        backlog,
        average_interval_days,
        average_ease,
    }
}
