//! # Recall Core Library
//!
//! This library provides the spaced-repetition scheduling engine for
//! Recall: given a learner's per-item review records, it decides when
//! each item is next due and in what order due items should be presented.
//! The CLI binary is a thin caller over this library and plays the role
//! of the surrounding application (persistence, presentation).
//!
//! ## Architecture
//!
//! - **Interval Calculator**: a pure state transformation implementing an
//!   SM-2-derived algorithm over a compressed 0-3 quality scale
//! - **Session Composer**: a stateless due-set filter and priority
//!   ordering over a snapshot of review states
//! - **Configuration**: TOML-backed tuning knobs (starting ease, ease
//!   floor, lapse penalty, session size)
//! - **Simulation**: a seeded, deterministic multi-day harness for
//!   inspecting interval-growth curves
//!
//! Both engine components are pure functions over explicit input state:
//! no I/O, no hidden globals, no locks. Reviews for different items can
//! be computed concurrently; serializing writes for a single item is the
//! caller's responsibility.
//!
//! ## Key Components
//!
//! - [`IntervalCalculator`]: review outcome -> next scheduling state
//! - [`SessionComposer`]: state snapshot + now + limit -> ordered session
//! - [`ReviewState`] / [`Quality`]: the data model
//! - [`SchedulerConfig`]: tuning configuration

pub mod config;
pub mod error;
pub mod review;
pub mod scheduler;
pub mod session;
pub mod simulation;

pub use config::SchedulerConfig;
pub use error::{ConfigError, CoreError, ReviewError, Result};
pub use review::{Quality, ReviewState, EASE_EPSILON};
pub use scheduler::{IntervalCalculator, NextStates};
pub use session::SessionComposer;
pub use simulation::{
    run_simulation, DeterministicRng, LearnerProfile, SimulationReport, SimulationScenario,
    SimulationSeed,
};
