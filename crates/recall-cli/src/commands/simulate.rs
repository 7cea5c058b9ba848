//! Deterministic simulation commands.

use clap::Subcommand;
use recall_core::{run_simulation, LearnerProfile, SimulationScenario, SimulationSeed};

use crate::store;

#[derive(Subcommand)]
pub enum SimulateAction {
    /// Run a scenario and print the aggregate report
    Run {
        /// Scenario name (also seeds the run when --seed is absent)
        #[arg(long, default_value = "default")]
        name: String,
        /// Explicit numeric seed
        #[arg(long)]
        seed: Option<u64>,
        /// Number of simulated days
        #[arg(long, default_value_t = 60)]
        days: u32,
        /// Fresh items introduced per day
        #[arg(long, default_value_t = 8)]
        new_items: u32,
        /// Session size per day (default: configured session size)
        #[arg(long)]
        limit: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SimulateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = store::load_config()?;

    match action {
        SimulateAction::Run {
            name,
            seed,
            days,
            new_items,
            limit,
            json,
        } => {
            let scenario = SimulationScenario {
                seed: seed
                    .map(SimulationSeed::new)
                    .unwrap_or_else(|| SimulationSeed::from_string(&name)),
                name,
                days,
                new_items_per_day: new_items,
                session_limit: limit.unwrap_or(i64::from(config.default_session_size)),
                learner: LearnerProfile::default(),
            };

            let report = run_simulation(&scenario, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("scenario:        {}", report.scenario);
                println!("days:            {}", report.days);
                println!("items:           {}", report.items_introduced);
                println!("reviews:         {}", report.reviews);
                println!("lapses:          {}", report.lapses);
                println!("backlog:         {}", report.backlog);
                println!("avg interval:    {:.1} day(s)", report.average_interval_days);
                println!("avg ease:        {:.2}", report.average_ease);
            }
        }
    }
    Ok(())
}
