//! Review submission commands.

use chrono::Utc;
use clap::Subcommand;
use recall_core::{IntervalCalculator, Quality, ReviewError};

use crate::store::{self, StateStore};

#[derive(Subcommand)]
pub enum ReviewAction {
    /// Submit a quality rating for an item
    Rate {
        /// Item identifier
        id: String,
        /// Quality rating: 0 again, 1 hard, 2 good, 3 easy
        quality: i64,
        /// Reject out-of-range ratings instead of clamping them
        #[arg(long)]
        strict: bool,
    },
    /// Show the would-be next state for each of the four ratings
    Preview {
        /// Item identifier
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ReviewAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = StateStore::open()?;
    let config = store::load_config()?;
    let calculator = IntervalCalculator::with_config(config);

    match action {
        ReviewAction::Rate { id, quality, strict } => {
            let quality = if strict {
                Quality::try_from(quality)?
            } else {
                Quality::from_raw(quality)
            };
            let current = store
                .get(&id)
                .ok_or_else(|| ReviewError::UnknownItem(id.clone()))?;

            let next = calculator.next_state(current, quality, Utc::now());
            println!(
                "rated {id} {quality}: next review in {} day(s), ease {:.2}, streak {}",
                next.interval_days, next.ease_factor, next.repetitions,
            );
            store.upsert(next);
            store.save()?;
        }
        ReviewAction::Preview { id, json } => {
            let current = store
                .get(&id)
                .ok_or_else(|| ReviewError::UnknownItem(id.clone()))?;
            let preview = calculator.preview(current, Utc::now());

            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                for (label, state) in [
                    ("again", &preview.again),
                    ("hard", &preview.hard),
                    ("good", &preview.good),
                    ("easy", &preview.easy),
                ] {
                    println!(
                        "{label:>5}: {} day(s), ease {:.2}",
                        state.interval_days, state.ease_factor,
                    );
                }
            }
        }
    }
    Ok(())
}
