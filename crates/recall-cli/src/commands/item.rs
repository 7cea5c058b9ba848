//! Item tracking commands.

use chrono::Utc;
use clap::Subcommand;
use recall_core::{IntervalCalculator, ReviewState, SessionComposer};

use crate::store::{self, StateStore};

#[derive(Subcommand)]
pub enum ItemAction {
    /// Start tracking an item (immediately due)
    Add {
        /// Item identifier (opaque to the engine)
        id: String,
    },
    /// List tracked items and their scheduling state
    List {
        /// Only items currently due
        #[arg(long)]
        due: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ItemAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = StateStore::open()?;
    let config = store::load_config()?;

    match action {
        ItemAction::Add { id } => {
            if store.get(&id).is_some() {
                return Err(format!("item already tracked: {id}").into());
            }
            let calculator = IntervalCalculator::with_config(config);
            store.upsert(calculator.new_state(id.as_str(), Utc::now()));
            store.save()?;
            println!("item added: {id} (due now)");
        }
        ItemAction::List { due, json } => {
            let now = Utc::now();
            let states: Vec<&ReviewState> = if due {
                SessionComposer::with_config(config).due(store.states(), now)
            } else {
                store.states().iter().collect()
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&states)?);
            } else {
                for state in states {
                    println!(
                        "{}  interval={}d  reps={}  ease={:.2}  next={}",
                        state.item_id,
                        state.interval_days,
                        state.repetitions,
                        state.ease_factor,
                        state.next_review_at.format("%Y-%m-%d %H:%M"),
                    );
                }
            }
        }
    }
    Ok(())
}
