//! Session composition commands.

use chrono::Utc;
use clap::Subcommand;
use recall_core::SessionComposer;

use crate::store::{self, StateStore};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Compose a priority-ordered session of due items
    Start {
        /// Maximum session size (default: configured session size)
        #[arg(long)]
        limit: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count items currently due
    Due,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    let config = store::load_config()?;
    let composer = SessionComposer::with_config(config);
    let now = Utc::now();

    match action {
        SessionAction::Start { limit, json } => {
            let session = match limit {
                Some(limit) => composer.compose(store.states(), now, limit),
                None => composer.compose_default(store.states(), now),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else if session.is_empty() {
                println!("nothing due");
            } else {
                for (position, item_id) in session.iter().enumerate() {
                    println!("{:>3}. {item_id}", position + 1);
                }
            }
        }
        SessionAction::Due => {
            println!("{}", composer.due(store.states(), now).len());
        }
    }
    Ok(())
}
