//! Configuration management commands.

use clap::Subcommand;
use recall_core::SchedulerConfig;

use crate::store;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "ease_floor", "default_session_size")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = store::load_config()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = store::load_config()?;
            config.set(&key, &value)?;
            config.save_to_path(&store::config_path()?)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = store::load_config()?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = SchedulerConfig::default();
            config.save_to_path(&store::config_path()?)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
