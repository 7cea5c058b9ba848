use clap::{Parser, Subcommand};

mod commands;
mod store;

#[derive(Parser)]
#[command(name = "recall-cli", version, about = "Recall CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Item tracking
    Item {
        #[command(subcommand)]
        action: commands::item::ItemAction,
    },
    /// Review submission
    Review {
        #[command(subcommand)]
        action: commands::review::ReviewAction,
    },
    /// Session composition
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Deterministic scheduling simulations
    Simulate {
        #[command(subcommand)]
        action: commands::simulate::SimulateAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Item { action } => commands::item::run(action),
        Commands::Review { action } => commands::review::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Simulate { action } => commands::simulate::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
