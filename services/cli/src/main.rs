mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tripr_config::{init_tracing, AppConfig};

use crate::commands::{ChatArgs, GroupArgs, ItineraryArgs, PrefsArgs, SpotsArgs, TripsArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trip planner command line", long_about = None)]
struct Cli {
    /// Planner API to talk to (overrides API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest destinations for a preference, budget and party size
    Spots(SpotsArgs),
    /// Browse the trip catalog with filters
    Trips(TripsArgs),
    /// Send one message to the travel assistant
    Chat(ChatArgs),
    /// Generate a day-by-day itinerary
    Itinerary(ItineraryArgs),
    /// Read or update a saved planner profile
    Prefs(PrefsArgs),
    /// Manage the travel group
    Group(GroupArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "warn" });

    let config = AppConfig::from_env().context("loading configuration")?;
    let api_url = cli.api_url.unwrap_or(config.api_base_url);

    match cli.command {
        Command::Spots(args) => commands::spots(args),
        Command::Trips(args) => commands::trips(args),
        Command::Chat(args) => commands::chat(&api_url, args).await,
        Command::Itinerary(args) => commands::itinerary(&api_url, args).await,
        Command::Prefs(args) => commands::prefs(&api_url, args).await,
        Command::Group(args) => commands::group(&api_url, args).await,
    }
}
