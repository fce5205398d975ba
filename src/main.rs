use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use talisman_stats::cards::{Card, CardType, Deck, FightType};
use talisman_stats::config::{AppConfig, DEFAULT_CATALOG_PATH};
use talisman_stats::logging::init_logging;
use talisman_stats::service::{ApiError, DeckService, StatisticsService};
use talisman_stats::stats::{CategoryStats, CombatStats, PowerBreakdownEntry};
use talisman_stats::store::InMemoryDeckStore;

/// Exit status when a query fails (unknown deck, malformed card data).
const QUERY_FAILED: u8 = 2;

/// Talisman deck catalog and statistics.
#[derive(Debug, Parser)]
#[command(name = "talisman-stats", author, version, about = "Talisman deck catalog and statistics")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the deck catalog (JSON).
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Override the worker threads used for cross-deck statistics.
    #[arg(long, value_name = "COUNT")]
    workers: Option<usize>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every deck.
    Decks,
    /// Show a deck, optionally only the cards of one type.
    Deck {
        name: String,
        #[arg(long = "type", value_name = "CARD_TYPE")]
        card_type: Option<CardType>,
    },
    /// Show the first card with a given name in a deck.
    Card { deck: String, card: String },
    /// List enemies with exactly the given fight type.
    Enemies { deck: String, fight_type: FightType },
    /// Statistics queries.
    #[command(subcommand)]
    Stats(StatsCommand),
}

#[derive(Debug, Subcommand)]
enum StatsCommand {
    /// Entry counts per category, for one deck or the whole catalog.
    Unique { deck: Option<String> },
    /// Copy counts per category, for one deck or the whole catalog.
    All { deck: Option<String> },
    /// Strength/power summary of a deck's enemies.
    Enemies { deck: String },
    /// Enemy copies per fight power value.
    Powers { deck: String },
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output<'a> {
    Decks(&'a [Deck]),
    Deck(&'a Deck),
    Cards(Vec<&'a Card>),
    Card(&'a Card),
    Category(CategoryStats),
    Combat(CombatStats),
    Powers(Vec<PowerBreakdownEntry>),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging);

    let catalog = &config.catalog.path;
    let store = Arc::new(
        InMemoryDeckStore::from_path(catalog)
            .with_context(|| format!("loading deck catalog {}", catalog.display()))?,
    );
    let decks = DeckService::new(Arc::clone(&store));
    let statistics = StatisticsService::new(store).with_workers(config.statistics.workers);

    match run(&cli.command, &decks, &statistics) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            Ok(ExitCode::from(QUERY_FAILED))
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_path(path)?,
        None => AppConfig::with_catalog(DEFAULT_CATALOG_PATH),
    };

    if let Some(catalog) = &cli.catalog {
        config.catalog.path = catalog.clone();
    }
    if let Some(workers) = cli.workers {
        config.statistics.workers = workers;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    config.validate().context("invalid command-line overrides")?;
    Ok(config)
}

fn run<'a>(
    command: &Command,
    decks: &'a DeckService<Arc<InMemoryDeckStore>>,
    statistics: &StatisticsService<Arc<InMemoryDeckStore>>,
) -> Result<Output<'a>, ApiError> {
    let output = match command {
        Command::Decks => Output::Decks(decks.decks()),
        Command::Deck {
            name,
            card_type: None,
        } => Output::Deck(decks.deck(name)?),
        Command::Deck {
            name,
            card_type: Some(card_type),
        } => Output::Cards(decks.cards_of_type(name, *card_type)?),
        Command::Card { deck, card } => Output::Card(decks.card(deck, card)?),
        Command::Enemies { deck, fight_type } => {
            Output::Cards(decks.enemies_by_fight_type(deck, *fight_type)?)
        }
        Command::Stats(StatsCommand::Unique { deck: None }) => {
            Output::Category(statistics.unique_stats())
        }
        Command::Stats(StatsCommand::Unique { deck: Some(deck) }) => {
            Output::Category(statistics.unique_stats_for_deck(deck)?)
        }
        Command::Stats(StatsCommand::All { deck: None }) => {
            Output::Category(statistics.total_stats())
        }
        Command::Stats(StatsCommand::All { deck: Some(deck) }) => {
            Output::Category(statistics.total_stats_for_deck(deck)?)
        }
        Command::Stats(StatsCommand::Enemies { deck }) => {
            Output::Combat(statistics.enemy_stats(deck)?)
        }
        Command::Stats(StatsCommand::Powers { deck }) => {
            Output::Powers(statistics.enemy_power_breakdown(deck)?)
        }
    };
    Ok(output)
}
