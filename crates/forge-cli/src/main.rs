//! Forge Preview CLI
//!
//! Thin wrapper around forge-core for checking the card deck and previewing
//! the links visitors will be sent to.
//!
//! ## Usage
//!
//! ```bash
//! # List the bundled cards
//! forge cards
//!
//! # Validate a deck file and print it as JSON
//! forge cards --file cards.json --json
//!
//! # Preview a card link for a visitor who arrived via a newsletter
//! forge link https://your-short.link/frostcore --card frostcore-02 --param utm_source=newsletter
//!
//! # Show what would be captured from a landing URL
//! forge capture "https://pcforge.pages.dev/?utm_source=reddit&utm_campaign=launch"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forge_core::{
    build_outbound_link, capture_attribution, CardDeck, MemoryStore, SiteConfig, TrackedParam,
};
use url::Url;

/// Forge Preview - forged cards teaser
#[derive(Parser)]
#[command(name = "forge")]
#[command(version = "0.1.0")]
#[command(about = "Forge Preview - inspect cards and attribution links")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and list a card deck
    Cards {
        /// Deck JSON file (default: bundled deck)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the deck as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the outbound link a card would render
    Link {
        /// Destination URL (absolute or relative to the origin)
        destination: String,

        /// Card id appended as ref_card
        #[arg(short, long)]
        card: Option<String>,

        /// Page origin used to resolve relative destinations (default: site metadata base)
        #[arg(short, long, conflicts_with = "no_origin")]
        origin: Option<String>,

        /// Build the link as if no page origin were known
        #[arg(long)]
        no_origin: bool,

        /// Stored tracking parameter as KEY=VALUE (repeatable)
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Show the tracking parameters captured from a landing URL
    Capture {
        /// Full landing page URL
        url: String,

        /// Print the captured parameters as JSON
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_deck(file: Option<&PathBuf>) -> Result<CardDeck> {
    match file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            CardDeck::from_json(&json).with_context(|| format!("Invalid deck {}", path.display()))
        }
        None => CardDeck::bundled().context("Bundled deck is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Cards { file, json } => {
            let deck = load_deck(file.as_ref())?;
            tracing::info!("Loaded {} card(s)", deck.len());

            if json {
                println!("{}", serde_json::to_string_pretty(&deck)?);
                return Ok(());
            }

            if deck.is_empty() {
                println!("No cards.");
            }
            for card in &deck {
                println!("{}  {} ({}, {})", card.id, card.title, card.tier, card.price);
                if !card.tags.is_empty() {
                    println!("  Tags: {}", card.tags.join(", "));
                }
                println!("  Link: {}", card.destination_link);
            }
            println!();
            println!("{} card(s), ids unique", deck.len());
        }

        Commands::Link {
            destination,
            card,
            origin,
            no_origin,
            params,
        } => {
            let params = params
                .iter()
                .map(|p| p.parse::<TrackedParam>())
                .collect::<Result<Vec<_>, _>>()?;
            let store = MemoryStore::with_params(params);

            let origin = if no_origin {
                None
            } else {
                match origin {
                    Some(origin) => Some(origin),
                    None => Some(SiteConfig::bundled()?.metadata_base),
                }
            };

            let link = build_outbound_link(&destination, card.as_deref(), origin.as_deref(), &store);
            println!("{}", link);
        }

        Commands::Capture { url, json } => {
            let url = Url::parse(&url).with_context(|| format!("Invalid URL: {}", url))?;
            let store = MemoryStore::new();
            let report = capture_attribution(url.query(), &store);

            if json {
                println!("{}", serde_json::to_string_pretty(&report.stored)?);
                return Ok(());
            }

            if report.stored.is_empty() {
                println!("No tracking parameters.");
            }
            for param in &report.stored {
                println!("{}", param);
            }
        }
    }

    Ok(())
}
