#![allow(non_snake_case)]

mod app;
mod deck;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::deck::{Deck, DEFAULT_CARD_COUNT};

/// Initial window width, in logical pixels
pub const WINDOW_WIDTH: f64 = 1100.0;
const WINDOW_HEIGHT: f64 = 800.0;

/// Global deck, set from command line
static DECK: OnceLock<Deck> = OnceLock::new();

/// Get the deck to show (set from command line or a generated one)
pub fn get_deck() -> Deck {
    DECK.get()
        .cloned()
        .unwrap_or_else(|| Deck::sample(DEFAULT_CARD_COUNT))
}

/// Flip Cards - card and grid showcase
#[derive(Parser, Debug)]
#[command(name = "flipcards-desktop")]
#[command(about = "Flip Cards - flippable cards in a responsive grid")]
struct Args {
    /// Deck file (JSON). Defaults to <config dir>/flipcards/deck.json when present
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Number of generated cards when no deck file is used
    #[arg(short, long, default_value_t = DEFAULT_CARD_COUNT)]
    cards: usize,

    /// Initial cap on cards per row (the in-app control allows 1-10)
    #[arg(short, long, allow_negative_numbers = true)]
    max_cards_per_row: Option<i64>,

    /// Aspect ratio for every card, e.g. "3/4"
    #[arg(short, long)]
    aspect_ratio: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Pick the deck: explicit file, then the default file, then a generated one.
fn resolve_deck(args: &Args, default_path: Option<PathBuf>) -> Result<Deck> {
    let mut deck = if let Some(path) = &args.deck {
        Deck::load(path)?
    } else if let Some(path) = default_path.filter(|p| p.exists()) {
        tracing::info!("Using deck file {:?}", path);
        Deck::load(&path)?
    } else {
        Deck::sample(args.cards)
    };

    if let Some(max) = args.max_cards_per_row {
        deck.max_cards_per_row = max;
    }
    if let Some(ratio) = &args.aspect_ratio {
        deck.set_aspect_ratio(ratio);
    }
    Ok(deck)
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let deck = resolve_deck(&args, Deck::default_path())?;
    tracing::info!(
        "Starting '{}' with {} cards, max {} per row",
        deck.title,
        deck.cards.len(),
        deck.max_cards_per_row
    );

    let title = deck.title.clone();
    let _ = DECK.set(deck);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
