use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;

use doji_lib::config::{FileConfig, Overrides, Settings};
use doji_lib::{Deck, DrawSession};

/// Shared application state for CLI commands
pub struct App {
    pub settings: Settings,
}

impl App {
    /// Resolve settings from the config file and command-line flags
    pub fn new(config_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = match config_path {
            // An explicit path must exist
            Some(path) => FileConfig::load(path)?,
            None => match FileConfig::default_path() {
                Some(path) => FileConfig::load_or_default(&path)?,
                None => FileConfig::default(),
            },
        };

        let settings = Settings::resolve(file, &overrides);
        log::debug!("Resolved settings: {:?}", settings);
        Ok(Self { settings })
    }

    /// Load and validate the configured deck
    pub fn load_deck(&self) -> Result<Deck> {
        Deck::load(&self.settings.deck)
            .with_context(|| format!("Failed to load deck {}", self.settings.deck.display()))
    }

    /// Start a draw session, seeded from settings or the clock
    pub fn session<'a>(&self, deck: &'a Deck) -> DrawSession<'a, StdRng> {
        match self.settings.seed {
            Some(seed) => DrawSession::seeded(deck, seed),
            None => DrawSession::from_time(deck),
        }
    }
}
