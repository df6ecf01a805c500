//! Vocabulary decks for drill sessions
//!
//! This module provides:
//! - Record parsing and validation (one card per deck line)
//! - All-or-nothing deck loading
//! - Uniform, non-repeating draw sessions

pub mod models;
pub mod session;
pub mod storage;

pub use models::*;
pub use session::DrawSession;
pub use storage::{Deck, DeckError, DEFAULT_DECK_FILE};
