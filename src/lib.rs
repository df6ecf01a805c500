//! Terminal flashcard drills
//!
//! A deck file is loaded and validated up front, then a [`DrawSession`]
//! hands out its cards one at a time in random order, each exactly once.
//! The [`drill`] loop drives a [`drill::Presenter`] through the session.

pub mod config;
pub mod deck;
pub mod drill;

pub use deck::{Category, Deck, DeckError, DrawSession, Record};
