//! Loading decks from disk
//!
//! A deck file holds one record per line. Loading is all-or-nothing: the
//! first line that fails to decode rejects the whole deck.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::{Category, Record, RecordError};

/// Default deck file, looked up in the working directory
pub const DEFAULT_DECK_FILE: &str = "deck.doji";

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("deck {path:?} could not be read: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number} (\"{line}\") is not a valid card: {source}")]
    MalformedRecord {
        line_number: usize,
        line: String,
        #[source]
        source: RecordError,
    },
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// An immutable, fully validated set of records in file order
#[derive(Debug, Clone, Default)]
pub struct Deck {
    records: Vec<Record>,
}

impl Deck {
    /// Read and validate a deck file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            log::error!("Deck {:?} could not be opened: {}", path, source);
            DeckError::StoreUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let deck = Self::parse(&content)?;
        log::info!("Loaded {} cards from {:?}", deck.len(), path);
        Ok(deck)
    }

    /// Validate deck text that is already in memory.
    pub fn parse(content: &str) -> Result<Self> {
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let record = Record::parse(line).map_err(|source| {
                log::error!("Card from \"{}\" not healthy.", line);
                DeckError::MalformedRecord {
                    line_number: index + 1,
                    line: line.to_string(),
                    source,
                }
            })?;
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in file order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records in each category, as (tadoushi, jidoushi)
    pub fn category_counts(&self) -> (usize, usize) {
        let tadoushi = self
            .records
            .iter()
            .filter(|r| r.category() == Category::Tadoushi)
            .count();
        (tadoushi, self.records.len() - tadoushi)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
