//! Data models for vocabulary records
//!
//! A deck line has the form:
//! ```text
//! <word> <tag> <opposite_native> <opposite_translated>
//! ```
//! where `<tag>` is `T` (transitive) or `J` (intransitive).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single deck line failed to decode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 4 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid type {tag} for word {word}")]
    UnknownCategory { tag: String, word: String },
}

/// Verb category of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// 他動詞, tagged `T`
    Tadoushi,
    /// 自動詞, tagged `J`
    Jidoushi,
}

impl Category {
    /// The one-character tag used in deck files
    pub fn tag(self) -> &'static str {
        match self {
            Self::Tadoushi => "T",
            Self::Jidoushi => "J",
        }
    }

    /// Long label shown on the answer side of a card
    pub fn label(self) -> &'static str {
        match self {
            Self::Tadoushi => "TADOUSHI",
            Self::Jidoushi => "JIDOUSHI",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Exact match only: no case folding, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T" => Ok(Self::Tadoushi),
            "J" => Ok(Self::Jidoushi),
            _ => Err(()),
        }
    }
}

/// A single parsed flashcard
///
/// Records only exist fully populated; the fields are private so the only
/// way to get one is through [`Record::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    word: String,
    category: Category,
    opposite_native: String,
    opposite_translated: String,
}

impl Record {
    /// Decode one deck line.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[word, tag, opposite_native, opposite_translated] = fields.as_slice() else {
            return Err(RecordError::FieldCount { found: fields.len() });
        };

        let category = tag.parse::<Category>().map_err(|_| {
            log::error!("Invalid type {} for word {}", tag, word);
            RecordError::UnknownCategory {
                tag: tag.to_string(),
                word: word.to_string(),
            }
        })?;

        Ok(Self {
            word: word.to_string(),
            category,
            opposite_native: opposite_native.to_string(),
            opposite_translated: opposite_translated.to_string(),
        })
    }

    /// The prompt side of the card
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The opposite verb, in the source language
    pub fn opposite_native(&self) -> &str {
        &self.opposite_native
    }

    /// English gloss of the opposite verb
    pub fn opposite_translated(&self) -> &str {
        &self.opposite_translated
    }
}

/// Renders the record back in deck-line form.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.word,
            self.category.tag(),
            self.opposite_native,
            self.opposite_translated
        )
    }
}
