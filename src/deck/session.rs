//! Random, non-repeating draws over a loaded deck
//!
//! Each draw picks uniformly among the cards not yet shown: a random rank
//! `order` in `[0, remaining)` is drawn, and the deck is scanned in file order
//! for the `order`-th unused card. Over a full session every permutation of
//! the deck is equally likely. Each draw scans the deck once.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::models::Record;
use super::storage::Deck;

/// Draw state for one pass through a deck
pub struct DrawSession<'a, R = StdRng> {
    deck: &'a Deck,
    /// Parallel to `deck.records()`
    used: Vec<bool>,
    remaining: usize,
    rng: R,
}

impl<'a> DrawSession<'a, StdRng> {
    /// Reproducible session for a fixed seed
    pub fn seeded(deck: &'a Deck, seed: u64) -> Self {
        Self::new(deck, StdRng::seed_from_u64(seed))
    }

    /// Seed from the wall clock, to the second.
    pub fn from_time(deck: &'a Deck) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        log::debug!("Seeding draw session from clock: {}", seed);
        Self::seeded(deck, seed)
    }
}

impl<'a, R: Rng> DrawSession<'a, R> {
    pub fn new(deck: &'a Deck, rng: R) -> Self {
        Self {
            deck,
            used: vec![false; deck.len()],
            remaining: deck.len(),
            rng,
        }
    }

    /// Whether an unused card is left
    pub fn has_next(&self) -> bool {
        self.remaining != 0
    }

    /// Draw a random unused card, or `None` once the deck is exhausted.
    pub fn draw_next(&mut self) -> Option<&'a Record> {
        self.draw_next_indexed().map(|(_, record)| record)
    }

    /// Like [`draw_next`](Self::draw_next), also returning the card's position
    /// in the deck file.
    pub fn draw_next_indexed(&mut self) -> Option<(usize, &'a Record)> {
        if self.remaining == 0 {
            return None;
        }

        let mut order = self.rng.gen_range(0..self.remaining);

        let mut target = None;
        for (index, &used) in self.used.iter().enumerate() {
            if used {
                continue;
            }
            if order == 0 {
                target = Some(index);
                break;
            }
            order -= 1;
        }

        // `remaining` counts the unused markers, so the scan always lands.
        let index = target?;
        self.used[index] = true;
        self.remaining -= 1;
        log::debug!("Drew card {} ({} remaining)", index, self.remaining);

        let deck: &'a Deck = self.deck;
        deck.get(index).map(|record| (index, record))
    }

    /// Cards not yet drawn
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Cards drawn so far
    pub fn drawn(&self) -> usize {
        self.used.len() - self.remaining
    }

    /// Size of the underlying deck
    pub fn total(&self) -> usize {
        self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn sample_deck() -> Deck {
        Deck::parse("苦しい J 楽しい happy\n食べる T 飲む drink\n").unwrap()
    }

    fn deck_of(n: usize) -> Deck {
        let content: String = (0..n)
            .map(|i| format!("word{} T opp{} gloss{}\n", i, i, i))
            .collect();
        Deck::parse(&content).unwrap()
    }

    #[test]
    fn test_sample_deck_draws_both_words_once() {
        let deck = sample_deck();
        let mut session = DrawSession::seeded(&deck, 7);

        let mut words = HashSet::new();
        while session.has_next() {
            let record = session.draw_next().unwrap();
            assert!(words.insert(record.word().to_string()));
        }

        let expected: HashSet<String> = ["苦しい", "食べる"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);
        assert!(!session.has_next());
    }

    #[test]
    fn test_exactly_n_draws_then_none() {
        let deck = deck_of(25);

        for seed in 0..20 {
            let mut session = DrawSession::seeded(&deck, seed);
            let mut count = 0;
            while session.has_next() {
                assert!(session.draw_next().is_some());
                count += 1;
            }
            assert_eq!(count, 25);
            assert!(session.draw_next().is_none());
            assert!(session.draw_next().is_none());
        }
    }

    #[test]
    fn test_no_position_drawn_twice() {
        let deck = deck_of(40);
        let mut session = DrawSession::seeded(&deck, 1234);

        let mut positions = HashSet::new();
        while let Some((index, record)) = session.draw_next_indexed() {
            assert!(positions.insert(index), "position {} drawn twice", index);
            assert_eq!(record, &deck.records()[index]);
        }
        assert_eq!(positions.len(), 40);
    }

    #[test]
    fn test_remaining_tracks_draws() {
        let deck = deck_of(5);
        let mut session = DrawSession::seeded(&deck, 3);

        assert_eq!(session.total(), 5);
        for expected_remaining in (0..5).rev() {
            session.draw_next().unwrap();
            assert_eq!(session.remaining(), expected_remaining);
            assert_eq!(session.drawn(), 5 - expected_remaining);
        }
    }

    #[test]
    fn test_empty_deck_is_exhausted() {
        let deck = Deck::default();
        let mut session = DrawSession::seeded(&deck, 0);

        assert!(!session.has_next());
        assert!(session.draw_next().is_none());
        assert_eq!(session.total(), 0);
    }

    #[test]
    fn test_same_seed_same_order() {
        let deck = deck_of(12);
        let order = |seed| {
            let mut session = DrawSession::seeded(&deck, seed);
            std::iter::from_fn(|| session.draw_next_indexed().map(|(i, _)| i)).collect::<Vec<_>>()
        };

        assert_eq!(order(99), order(99));
    }

    #[test]
    fn test_zero_rng_draws_in_file_order() {
        let deck = deck_of(6);
        let mut session = DrawSession::new(&deck, StepRng::new(0, 0));

        let order: Vec<usize> =
            std::iter::from_fn(|| session.draw_next_indexed().map(|(i, _)| i)).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_draw_order_is_roughly_uniform() {
        const N: usize = 4;
        const SESSIONS: u64 = 4000;
        let deck = deck_of(N);

        // counts[record][slot]
        let mut counts = [[0u32; N]; N];
        for seed in 0..SESSIONS {
            let mut session = DrawSession::seeded(&deck, seed);
            let mut slot = 0;
            while let Some((index, _)) = session.draw_next_indexed() {
                counts[index][slot] += 1;
                slot += 1;
            }
        }

        let expected = SESSIONS as u32 / N as u32;
        for (record, row) in counts.iter().enumerate() {
            for (slot, &count) in row.iter().enumerate() {
                assert!(
                    count > expected * 85 / 100 && count < expected * 115 / 100,
                    "record {} landed in slot {} {} times (expected ~{})",
                    record,
                    slot,
                    count,
                    expected
                );
            }
        }
    }
}
