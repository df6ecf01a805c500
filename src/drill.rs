//! Drill loop: prompt, reveal, repeat until the deck runs out
//!
//! Front ends implement [`Presenter`]; [`run`] drives the session.

use rand::Rng;
use serde::Serialize;

use crate::deck::{DrawSession, Record};

/// What the user asked for after a screen was acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Abandon,
}

/// 1-based position of the current card within the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

/// Outcome of a drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Cards whose prompt was shown
    pub shown: usize,
    pub total: usize,
    /// True when every card was shown and answered
    pub completed: bool,
}

/// Displays cards and waits for acknowledgements
pub trait Presenter {
    type Error;

    /// Title screen before the first card
    fn welcome(&mut self, _total: usize) -> Result<Step, Self::Error> {
        Ok(Step::Continue)
    }

    /// Show the prompt side (the word only) and wait.
    fn show_prompt(&mut self, record: &Record, progress: Progress) -> Result<Step, Self::Error>;

    /// Show the full card and wait.
    fn show_answer(&mut self, record: &Record, progress: Progress) -> Result<Step, Self::Error>;

    /// Called once, whether the deck was finished or abandoned
    fn finish(&mut self, _summary: &Summary) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Run a session to exhaustion or until the presenter abandons it.
pub fn run<R, P>(session: &mut DrawSession<'_, R>, presenter: &mut P) -> Result<Summary, P::Error>
where
    R: Rng,
    P: Presenter,
{
    let total = session.total();
    let mut shown = 0;
    let mut abandoned = presenter.welcome(total)? == Step::Abandon;

    while !abandoned && session.has_next() {
        let Some(record) = session.draw_next() else {
            break;
        };
        shown += 1;
        let progress = Progress {
            position: session.drawn(),
            total,
        };

        if presenter.show_prompt(record, progress)? == Step::Abandon
            || presenter.show_answer(record, progress)? == Step::Abandon
        {
            abandoned = true;
        }
    }

    let summary = Summary {
        shown,
        total,
        completed: !abandoned && !session.has_next(),
    };
    if abandoned {
        log::info!("Drill abandoned after {} of {} cards", shown, total);
    } else {
        log::info!("Drill finished: {} cards", shown);
    }

    presenter.finish(&summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Welcome(usize),
        Prompt(String, usize),
        Answer(String, usize),
        Finish(Summary),
    }

    #[derive(Default)]
    struct ScriptedPresenter {
        events: Vec<Event>,
        /// Abandon on the prompt screen of this (1-based) card
        abandon_at_prompt: Option<usize>,
        abandon_at_welcome: bool,
        fail_at_answer: Option<usize>,
    }

    impl Presenter for ScriptedPresenter {
        type Error = String;

        fn welcome(&mut self, total: usize) -> Result<Step, String> {
            self.events.push(Event::Welcome(total));
            Ok(if self.abandon_at_welcome { Step::Abandon } else { Step::Continue })
        }

        fn show_prompt(&mut self, record: &Record, progress: Progress) -> Result<Step, String> {
            self.events.push(Event::Prompt(record.word().to_string(), progress.position));
            if self.abandon_at_prompt == Some(progress.position) {
                return Ok(Step::Abandon);
            }
            Ok(Step::Continue)
        }

        fn show_answer(&mut self, record: &Record, progress: Progress) -> Result<Step, String> {
            if self.fail_at_answer == Some(progress.position) {
                return Err("terminal went away".to_string());
            }
            self.events.push(Event::Answer(record.word().to_string(), progress.position));
            Ok(Step::Continue)
        }

        fn finish(&mut self, summary: &Summary) -> Result<(), String> {
            self.events.push(Event::Finish(*summary));
            Ok(())
        }
    }

    fn sample_deck() -> Deck {
        Deck::parse("苦しい J 楽しい happy\n食べる T 飲む drink\n開ける T 開く open\n").unwrap()
    }

    #[test]
    fn test_full_drill_prompts_then_answers_each_card() {
        let deck = sample_deck();
        let mut session = DrawSession::seeded(&deck, 5);
        let mut presenter = ScriptedPresenter::default();

        let summary = run(&mut session, &mut presenter).unwrap();

        assert_eq!(summary, Summary { shown: 3, total: 3, completed: true });
        assert_eq!(presenter.events.len(), 1 + 3 * 2 + 1);
        assert_eq!(presenter.events[0], Event::Welcome(3));

        for card in 0..3 {
            let prompt = &presenter.events[1 + card * 2];
            let answer = &presenter.events[2 + card * 2];
            match (prompt, answer) {
                (Event::Prompt(p, pos), Event::Answer(a, apos)) => {
                    assert_eq!(p, a);
                    assert_eq!(*pos, card + 1);
                    assert_eq!(*apos, card + 1);
                }
                other => panic!("unexpected events {:?}", other),
            }
        }
        assert!(matches!(presenter.events.last(), Some(Event::Finish(_))));
    }

    #[test]
    fn test_abandon_stops_drawing() {
        let deck = sample_deck();
        let mut session = DrawSession::seeded(&deck, 5);
        let mut presenter = ScriptedPresenter {
            abandon_at_prompt: Some(2),
            ..Default::default()
        };

        let summary = run(&mut session, &mut presenter).unwrap();

        assert_eq!(summary, Summary { shown: 2, total: 3, completed: false });
        assert_eq!(session.remaining(), 1);
        let answers = presenter.events.iter().filter(|e| matches!(e, Event::Answer(..))).count();
        assert_eq!(answers, 1);
    }

    #[test]
    fn test_abandon_at_welcome_shows_nothing() {
        let deck = sample_deck();
        let mut session = DrawSession::seeded(&deck, 5);
        let mut presenter = ScriptedPresenter {
            abandon_at_welcome: true,
            ..Default::default()
        };

        let summary = run(&mut session, &mut presenter).unwrap();

        assert_eq!(summary.shown, 0);
        assert!(!summary.completed);
        assert_eq!(session.remaining(), 3);
    }

    #[test]
    fn test_presenter_error_propagates() {
        let deck = sample_deck();
        let mut session = DrawSession::seeded(&deck, 5);
        let mut presenter = ScriptedPresenter {
            fail_at_answer: Some(1),
            ..Default::default()
        };

        let result = run(&mut session, &mut presenter);
        assert_eq!(result, Err("terminal went away".to_string()));
    }

    #[test]
    fn test_empty_deck_completes_immediately() {
        let deck = Deck::default();
        let mut session = DrawSession::seeded(&deck, 0);
        let mut presenter = ScriptedPresenter::default();

        let summary = run(&mut session, &mut presenter).unwrap();

        assert_eq!(summary, Summary { shown: 0, total: 0, completed: true });
        assert_eq!(
            presenter.events,
            vec![Event::Welcome(0), Event::Finish(summary)]
        );
    }
}
