mod app_state;
mod card_widget;
mod key_handler;
mod status_bar;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::Rng;
use ratatui::prelude::*;

use doji_lib::config::Settings;
use doji_lib::drill::{self, Presenter, Progress, Step, Summary};
use doji_lib::{DrawSession, Record};

use app_state::{Screen, TuiState};

pub fn run<R: Rng>(session: &mut DrawSession<'_, R>, settings: &Settings) -> Result<Summary> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut presenter = TuiPresenter {
        terminal: &mut terminal,
        state: TuiState::new(settings.color, settings.show_banner),
    };
    let result = drill::run(session, &mut presenter);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draws each screen and blocks until the user acknowledges it
struct TuiPresenter<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    state: TuiState,
}

impl<B: Backend> TuiPresenter<'_, B> {
    fn wait_for_key(&mut self) -> Result<Step> {
        loop {
            let state = &self.state;
            self.terminal.draw(|f| ui::draw(f, state))?;

            // Poll with timeout so resizes get redrawn
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(key_handler::handle_key(key));
                    }
                }
            }
        }
    }
}

impl<B: Backend> Presenter for TuiPresenter<'_, B> {
    type Error = anyhow::Error;

    fn welcome(&mut self, total: usize) -> Result<Step> {
        self.state.total = total;
        if !self.state.show_banner {
            return Ok(Step::Continue);
        }
        self.state.screen = Screen::Welcome;
        self.wait_for_key()
    }

    fn show_prompt(&mut self, record: &Record, progress: Progress) -> Result<Step> {
        self.state.show_card(record, progress, Screen::Prompt);
        self.wait_for_key()
    }

    fn show_answer(&mut self, record: &Record, progress: Progress) -> Result<Step> {
        self.state.show_card(record, progress, Screen::Answer);
        self.wait_for_key()
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        // Abandoned sessions exit straight away
        if !summary.completed {
            return Ok(());
        }
        self.state.screen = Screen::Finished;
        self.state.summary = Some(*summary);
        self.wait_for_key()?;
        Ok(())
    }
}
