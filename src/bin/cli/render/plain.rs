//! Line-based drill front end for dumb terminals and pipes
//!
//! Enter acknowledges a screen; `q` followed by Enter, or end of input,
//! abandons the session.

use std::io::{BufRead, Write};

use anyhow::Result;

use doji_lib::drill::{Presenter, Progress, Step, Summary};
use doji_lib::Record;

use super::terminal::{paint, render_answer, Color};

pub struct PlainPresenter<R, W> {
    input: R,
    output: W,
    use_color: bool,
    show_banner: bool,
}

impl<R: BufRead, W: Write> PlainPresenter<R, W> {
    pub fn new(input: R, output: W, use_color: bool, show_banner: bool) -> Self {
        Self {
            input,
            output,
            use_color,
            show_banner,
        }
    }

    /// Wait for a line of input
    fn acknowledge(&mut self, hint: &str) -> Result<Step> {
        write!(self.output, "{}", paint(hint, Color::DIM, self.use_color))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Step::Abandon);
        }
        match line.trim() {
            "q" | "quit" => Ok(Step::Abandon),
            _ => Ok(Step::Continue),
        }
    }
}

impl<R: BufRead, W: Write> Presenter for PlainPresenter<R, W> {
    type Error = anyhow::Error;

    fn welcome(&mut self, total: usize) -> Result<Step> {
        if !self.show_banner {
            return Ok(Step::Continue);
        }
        writeln!(self.output, "{}", paint("ドジ", Color::BOLD, self.use_color))?;
        writeln!(self.output, "{} cards\n", total)?;
        self.acknowledge("Press Enter to continue...")
    }

    fn show_prompt(&mut self, record: &Record, progress: Progress) -> Result<Step> {
        writeln!(
            self.output,
            "\n{} {}",
            paint(&format!("[{}/{}]", progress.position, progress.total), Color::YELLOW, self.use_color),
            paint(record.word(), Color::BOLD, self.use_color)
        )?;
        self.acknowledge("(Enter to reveal, q to quit) ")
    }

    fn show_answer(&mut self, record: &Record, _progress: Progress) -> Result<Step> {
        for line in render_answer(record, self.use_color) {
            writeln!(self.output, "  {}", line)?;
        }
        self.acknowledge("(Enter for next card, q to quit) ")
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        if summary.completed {
            writeln!(self.output, "\nAll {} cards done.", summary.total)?;
        } else {
            writeln!(self.output, "\nStopped after {} of {} cards.", summary.shown, summary.total)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
