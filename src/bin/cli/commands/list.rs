use anyhow::Result;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let deck = app.load_deck()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(deck.records())?);
        }
        OutputFormat::Plain => {
            if deck.is_empty() {
                println!("No cards in {}.", app.settings.deck.display());
                return Ok(());
            }

            for record in &deck {
                if use_color {
                    println!(
                        "{}{}{} {}{}{} {} {}",
                        Color::BOLD,
                        record.word(),
                        Color::RESET,
                        Color::CYAN,
                        record.category().tag(),
                        Color::RESET,
                        record.opposite_native(),
                        record.opposite_translated()
                    );
                } else {
                    // Same form as the deck file
                    println!("{}", record);
                }
            }

            println!("\n{} cards total", deck.len());
        }
    }

    Ok(())
}
