use anyhow::Result;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    // A bad deck bails here with a non-zero exit
    let deck = app.load_deck()?;
    let (tadoushi, jidoushi) = deck.category_counts();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "deck": app.settings.deck.to_string_lossy(),
                "cards": deck.len(),
                "tadoushi": tadoushi,
                "jidoushi": jidoushi,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let ok = if use_color {
                format!("{}ok{}", Color::GREEN, Color::RESET)
            } else {
                "ok".to_string()
            };
            println!(
                "{} {}: {} cards ({} TADOUSHI, {} JIDOUSHI)",
                ok,
                app.settings.deck.display(),
                deck.len(),
                tadoushi,
                jidoushi
            );
        }
    }

    Ok(())
}
