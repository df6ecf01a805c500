use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::{Screen, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let accent = if state.color {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let dim = if state.color {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let word_style = Style::default().add_modifier(Modifier::BOLD);

    let block = Block::default()
        .title(" ドジ ")
        .borders(Borders::ALL)
        .border_style(accent);

    let mut lines = vec![Line::from("")];
    match (state.screen, state.card.as_ref()) {
        (Screen::Welcome, _) => {
            lines.push(Line::from(Span::styled("ドジ", word_style)));
            lines.push(Line::from(""));
            lines.push(Line::from(format!("{} cards", state.total)));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Press any key to continue...", dim)));
        }
        (Screen::Prompt, Some(card)) => {
            lines.push(Line::from(Span::styled(card.word().to_string(), word_style)));
        }
        (Screen::Answer, Some(card)) => {
            lines.push(Line::from(Span::styled(card.word().to_string(), word_style)));
            lines.push(Line::from(Span::styled(card.category().label(), accent)));
            lines.push(Line::from(card.opposite_native().to_string()));
            lines.push(Line::from(Span::styled(card.opposite_translated().to_string(), dim)));
        }
        (Screen::Finished, _) => {
            if let Some(summary) = state.summary {
                lines.push(Line::from(format!("All {} cards done.", summary.total)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Press any key to exit.", dim)));
        }
        (Screen::Prompt | Screen::Answer, None) => {}
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
