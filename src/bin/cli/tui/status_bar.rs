use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Screen, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let hints = match state.screen {
        Screen::Welcome => " any key: start  q: quit ",
        Screen::Prompt => " any key: reveal  q/Esc: quit ",
        Screen::Answer => " any key: next card  q/Esc: quit ",
        Screen::Finished => " any key: exit ",
    };

    let text = match state.progress {
        Some(p) if state.screen != Screen::Finished => format!(" {}/{} |{}", p.position, p.total, hints),
        _ => hints.to_string(),
    };

    let style = if state.color {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    } else {
        Style::default()
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}
