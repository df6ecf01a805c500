use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;

use super::app_state::TuiState;
use super::{card_widget, status_bar};

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Main layout: card area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    card_widget::draw(f, outer[0], state);
    status_bar::draw(f, outer[1], state);
}
