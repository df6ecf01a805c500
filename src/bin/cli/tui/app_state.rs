use doji_lib::drill::{Progress, Summary};
use doji_lib::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Prompt,
    Answer,
    Finished,
}

pub struct TuiState {
    pub screen: Screen,
    pub card: Option<Record>,
    pub progress: Option<Progress>,
    pub total: usize,
    pub summary: Option<Summary>,
    pub color: bool,
    pub show_banner: bool,
}

impl TuiState {
    pub fn new(color: bool, show_banner: bool) -> Self {
        Self {
            screen: Screen::Welcome,
            card: None,
            progress: None,
            total: 0,
            summary: None,
            color,
            show_banner,
        }
    }

    pub fn show_card(&mut self, record: &Record, progress: Progress, screen: Screen) {
        self.card = Some(record.clone());
        self.progress = Some(progress);
        self.screen = screen;
    }
}
