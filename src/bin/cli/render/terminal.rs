use doji_lib::Record;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Wrap `text` in an ANSI style when color is enabled
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Lines of the answer side: word, category label, opposite, gloss
pub fn render_answer(record: &Record, use_color: bool) -> Vec<String> {
    vec![
        paint(record.word(), Color::BOLD, use_color),
        paint(record.category().label(), Color::CYAN, use_color),
        record.opposite_native().to_string(),
        paint(record.opposite_translated(), Color::DIM, use_color),
    ]
}
