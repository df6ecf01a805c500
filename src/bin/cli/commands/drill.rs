use std::io::{self, IsTerminal};

use anyhow::Result;

use crate::app::App;
use crate::render::plain::PlainPresenter;
use doji_lib::drill;

pub fn run(app: &App, plain: bool, use_color: bool) -> Result<()> {
    // Load before touching the terminal so deck errors print normally
    let deck = app.load_deck()?;
    let mut session = app.session(&deck);

    #[cfg(feature = "tui")]
    {
        if !plain && io::stdin().is_terminal() && io::stdout().is_terminal() {
            let summary = crate::tui::run(&mut session, &app.settings)?;
            log::debug!("Drill summary: {:?}", summary);
            return Ok(());
        }
    }
    #[cfg(not(feature = "tui"))]
    {
        if !plain {
            log::debug!("Built without the 'tui' feature, using plain prompts");
        }
    }

    let stdin = io::stdin();
    let mut presenter = PlainPresenter::new(
        stdin.lock(),
        io::stdout(),
        use_color,
        app.settings.show_banner,
    );
    drill::run(&mut session, &mut presenter)?;

    Ok(())
}
