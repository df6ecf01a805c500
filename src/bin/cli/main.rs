mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "doji", about = "Drill Japanese verb pairs from a deck file", version)]
struct Cli {
    /// Deck file (default: deck.doji in the current directory)
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    /// Seed for a reproducible card order (default: seeded from the clock)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Config file (default: <config dir>/doji/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run a drill session over every card in the deck
    Drill {
        /// Line-based prompts instead of the full-screen UI
        #[arg(long)]
        plain: bool,
        /// Skip the title screen
        #[arg(long)]
        no_banner: bool,
    },

    /// Validate the deck and print a summary
    Check,

    /// Print the deck's cards in file order
    List,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let (plain, no_banner) = match cli.command {
        Some(Command::Drill { plain, no_banner }) => (plain, no_banner),
        _ => (false, false),
    };
    let app = app::App::new(
        cli.config.as_deref(),
        doji_lib::config::Overrides {
            deck: cli.deck,
            seed: cli.seed,
            no_banner,
            no_color: cli.no_color,
        },
    )?;
    let use_color = app.settings.color && std::io::stdout().is_terminal();

    match cli.command {
        // No subcommand → drill
        None | Some(Command::Drill { .. }) => {
            commands::drill::run(&app, plain, use_color)?;
        }
        Some(Command::Check) => {
            commands::check::run(&app, &cli.format, use_color)?;
        }
        Some(Command::List) => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
    }

    Ok(())
}
