//! Gallows: hangman in your terminal
//!
//! Guess the word one letter at a time before the figure
//! on the gallows is complete.

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gallows::config::{Cli, Config};
use gallows::tui::App;
use gallows::Game;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use tracing::info;

fn main() -> gallows::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = Config::load(&cli)?;
    info!(player = %config.player, words = config.words.len(), "starting");
    let game = Game::new(&config.player, config.words, config.max_tries)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(game);

    // Main loop
    while app.running {
        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle input
        if !app.handle_input()? {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let player = &app.game.player;
    println!("\n╔══════════════════════════════════════════╗");
    println!("║  Thanks for playing Gallows!             ║");
    println!("║                                          ║");
    println!("║  Words solved: {:<26}║", player.score);
    println!("║  Best streak:  {:<26}║", player.best_streak);
    println!("╚══════════════════════════════════════════╝\n");

    Ok(())
}

/// Log to a file when RUST_LOG is set; stderr would tear up the TUI
fn init_logging() -> gallows::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = std::fs::File::create("gallows.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
