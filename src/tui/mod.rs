//! Terminal User Interface
//!
//! TUI for the hangman game using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::MessageKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a message kind
pub fn message_color(kind: &MessageKind) -> Color {
    match kind {
        MessageKind::Info => Color::Gray,
        MessageKind::Good => Color::Green,
        MessageKind::Bad => Color::Red,
        MessageKind::Alert => Color::Yellow,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════════════╗
║                                                            ║
║    ██████╗  █████╗ ██╗     ██╗      ██████╗ ██╗    ██╗███████╗║
║   ██╔════╝ ██╔══██╗██║     ██║     ██╔═══██╗██║    ██║██╔════╝║
║   ██║  ███╗███████║██║     ██║     ██║   ██║██║ █╗ ██║███████╗║
║   ██║   ██║██╔══██║██║     ██║     ██║   ██║██║███╗██║╚════██║║
║   ╚██████╔╝██║  ██║███████╗███████╗╚██████╔╝╚███╔███╔╝███████║║
║    ╚═════╝ ╚═╝  ╚═╝╚══════╝╚══════╝ ╚═════╝  ╚══╝╚══╝ ╚══════╝║
║                                                            ║
║             Seven tries. One word. No pressure.            ║
║                                                            ║
╚════════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " GALLOWS ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════╗
║                       CONTROLS                            ║
╠═══════════════════════════════════════════════════════════╣
║  ↑/↓    Navigate the menu                                 ║
║  Enter  Select option / Start the next round              ║
║  Esc    Abort the round / Go back                         ║
║  ?      Toggle this help                                  ║
║  q      Quit (from the menu)                              ║
╠═══════════════════════════════════════════════════════════╣
║                       PLAYING                             ║
╠═══════════════════════════════════════════════════════════╣
║  a-z    Guess a letter (case doesn't matter)              ║
║         Correct letters reveal every occurrence.          ║
║         A miss adds a piece to the gallows figure.        ║
║         Seven misses and the round is lost.               ║
╚═══════════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(12),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the play-area layout (gallows figure + board)
pub fn create_play_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),  // Gallows figure
            Constraint::Min(30),     // Word board and messages
        ])
        .split(area)
        .to_vec()
}

/// Create the board layout (word, misses, messages)
pub fn create_board_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),   // Secret word
            Constraint::Length(5),   // Missed letters
            Constraint::Min(4),      // Messages
        ])
        .split(area)
        .to_vec()
}
