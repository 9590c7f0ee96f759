//! Main application state and rendering

use crate::data::{PlayerStatus, RoundOutcome};
use crate::game::{Game, GameCommand, GameEvent};
use crate::tui::widgets::{Gallows, LetterTiles};
use crate::tui::{
    create_board_layout, create_main_layout, create_play_layout, message_color, styled_block,
    Theme, HELP_TEXT, LOGO, SMALL_LOGO,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub alert: Option<String>,
}

/// Current screen being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Playing,
    RoundOver,
    History,
}

const MENU_ITEMS: [&str; 4] = ["Start Round", "History", "Help", "Quit"];

impl App {
    pub fn new(game: Game) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            game,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::MainMenu,
            menu_state,
            alert: None,
        }
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                // A pending alert swallows the next key
                if self.alert.take().is_some() {
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('q') if self.current_screen == Screen::MainMenu => {
                        self.running = false;
                        return Ok(false);
                    }
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Esc => {
                        if self.show_help {
                            self.show_help = false;
                        } else {
                            self.handle_escape();
                        }
                    }
                    _ => match self.current_screen {
                        Screen::MainMenu => self.handle_menu_key(key.code),
                        Screen::Playing => self.handle_play_key(key.code),
                        Screen::RoundOver => self.handle_round_over_key(key.code),
                        Screen::History => self.handle_history_key(key.code),
                    },
                }
            }
        }
        Ok(true)
    }

    fn handle_escape(&mut self) {
        match self.current_screen {
            Screen::Playing => {
                let events = self.game.execute(GameCommand::End);
                self.apply_events(&events);
                self.current_screen = Screen::MainMenu;
            }
            Screen::RoundOver | Screen::History => {
                self.current_screen = Screen::MainMenu;
            }
            Screen::MainMenu => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.navigate_up(),
            KeyCode::Down => self.navigate_down(),
            KeyCode::Enter => match self.menu_state.selected() {
                Some(0) => self.start_round(),
                Some(1) => self.current_screen = Screen::History,
                Some(2) => self.show_help = true,
                Some(3) => self.running = false,
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_play_key(&mut self, code: KeyCode) {
        if let KeyCode::Char(c) = code {
            if c.is_ascii_alphabetic() {
                let events = self.game.execute(GameCommand::Guess(c.to_ascii_uppercase()));
                self.apply_events(&events);
            }
        }
    }

    fn handle_round_over_key(&mut self, code: KeyCode) {
        if code == KeyCode::Enter {
            self.start_round();
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        if code == KeyCode::Enter {
            self.current_screen = Screen::MainMenu;
        }
    }

    fn navigate_up(&mut self) {
        let i = match self.menu_state.selected() {
            Some(0) | None => MENU_ITEMS.len() - 1,
            Some(i) => i - 1,
        };
        self.menu_state.select(Some(i));
    }

    fn navigate_down(&mut self) {
        let i = match self.menu_state.selected() {
            Some(i) if i + 1 >= MENU_ITEMS.len() => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.menu_state.select(Some(i));
    }

    fn start_round(&mut self) {
        let events = self.game.execute(GameCommand::Start);
        self.apply_events(&events);
        self.current_screen = Screen::Playing;
    }

    /// Fold state-change notifications back into the UI
    fn apply_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::RoundOver(_) => self.current_screen = Screen::RoundOver,
                GameEvent::Alert(message) => self.alert = Some(message.clone()),
                GameEvent::PlayerChanged
                | GameEvent::WordChanged
                | GameEvent::GuessesChanged
                | GameEvent::ActiveToggled(_) => {}
            }
        }
    }

    /// Render the whole frame
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.area());

        self.render_header(frame, chunks[0]);

        match self.current_screen {
            Screen::MainMenu => self.render_main_menu(frame, chunks[1]),
            Screen::Playing => self.render_playing(frame, chunks[1]),
            Screen::RoundOver => self.render_round_over(frame, chunks[1]),
            Screen::History => self.render_history(frame, chunks[1]),
        }

        self.render_status_bar(frame, chunks[2]);

        if self.show_help {
            self.render_help(frame);
        }
        if let Some(message) = self.alert.clone() {
            self.render_alert(frame, &message);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let player = &self.game.player;
        let status_color = match player.status {
            PlayerStatus::Playing => self.theme.accent,
            PlayerStatus::Winner => self.theme.success,
            PlayerStatus::Loser => self.theme.alert,
            PlayerStatus::NotPlaying => self.theme.border,
        };

        let line = Line::from(vec![
            Span::styled(
                SMALL_LOGO,
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(player.name.clone(), Style::default().fg(self.theme.fg)),
            Span::raw(" │ Score: "),
            Span::styled(
                player.score.to_string(),
                Style::default().fg(self.theme.success),
            ),
            Span::raw(" │ "),
            Span::styled(
                format!("{} {}", player.status.symbol(), player.status),
                Style::default().fg(status_color),
            ),
        ]);

        let header = Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn render_main_menu(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(14), Constraint::Min(6)])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|label| ListItem::new(format!("  {}  ", label)))
            .collect();

        let menu = List::new(items)
            .block(styled_block("Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let menu_area = centered_rect(30, 100, chunks[1]);
        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);
    }

    fn render_playing(&self, frame: &mut Frame, area: Rect) {
        let chunks = create_play_layout(area);

        let round = &self.game.round;
        let figure_block = styled_block("Gallows", &self.theme);
        let figure_area = figure_block.inner(chunks[0]);
        frame.render_widget(figure_block, chunks[0]);
        frame.render_widget(
            Gallows::new(round.incorrect_guesses, round.max_tries).color(self.theme.fg),
            figure_area,
        );

        let board = create_board_layout(chunks[1]);

        let word_block = styled_block("Word", &self.theme);
        let word_area = word_block.inner(board[0]);
        frame.render_widget(word_block, board[0]);
        frame.render_widget(
            LetterTiles::new(round.word.letters()).color(self.theme.accent),
            pad(word_area),
        );

        let title = format!("Misses ({} tries left)", round.tries_left());
        let miss_block = styled_block(&title, &self.theme);
        let miss_area = miss_block.inner(board[1]);
        frame.render_widget(miss_block, board[1]);
        frame.render_widget(
            LetterTiles::new(round.guesses.letters()).color(self.theme.alert),
            pad(miss_area),
        );

        self.render_messages(frame, board[2]);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let messages = &self.game.message_log;
        let start = messages.len().saturating_sub(visible);

        let items: Vec<ListItem> = messages[start..]
            .iter()
            .map(|m| {
                let color = message_color(&m.kind);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        m.timestamp.format("%H:%M:%S ").to_string(),
                        Style::default().fg(self.theme.border),
                    ),
                    Span::styled(format!("{} ", m.kind.symbol()), Style::default().fg(color)),
                    Span::styled(m.text.clone(), Style::default().fg(color)),
                ]))
            })
            .collect();

        let list = List::new(items).block(styled_block("Messages", &self.theme));
        frame.render_widget(list, area);
    }

    fn render_round_over(&self, frame: &mut Frame, area: Rect) {
        let Some(record) = self.game.history.last() else {
            return;
        };

        let (headline, color) = match record.outcome {
            RoundOutcome::Won => ("YOU SOLVED IT!", self.theme.success),
            RoundOutcome::Lost => ("OUT OF TRIES", self.theme.alert),
            RoundOutcome::Killed => ("ROUND ABANDONED", self.theme.warning),
        };

        let lines = vec![
            Line::raw(""),
            Line::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::raw("The word was "),
                Span::styled(
                    record.word.clone(),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::raw(format!("Misses: {}", record.misses)),
            Line::raw(""),
            Line::raw(format!(
                "Score: {}   Streak: {}   Best: {}",
                self.game.player.score,
                self.game.player.current_streak,
                self.game.player.best_streak
            )),
            Line::raw(""),
            Line::styled(
                "Enter: next round   Esc: menu",
                Style::default().fg(self.theme.border),
            ),
        ];

        let banner = Paragraph::new(lines)
            .block(styled_block("Round Over", &self.theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(banner, centered_rect(60, 70, area));
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.game.history.is_empty() {
            vec![ListItem::new("  No rounds played yet.")]
        } else {
            self.game
                .history
                .records()
                .iter()
                .rev()
                .map(|r| {
                    let color = match r.outcome {
                        RoundOutcome::Won => self.theme.success,
                        RoundOutcome::Lost => self.theme.alert,
                        RoundOutcome::Killed => self.theme.warning,
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            r.finished_at.format("%H:%M:%S  ").to_string(),
                            Style::default().fg(self.theme.border),
                        ),
                        Span::styled(
                            format!("{:<12}", r.word),
                            Style::default().fg(self.theme.fg),
                        ),
                        Span::styled(format!("{:<8}", r.outcome), Style::default().fg(color)),
                        Span::styled(
                            format!("{} misses", r.misses),
                            Style::default().fg(self.theme.border),
                        ),
                    ]))
                })
                .collect()
        };

        let list = List::new(items).block(styled_block("History (Esc to go back)", &self.theme));
        frame.render_widget(list, centered_rect(70, 90, area));
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.current_screen {
            Screen::MainMenu => "↑/↓ navigate  Enter select  ? help  q quit",
            Screen::Playing => "a-z guess  Esc abort round  ? help",
            Screen::RoundOver => "Enter next round  Esc menu",
            Screen::History => "Esc back",
        };

        let status = Paragraph::new(Line::from(vec![
            Span::styled(
                self.game.status_line(),
                Style::default().fg(self.theme.accent),
            ),
            Span::raw("  ·  "),
            Span::styled(hint, Style::default().fg(self.theme.border)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border)),
        );
        frame.render_widget(status, area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(60, 80, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }

    fn render_alert(&self, frame: &mut Frame, message: &str) {
        let area = centered_rect(40, 20, frame.area());
        frame.render_widget(Clear, area);
        let alert = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                message.to_string(),
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "press any key",
                Style::default().fg(self.theme.border),
            ),
        ])
        .block(
            Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.warning)),
        )
        .alignment(Alignment::Center);
        frame.render_widget(alert, area);
    }
}

/// Inset a rect by one cell on the left and top
fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(1),
        height: area.height.saturating_sub(1),
    }
}

/// Center a rect of the given percentage size inside `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WordList;
    use crate::game::{GamePhase, DEFAULT_MAX_TRIES};

    fn app() -> App {
        let words = WordList::new(["CAT"]).unwrap();
        let game = Game::new("Tester", words, DEFAULT_MAX_TRIES).unwrap();
        App::new(game)
    }

    #[test]
    fn starting_a_round_switches_to_playing() {
        let mut app = app();
        app.start_round();
        assert_eq!(app.current_screen, Screen::Playing);
        assert!(app.game.is_active());
    }

    #[test]
    fn round_over_event_switches_screens() {
        let mut app = app();
        app.start_round();
        for c in [KeyCode::Char('c'), KeyCode::Char('a'), KeyCode::Char('t')] {
            app.handle_play_key(c);
        }
        assert_eq!(app.current_screen, Screen::RoundOver);
        assert_eq!(app.game.phase, GamePhase::Over(RoundOutcome::Won));
    }

    #[test]
    fn alert_event_is_surfaced() {
        let mut app = app();
        let events = app.game.execute(GameCommand::Guess('C'));
        app.apply_events(&events);
        assert_eq!(app.alert.as_deref(), Some("Please start game to play."));
    }

    #[test]
    fn escape_during_play_aborts_the_round() {
        let mut app = app();
        app.start_round();
        app.handle_escape();
        assert_eq!(app.current_screen, Screen::MainMenu);
        assert_eq!(app.game.phase, GamePhase::Over(RoundOutcome::Killed));
        assert_eq!(app.game.player.status, PlayerStatus::NotPlaying);
    }

    #[test]
    fn menu_navigation_wraps() {
        let mut app = app();
        app.navigate_up();
        assert_eq!(app.menu_state.selected(), Some(MENU_ITEMS.len() - 1));
        app.navigate_down();
        assert_eq!(app.menu_state.selected(), Some(0));
    }
}
