//! Core game logic and state management

pub mod round;

use crate::data::*;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use round::{GuessOutcome, Round};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default number of misses before the round is lost
pub const DEFAULT_MAX_TRIES: u32 = 7;

/// The main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Current game phase
    pub phase: GamePhase,

    /// The player
    pub player: Player,

    /// The round in progress (pre-dealt even while idle)
    pub round: Round,

    /// Candidate secret words
    pub words: WordList,

    /// Misses allowed per round
    pub max_tries: u32,

    /// Rounds finished this session
    pub history: SessionHistory,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round started yet
    Idle,
    /// A round is being played
    Active,
    /// The last round ended with this outcome; the next one is dealt
    Over(RoundOutcome),
}

/// Input channel: everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Guess(char),
    End,
}

/// Output channel: state-change notifications for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Player name, score, or status changed
    PlayerChanged,
    /// The secret word or its reveal state changed
    WordChanged,
    /// The missed-letters list changed
    GuessesChanged,
    /// The round went active or inactive
    ActiveToggled(bool),
    /// A user-facing notice
    Alert(String),
    /// A round reached a terminal state
    RoundOver(RoundOutcome),
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    pub text: String,
}

impl GameMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, text)
    }
}

impl Game {
    /// Create a new game. The first secret word is dealt immediately so a
    /// round can start without touching the word list again.
    pub fn new(player_name: &str, words: WordList, max_tries: u32) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList.into());
        }
        if max_tries == 0 {
            return Err(GameError::InvalidState("max_tries must be at least 1".to_string()).into());
        }
        let round = Round::new(words.pick(&mut rand::rng()), max_tries);
        let mut game = Self {
            phase: GamePhase::Idle,
            player: Player::new(player_name),
            round,
            words,
            max_tries,
            history: SessionHistory::default(),
            message_log: Vec::new(),
        };
        game.add_message(GameMessage::info(
            "Welcome to Gallows. Start a round when you're ready.",
        ));
        Ok(game)
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    /// Run one command through the state machine and report what changed
    pub fn execute(&mut self, command: GameCommand) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match command {
            GameCommand::Start => self.start(&mut events),
            GameCommand::Guess(letter) => self.guess(letter, &mut events),
            GameCommand::End => {
                if self.is_active() {
                    self.add_message(GameMessage::info("Round abandoned."));
                    self.complete(RoundOutcome::Killed, &mut events);
                }
            }
        }
        events
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.is_active() {
            debug!("start ignored, round already active");
            return;
        }
        debug!(word_len = self.round.word.len(), "round started");
        self.phase = GamePhase::Active;
        self.player.start_playing();
        self.add_message(GameMessage::info(format!(
            "New round: the word has {} letters. Good luck!",
            self.round.word.len()
        )));
        events.push(GameEvent::PlayerChanged);
        events.push(GameEvent::WordChanged);
        events.push(GameEvent::ActiveToggled(true));
    }

    fn guess(&mut self, letter: char, events: &mut Vec<GameEvent>) {
        if !self.is_active() {
            events.push(GameEvent::Alert("Please start game to play.".to_string()));
            return;
        }
        if !letter.is_ascii_alphabetic() {
            return;
        }

        match self.round.apply(letter) {
            GuessOutcome::Correct { letter, solved } => {
                debug!(%letter, solved, "correct guess");
                self.add_message(GameMessage::new(
                    MessageKind::Good,
                    format!("'{letter}' is in the word."),
                ));
                events.push(GameEvent::WordChanged);
                if solved {
                    self.add_message(GameMessage::new(
                        MessageKind::Good,
                        format!("Solved it: {}", self.round.word.answer()),
                    ));
                    self.complete(RoundOutcome::Won, events);
                }
            }
            GuessOutcome::Incorrect { letter, out_of_tries } => {
                debug!(%letter, out_of_tries, "miss");
                self.add_message(GameMessage::new(
                    MessageKind::Bad,
                    format!(
                        "'{letter}' is not in the word. {} tries left.",
                        self.round.tries_left()
                    ),
                ));
                events.push(GameEvent::GuessesChanged);
                if out_of_tries {
                    self.add_message(GameMessage::new(
                        MessageKind::Bad,
                        format!("Out of tries. The word was {}.", self.round.word.answer()),
                    ));
                    self.complete(RoundOutcome::Lost, events);
                }
            }
        }
    }

    /// Terminal transition: settle the player, record the round, re-deal
    fn complete(&mut self, outcome: RoundOutcome, events: &mut Vec<GameEvent>) {
        debug!(?outcome, word = %self.round.word.answer(), "round over");
        self.phase = GamePhase::Over(outcome);
        match outcome {
            RoundOutcome::Won => self.player.win(),
            RoundOutcome::Lost => self.player.lose(),
            RoundOutcome::Killed => self.player.abandon(),
        }
        self.history.record(RoundRecord::new(
            &self.round.word.answer(),
            outcome,
            self.round.incorrect_guesses,
        ));
        events.push(GameEvent::PlayerChanged);
        events.push(GameEvent::RoundOver(outcome));
        self.reset(events);
    }

    /// Clear counters and misses, deal the next word, go inactive
    fn reset(&mut self, events: &mut Vec<GameEvent>) {
        self.round = Round::new(self.words.pick(&mut rand::rng()), self.max_tries);
        events.push(GameEvent::WordChanged);
        events.push(GameEvent::GuessesChanged);
        events.push(GameEvent::ActiveToggled(false));
    }

    /// One-line status summary for the status bar
    pub fn status_line(&self) -> String {
        format!(
            "Round {} | Misses: {}/{} | Score: {} | Streak: {}",
            self.history.len() + 1,
            self.round.incorrect_guesses,
            self.max_tries,
            self.player.score,
            self.player.current_streak,
        )
    }

    /// Swap in a known secret word for the round in progress
    #[cfg(test)]
    fn rig_secret(&mut self, word: &str) {
        self.round = Round::new(word, self.max_tries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_game() -> Game {
        let words = WordList::new(["CAT"]).unwrap();
        Game::new("Tester", words, DEFAULT_MAX_TRIES).unwrap()
    }

    #[test]
    fn guessing_while_idle_raises_notice_and_mutates_nothing() {
        let mut game = cat_game();
        let events = game.execute(GameCommand::Guess('C'));
        assert_eq!(
            events,
            vec![GameEvent::Alert("Please start game to play.".to_string())]
        );
        assert_eq!(game.round.correct_guesses, 0);
        assert_eq!(game.round.incorrect_guesses, 0);
        assert_eq!(game.phase, GamePhase::Idle);
    }

    #[test]
    fn start_activates_and_sets_player_playing() {
        let mut game = cat_game();
        let events = game.execute(GameCommand::Start);
        assert!(game.is_active());
        assert_eq!(game.player.status, PlayerStatus::Playing);
        assert!(events.contains(&GameEvent::ActiveToggled(true)));
    }

    #[test]
    fn start_is_a_no_op_while_active() {
        let mut game = cat_game();
        game.execute(GameCommand::Start);
        let events = game.execute(GameCommand::Start);
        assert!(events.is_empty());
        assert!(game.is_active());
    }

    #[test]
    fn cat_scenario_plays_to_a_win() {
        let mut game = cat_game();
        game.execute(GameCommand::Start);

        let events = game.execute(GameCommand::Guess('C'));
        assert_eq!(events, vec![GameEvent::WordChanged]);
        assert_eq!(game.round.correct_guesses, 1);
        assert_eq!(game.round.word.masked(), "C__");

        game.execute(GameCommand::Guess('A'));
        let events = game.execute(GameCommand::Guess('T'));
        assert!(events.contains(&GameEvent::RoundOver(RoundOutcome::Won)));
        assert!(events.contains(&GameEvent::ActiveToggled(false)));
        assert_eq!(game.player.score, 1);
        assert_eq!(game.player.status, PlayerStatus::Winner);
        assert_eq!(game.phase, GamePhase::Over(RoundOutcome::Won));
    }

    #[test]
    fn repeated_correct_guess_counts_again_without_error() {
        let mut game = cat_game();
        game.execute(GameCommand::Start);
        game.execute(GameCommand::Guess('C'));
        let events = game.execute(GameCommand::Guess('C'));
        assert_eq!(events, vec![GameEvent::WordChanged]);
        assert_eq!(game.round.correct_guesses, 2);
        assert_eq!(game.round.word.masked(), "C__");
    }

    #[test]
    fn seven_misses_lose_the_round() {
        let mut game = cat_game();
        game.execute(GameCommand::Start);
        for letter in ['B', 'D', 'E', 'F', 'G', 'H'] {
            game.execute(GameCommand::Guess(letter));
        }
        assert_eq!(game.round.incorrect_guesses, 6);
        assert!(game.is_active());

        let events = game.execute(GameCommand::Guess('I'));
        assert!(events.contains(&GameEvent::RoundOver(RoundOutcome::Lost)));
        assert_eq!(game.player.status, PlayerStatus::Loser);
        assert_eq!(game.phase, GamePhase::Over(RoundOutcome::Lost));

        let record = game.history.last().unwrap();
        assert_eq!(record.outcome, RoundOutcome::Lost);
        assert_eq!(record.misses, DEFAULT_MAX_TRIES);
        assert_eq!(record.word, "CAT");

        // reset already dealt a fresh round
        assert_eq!(game.round.incorrect_guesses, 0);
        assert!(game.round.guesses.is_empty());
        assert!(!game.round.word.is_solved());
    }

    #[test]
    fn abort_mid_round_kills_and_clears() {
        let mut game = cat_game();
        game.execute(GameCommand::Start);
        game.execute(GameCommand::Guess('Z'));

        let events = game.execute(GameCommand::End);
        assert!(events.contains(&GameEvent::RoundOver(RoundOutcome::Killed)));
        assert_eq!(game.phase, GamePhase::Over(RoundOutcome::Killed));
        assert_eq!(game.player.status, PlayerStatus::NotPlaying);
        assert_eq!(game.round.incorrect_guesses, 0);
        assert!(game.round.guesses.is_empty());
        assert_eq!(game.history.last().unwrap().outcome, RoundOutcome::Killed);
    }

    #[test]
    fn zero_tries_is_rejected_at_construction() {
        let words = WordList::new(["CAT"]).unwrap();
        assert!(Game::new("Tester", words, 0).is_err());
    }

    #[test]
    fn end_while_idle_is_ignored() {
        let mut game = cat_game();
        assert!(game.execute(GameCommand::End).is_empty());
        assert_eq!(game.phase, GamePhase::Idle);
        assert!(game.history.is_empty());
    }

    #[test]
    fn lowercase_and_symbols_are_normalized_or_ignored() {
        let mut game = cat_game();
        game.execute(GameCommand::Start);
        game.execute(GameCommand::Guess('c'));
        assert_eq!(game.round.word.masked(), "C__");
        let events = game.execute(GameCommand::Guess('!'));
        assert!(events.is_empty());
        assert_eq!(game.round.incorrect_guesses, 0);
    }

    #[test]
    fn misses_never_exceed_max_tries() {
        let mut game = cat_game();
        game.rig_secret("PIANO");
        game.execute(GameCommand::Start);
        for letter in ['Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'] {
            game.execute(GameCommand::Guess(letter));
            assert!(game.round.incorrect_guesses <= game.max_tries);
        }
        // the loss fired mid-sequence and the remaining guesses hit an idle game
        assert_eq!(game.phase, GamePhase::Over(RoundOutcome::Lost));
    }

    #[test]
    fn winning_after_a_rigged_deal_uses_the_rigged_word() {
        let mut game = cat_game();
        game.execute(GameCommand::Start);
        game.rig_secret("ODD");
        game.execute(GameCommand::Guess('O'));
        let events = game.execute(GameCommand::Guess('D'));
        assert!(events.contains(&GameEvent::RoundOver(RoundOutcome::Won)));
        assert_eq!(game.history.last().unwrap().word, "ODD");
    }
}
