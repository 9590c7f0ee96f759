//! Custom widgets for the game UI

use crate::data::Letter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Number of pieces in the gallows figure
pub const FIGURE_PIECES: u32 = 7;

/// Figure art per stage, 0 (empty) through 7 (complete)
const STAGES: [[&str; 8]; 8] = [
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", " ─────────"],
    [
        "   │",
        "   │",
        "   │",
        "   │",
        "   │",
        "   │",
        "   │",
        " ──┴──────",
    ],
    [
        "   ┌─────┐",
        "   │     │",
        "   │",
        "   │",
        "   │",
        "   │",
        "   │",
        " ──┴──────",
    ],
    [
        "   ┌─────┐",
        "   │     │",
        "   │     O",
        "   │",
        "   │",
        "   │",
        "   │",
        " ──┴──────",
    ],
    [
        "   ┌─────┐",
        "   │     │",
        "   │     O",
        "   │     │",
        "   │     │",
        "   │",
        "   │",
        " ──┴──────",
    ],
    [
        "   ┌─────┐",
        "   │     │",
        "   │     O",
        r"   │    /│\",
        "   │     │",
        "   │",
        "   │",
        " ──┴──────",
    ],
    [
        "   ┌─────┐",
        "   │     │",
        "   │     O",
        r"   │    /│\",
        "   │     │",
        r"   │    / \",
        "   │",
        " ──┴──────",
    ],
];

/// How many pieces of the figure are drawn for a given miss count.
///
/// Scales proportionally when `max_tries` is not seven, reaching the full
/// figure exactly at the last allowed miss.
pub fn figure_stage(misses: u32, max_tries: u32) -> usize {
    if max_tries == 0 {
        return FIGURE_PIECES as usize;
    }
    let misses = misses.min(max_tries);
    ((misses * FIGURE_PIECES) / max_tries) as usize
}

/// The gallows figure, drawn piece by piece as misses add up
pub struct Gallows {
    misses: u32,
    max_tries: u32,
    color: Color,
}

impl Gallows {
    pub fn new(misses: u32, max_tries: u32) -> Self {
        Self {
            misses,
            max_tries,
            color: Color::White,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for Gallows {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 8 {
            return;
        }

        let stage = figure_stage(self.misses, self.max_tries);
        let color = if stage >= STAGES.len() - 1 {
            Color::Red
        } else {
            self.color
        };

        for (i, line) in STAGES[stage].iter().enumerate() {
            buf.set_string(
                area.x + 1,
                area.y + i as u16,
                line,
                Style::default().fg(color),
            );
        }
    }
}

/// A row of letter tiles: the secret word or the missed letters
pub struct LetterTiles {
    letters: Vec<Letter>,
    color: Color,
    hidden_color: Color,
}

impl LetterTiles {
    pub fn new(letters: &[Letter]) -> Self {
        Self {
            letters: letters.to_vec(),
            color: Color::White,
            hidden_color: Color::DarkGray,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for LetterTiles {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut x = area.x;
        for letter in &self.letters {
            if x + 1 > area.right() {
                break;
            }
            let (symbol, style) = if letter.show {
                (
                    letter.value.to_string(),
                    Style::default()
                        .fg(self.color)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("_".to_string(), Style::default().fg(self.hidden_color))
            };
            buf.set_string(x, area.y, &symbol, style);
            x += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_is_empty_with_no_misses() {
        assert_eq!(figure_stage(0, 7), 0);
    }

    #[test]
    fn stage_is_full_at_max_tries() {
        assert_eq!(figure_stage(7, 7), FIGURE_PIECES as usize);
        assert_eq!(figure_stage(5, 5), FIGURE_PIECES as usize);
    }

    #[test]
    fn stage_grows_monotonically() {
        let mut last = 0;
        for misses in 0..=7 {
            let stage = figure_stage(misses, 7);
            assert!(stage >= last);
            last = stage;
        }
    }

    #[test]
    fn stage_clamps_beyond_max() {
        assert_eq!(figure_stage(99, 7), FIGURE_PIECES as usize);
    }

    #[test]
    fn every_stage_has_art() {
        for stage in 0..=FIGURE_PIECES as usize {
            assert_eq!(STAGES[stage].len(), 8);
        }
    }
}
