#![cfg(feature = "std")]

use std::io::Write;
use std::string::String;
use std::thread;
use std::time::Duration;

use crate::{
    board::{Board, Cell},
    common::{BoardError, Shot, ShotOutcome},
    config::BOARD_SIZE,
    coord::Coordinate,
    game::{MatchState, MatchSummary, Side},
    input::InputError,
    observer::MatchObserver,
};

const RULE: &str = "___________________________";
const SEPARATOR: &str = "          ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬";

/// Turns a board into something a person can look at.
pub trait Renderer {
    fn render(&self, board: &Board) -> String;
}

/// Plain-text grid with numbered rows and columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn glyph(cell: Cell) -> &'static str {
        match cell {
            Cell::Empty => "░",
            Cell::Ship => "■",
            Cell::Hit => "¤",
            Cell::Miss => "•",
            Cell::ExclusionMarker => "○",
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, board: &Board) -> String {
        let mut lines = Vec::with_capacity(2 * BOARD_SIZE as usize + 3);
        lines.push(RULE.to_string());

        let header: Vec<String> = (1..=BOARD_SIZE).map(|c| c.to_string()).collect();
        lines.push(format!("  | {} |", header.join(" | ")));
        lines.push(RULE.to_string());

        for row in 1..=BOARD_SIZE {
            let glyphs: Vec<&str> = (1..=BOARD_SIZE)
                .map(|col| Self::glyph(board.visible_cell(Coordinate::new(row, col))))
                .collect();
            lines.push(format!("{} | {} |", row, glyphs.join(" | ")));
            lines.push(RULE.to_string());
        }
        lines.join("\n")
    }
}

/// Welcome banner shown before the first move.
pub fn greeting() -> &'static str {
    "        ┌───────────────────────────┐
        │         Welcome!          │
        │    The game Sea Battle    │
        │ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ │
        │ Your goal: sink the enemy │
        │  fleet before it sinks    │
        │          yours            │
        │ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ │
        │  Boards are generated     │
        │  automatically, you only  │
        │  need to attack           │
        │ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ ▬ │
        │        Good hunting!      │
        └───────────────────────────┘"
}

/// Prints the match as it unfolds, pausing between moves.
pub struct ConsoleObserver<W: Write, D: Renderer = TextRenderer> {
    out: W,
    renderer: D,
    pace: Duration,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, pace: Duration) -> Self {
        Self::with_renderer(out, TextRenderer, pace)
    }
}

impl<W: Write, D: Renderer> ConsoleObserver<W, D> {
    pub fn with_renderer(out: W, renderer: D, pace: Duration) -> Self {
        Self { out, renderer, pace }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("failed to write to console: {}", e);
        }
    }

    fn pause(&self, factor: u32) {
        if !self.pace.is_zero() {
            thread::sleep(self.pace * factor);
        }
    }

    fn show_boards(&mut self, player_board: &Board, computer_board: &Board) {
        let mine = self.renderer.render(player_board);
        let theirs = self.renderer.render(computer_board);
        self.say(SEPARATOR);
        self.say("Your board:");
        self.say(&mine);
        self.pause(1);
        self.say("Enemy board:");
        self.say(&theirs);
        self.pause(1);
    }
}

impl<W: Write, D: Renderer> MatchObserver for ConsoleObserver<W, D> {
    fn turn_started(&mut self, side: Side, player_board: &Board, computer_board: &Board) {
        self.show_boards(player_board, computer_board);
        match side {
            Side::Player => self.say("Player, your move!"),
            Side::Computer => self.say("Computer moves!"),
        }
    }

    fn target_chosen(&mut self, side: Side, target: Coordinate) {
        if side == Side::Computer {
            self.say(&format!(
                "Computer fires at {} {}",
                target.row(),
                target.col()
            ));
        }
    }

    fn shot_rejected(&mut self, side: Side, error: &BoardError) {
        match side {
            Side::Player => self.say(&error.to_string()),
            Side::Computer => log::debug!("computer target rejected: {}", error),
        }
    }

    fn shot_resolved(&mut self, _side: Side, shot: Shot) {
        let message = match shot.outcome {
            ShotOutcome::Miss => "Miss",
            ShotOutcome::Hit => "Ship hit, extra move",
            ShotOutcome::Sunk => "Ship destroyed",
        };
        self.say(message);
        self.pause(2);
    }

    fn input_rejected(&mut self, error: &InputError) {
        self.say(&error.to_string());
    }

    fn match_finished(&mut self, summary: &MatchSummary) {
        self.say(SEPARATOR);
        match summary.state {
            MatchState::PlayerWon => self.say("Congratulations, you won!"),
            _ => self.say("You lost! Better luck next time!"),
        }
        self.pause(5);
    }
}
