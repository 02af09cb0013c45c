use alloc::boxed::Box;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

/// One game: a board, the cursor over it and the end-of-game state.
pub struct GameSession {
    board: Board,
    cursor: Coord2,
    state: GameState,
    triggered_mine: Option<CellIndex>,
    diagnostics: Option<Box<dyn DiagnosticSink>>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
            state: Default::default(),
            triggered_mine: None,
            diagnostics: None,
        }
    }

    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn cursor_index(&self) -> CellIndex {
        to_index(self.cursor, self.board.size())
    }

    pub fn current_cell(&self) -> &Cell {
        &self.board[self.cursor_index()]
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.triggered_mine
    }

    /// Moves the cursor one cell, saturating at the board edges. Returns
    /// whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let (x, y) = self.cursor;
        let last = self.board.size() - 1;

        let next = match direction {
            Direction::Up if y > 0 => (x, y - 1),
            Direction::Down if y < last => (x, y + 1),
            Direction::Left if x > 0 => (x - 1, y),
            Direction::Right if x < last => (x + 1, y),
            _ => return false,
        };

        log::trace!("cursor {:?} -> {:?}", self.cursor, next);
        self.cursor = next;
        true
    }

    pub fn set_cursor(&mut self, coords: Coord2) -> Result<()> {
        self.cursor = self.board.validate_coords(coords)?;
        Ok(())
    }

    pub fn toggle_flag(&mut self) -> Result<MarkOutcome> {
        self.check_not_finished()?;
        self.board.toggle_flag(self.cursor_index())
    }

    /// Click on the cursor cell: reveals a hidden cell, chords a revealed
    /// numbered one, and ignores flags.
    pub fn activate(&mut self) -> Result<RevealOutcome> {
        self.check_not_finished()?;
        let index = self.cursor_index();

        let outcome = match self.board[index].state() {
            RevealState::Hidden => {
                let outcome = self.board.reveal_at(index)?;
                if outcome == RevealOutcome::HitMine {
                    self.triggered_mine = Some(index);
                }
                outcome
            }
            RevealState::Revealed => {
                let tripped = self.board.unflagged_mine_near(index);
                let outcome = self.board.chord_reveal(index)?;
                if outcome == RevealOutcome::HitMine {
                    self.triggered_mine = tripped;
                }
                outcome
            }
            RevealState::Flagged => RevealOutcome::NoChange,
        };

        self.apply_outcome(outcome);
        Ok(outcome)
    }

    pub fn snapshot(&self) -> Result<CellSnapshot> {
        CellSnapshot::capture(&self.board, self.cursor)
    }

    /// Sends a snapshot of the cursor cell to the diagnostic sink, if any.
    pub fn record_diagnostics(&mut self) -> Result<bool> {
        let snapshot = self.snapshot()?;
        match self.diagnostics.as_mut() {
            Some(sink) => {
                sink.record(&snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn apply_outcome(&mut self, outcome: RevealOutcome) {
        match outcome {
            RevealOutcome::NoChange => {}
            RevealOutcome::Revealed => self.mark_started(),
            RevealOutcome::HitMine => self.end_game(false),
            RevealOutcome::Won => self.end_game(true),
        }
        if outcome.has_update() {
            log::debug!(
                "{:?} at {:?}, {} of {} safe cells revealed",
                outcome,
                self.cursor,
                self.board.revealed_count(),
                self.board.safe_cell_count()
            );
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = GameState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        if won {
            self.triggered_mine = None;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("cursor", &self.cursor)
            .field("state", &self.state)
            .field("triggered_mine", &self.triggered_mine)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}
