use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Flagged,
    Revealed,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) state: RevealState,
    pub(crate) has_mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) neighbors: SmallVec<[CellIndex; 8]>,
}

impl Cell {
    pub(crate) fn with_neighbors(neighbors: SmallVec<[CellIndex; 8]>) -> Self {
        Self {
            neighbors,
            ..Self::default()
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn neighbors(&self) -> &[CellIndex] {
        &self.neighbors
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.state == RevealState::Flagged
    }

    pub fn is_hidden(&self) -> bool {
        self.state == RevealState::Hidden
    }
}
