#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use diagnostics::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod diagnostics;
mod difficulty;
mod engine;
mod error;
mod generator;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// A square board of side `size`. At least one cell must stay mine-free so
    /// that random placement always terminates.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        if mines >= mult(size, size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
