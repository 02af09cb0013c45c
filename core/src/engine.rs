use alloc::collections::VecDeque;
use alloc::vec;
use core::ops::BitOr;

use crate::*;

impl Board {
    /// Direct click on a cell. Flagged and already revealed cells are left
    /// alone; a hidden mine is reported as [`RevealOutcome::HitMine`] without
    /// touching any other cell.
    pub fn reveal_at(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let cell = self.cell(index)?;

        Ok(match (cell.state, cell.has_mine) {
            (RevealState::Hidden, true) => RevealOutcome::HitMine,
            (RevealState::Hidden, false) => self.flood_reveal(index),
            _ => RevealOutcome::NoChange,
        })
    }

    /// Reveals `start` and, if it has no adjacent mines, the whole connected
    /// zero region around it plus its numbered border.
    ///
    /// Flagged cells keep their flag but still pass the flood on when their
    /// count is zero. Every cell is enqueued at most once per call.
    pub fn flood_reveal(&mut self, start: CellIndex) -> RevealOutcome {
        if start >= self.cells.len() || self.cells[start].has_mine {
            return RevealOutcome::NoChange;
        }

        let revealed_before = self.revealed_count;
        let mut visited = vec![false; self.cells.len()];
        let mut to_visit = VecDeque::from([start]);
        visited[start] = true;

        while let Some(index) = to_visit.pop_front() {
            self.reveal_single_cell(index);

            let cell = &self.cells[index];
            if cell.adjacent_mines > 0 {
                continue;
            }

            for &neighbor in &cell.neighbors {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    to_visit.push_back(neighbor);
                }
            }
        }

        let revealed = self.revealed_count - revealed_before;
        log::trace!("Flood from {start} revealed {revealed} cells");

        if revealed == 0 {
            RevealOutcome::NoChange
        } else if self.is_cleared() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens every hidden neighbor of a revealed numbered cell once exactly as
    /// many neighbors are flagged as the cell's count. Unflagged mines among
    /// the neighbors lose the game, the remaining safe neighbors are still
    /// opened.
    pub fn chord_reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let cell = self.cell(index)?;

        if cell.state != RevealState::Revealed || cell.adjacent_mines == 0 {
            return Ok(RevealOutcome::NoChange);
        }
        if self.count_flagged_neighbors(index) != cell.adjacent_mines {
            return Ok(RevealOutcome::NoChange);
        }

        let neighbors = cell.neighbors.clone();
        Ok(neighbors
            .into_iter()
            .map(|neighbor| self.chord_single_cell(neighbor))
            .fold(RevealOutcome::NoChange, BitOr::bitor))
    }

    /// Hidden ⇄ Flagged. Revealed cells cannot be flagged.
    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        self.cell(index)?;
        let cell = &mut self.cells[index];

        Ok(match cell.state {
            RevealState::Hidden => {
                cell.state = RevealState::Flagged;
                self.flagged_count += 1;
                MarkOutcome::Changed
            }
            RevealState::Flagged => {
                cell.state = RevealState::Hidden;
                self.flagged_count -= 1;
                MarkOutcome::Changed
            }
            RevealState::Revealed => MarkOutcome::NoChange,
        })
    }

    pub fn count_flagged_neighbors(&self, index: CellIndex) -> u8 {
        self.cells[index]
            .neighbors
            .iter()
            .filter(|&&pos| self.cells[pos].is_flagged())
            .count() as u8
    }

    /// First hidden mined neighbor of `index`, the one a failed chord trips.
    pub fn unflagged_mine_near(&self, index: CellIndex) -> Option<CellIndex> {
        self.cells[index]
            .neighbors
            .iter()
            .copied()
            .find(|&pos| self.cells[pos].has_mine && self.cells[pos].is_hidden())
    }

    fn chord_single_cell(&mut self, index: CellIndex) -> RevealOutcome {
        let cell = &self.cells[index];

        match (cell.state, cell.has_mine) {
            (RevealState::Hidden, true) => RevealOutcome::HitMine,
            (RevealState::Hidden, false) => self.flood_reveal(index),
            _ => RevealOutcome::NoChange,
        }
    }

    fn reveal_single_cell(&mut self, index: CellIndex) {
        let cell = &mut self.cells[index];
        if cell.state == RevealState::Hidden && !cell.has_mine {
            cell.state = RevealState::Revealed;
            self.revealed_count += 1;
        }
    }
}
