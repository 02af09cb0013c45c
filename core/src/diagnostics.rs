use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// State of one cell as seen by the diagnostics key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub x: Coord,
    pub y: Coord,
    pub adjacent_mines: u8,
    pub neighbor_count: u8,
    pub state: RevealState,
    pub has_mine: bool,
}

impl CellSnapshot {
    pub fn capture(board: &Board, coords: Coord2) -> Result<Self> {
        let cell = board.cell_at(coords)?;
        Ok(Self {
            x: coords.0,
            y: coords.1,
            adjacent_mines: cell.adjacent_mines(),
            neighbor_count: cell.neighbors().len() as u8,
            state: cell.state(),
            has_mine: cell.has_mine(),
        })
    }
}

impl fmt::Display for CellSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell ({}, {}): adjacent mines {}, touching {} cells, state {:?}, has mine {}",
            self.x, self.y, self.adjacent_mines, self.neighbor_count, self.state, self.has_mine
        )
    }
}

/// Append-only destination for cell snapshots. Recording never affects the
/// game; sinks deal with their own write failures.
pub trait DiagnosticSink {
    fn record(&mut self, snapshot: &CellSnapshot);
}

/// Forwards snapshots to the `log` facade under the `diagnostics` target.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, snapshot: &CellSnapshot) {
        log::info!(target: "diagnostics", "{snapshot}");
    }
}

/// Keeps snapshots in memory. Clones share the same buffer, so a handle kept
/// outside the session can read what the session recorded.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    snapshots: Rc<RefCell<Vec<CellSnapshot>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<CellSnapshot> {
        self.snapshots.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&mut self, snapshot: &CellSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reports_corner_cell() {
        let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();

        let snapshot = CellSnapshot::capture(&board, (0, 0)).unwrap();

        assert_eq!(snapshot.neighbor_count, 3);
        assert_eq!(snapshot.adjacent_mines, 1);
        assert_eq!(snapshot.state, RevealState::Hidden);
        assert!(!snapshot.has_mine);
    }

    #[test]
    fn capture_rejects_out_of_bounds() {
        let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();

        assert_eq!(CellSnapshot::capture(&board, (3, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn recording_sink_clones_share_buffer() {
        let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();
        let handle = RecordingSink::new();
        let mut sink = handle.clone();

        sink.record(&CellSnapshot::capture(&board, (1, 1)).unwrap());

        let snapshots = handle.snapshots();
        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].has_mine);
        assert_eq!(snapshots[0].neighbor_count, 8);
    }
}
