use alloc::vec::Vec;
use core::ops::Index;
use ndarray::ArrayView2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square minefield stored as one contiguous row-major array of cells.
///
/// Mine positions and adjacency are fixed at construction, afterwards only the
/// per-cell [`RevealState`] changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord,
    mine_count: CellCount,
    pub(crate) cells: Vec<Cell>,
    pub(crate) revealed_count: CellCount,
    pub(crate) flagged_count: CellCount,
}

impl Board {
    fn empty(size: Coord) -> Self {
        let total = mult(size, size) as usize;
        let cells = (0..total)
            .map(|index| Cell::with_neighbors(neighbors(index, size).collect()))
            .collect();

        Self {
            size,
            mine_count: 0,
            cells,
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    /// Draws mine positions from `rng` until `config.mines` distinct cells hold
    /// a mine, re-drawing whenever a position is already taken.
    pub fn with_rng<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        let config = BoardConfig::new(config.size, config.mines)?;
        let mut board = Self::empty(config.size);
        let total = board.cells.len();

        let mut draws = 0usize;
        while board.mine_count < config.mines {
            draws += 1;
            let index = rng.random_range(0..total);
            board.place_mine(index);
        }

        log::debug!(
            "Generated {0}x{0} board with {1} mines in {2} draws",
            config.size,
            board.mine_count,
            draws
        );
        Ok(board)
    }

    /// Builds a board with mines at the given linear positions. Duplicate
    /// positions count once.
    pub fn from_mine_positions(size: Coord, mines: &[CellIndex]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        let mut board = Self::empty(size);

        for &index in mines {
            if index >= board.cells.len() {
                return Err(GameError::InvalidCoords);
            }
            board.place_mine(index);
        }

        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(board)
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines = Vec::with_capacity(mine_coords.len());
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mines.push(to_index(coords, size));
        }
        Self::from_mine_positions(size, &mines)
    }

    /// Returns `false` if the cell already held a mine.
    fn place_mine(&mut self, index: CellIndex) -> bool {
        let cell = &mut self.cells[index];
        if cell.has_mine {
            return false;
        }
        cell.has_mine = true;

        let neighbors = cell.neighbors.clone();
        for neighbor in neighbors {
            self.cells[neighbor].adjacent_mines += 1;
        }
        self.mine_count += 1;
        true
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flagged_count as isize)
    }

    /// Every mine-free cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.revealed_count == self.safe_cell_count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: CellIndex) -> Result<&Cell> {
        self.cells.get(index).ok_or(GameError::InvalidCoords)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[to_index(coords, self.size)])
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn index_of(&self, coords: Coord2) -> Result<CellIndex> {
        self.validate_coords(coords).map(|coords| to_index(coords, self.size))
    }

    /// Two-dimensional `[row, col]` view over the cells.
    pub fn grid(&self) -> Result<ArrayView2<'_, Cell>> {
        let side = self.size as usize;
        ArrayView2::from_shape((side, side), &self.cells).map_err(|_| GameError::InvalidBoardShape)
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.has_mine)
            .map(|(index, _)| index)
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        assert!(coords.0 < self.size && coords.1 < self.size, "coordinates out of bounds");
        &self.cells[to_index(coords, self.size)]
    }
}
