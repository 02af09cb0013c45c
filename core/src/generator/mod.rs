use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board>;
}

/// Mines at fixed positions, ignoring the requested mine count.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedMineGenerator<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl MineGenerator for FixedMineGenerator<'_> {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        let board = Board::from_mine_coords(config.size, self.mines)?;
        if board.mine_count() != config.mines {
            log::warn!(
                "Fixed layout has {} mines, requested {}",
                board.mine_count(),
                config.mines
            );
        }
        Ok(board)
    }
}
