use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random placement driven by a seeded [`SmallRng`], so the same seed
/// always yields the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let board = Board::with_rng(config, &mut rng)?;

        // double check mine count
        let count = board.mine_positions().count();
        if count != config.mines as usize {
            log::warn!(
                "Generated board mine count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn same_seed_same_board() {
        let config = Difficulty::Intermediate.config();

        let first = RandomMineGenerator::new(42).generate(config).unwrap();
        let second = RandomMineGenerator::new(42).generate(config).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.mine_count(), 40);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let config = Difficulty::Expert.config();

        let layouts: Vec<Vec<CellIndex>> = (0..4)
            .map(|seed| {
                let board = RandomMineGenerator::new(seed).generate(config).unwrap();
                board.mine_positions().collect()
            })
            .collect();

        assert!(layouts.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn fixed_generator_uses_given_positions() {
        let mines = [(0, 0), (1, 1)];
        let board = FixedMineGenerator::new(&mines)
            .generate(BoardConfig::new_unchecked(3, 2))
            .unwrap();

        assert_eq!(board.mine_positions().collect::<Vec<_>>(), [0, 4]);
    }
}
