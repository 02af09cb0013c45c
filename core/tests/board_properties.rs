use std::collections::BTreeSet;

use sweeper_core::*;

fn expected_neighbor_count(index: CellIndex, size: Coord) -> usize {
    let (x, y) = to_coords(index, size);
    let last = size - 1;
    let on_x_edge = x == 0 || x == last;
    let on_y_edge = y == 0 || y == last;
    match (on_x_edge, on_y_edge) {
        (true, true) => 3,
        (true, false) | (false, true) => 5,
        (false, false) => 8,
    }
}

#[test]
fn neighbor_counts_match_cell_placement() {
    for difficulty in Difficulty::ALL {
        let size = difficulty.config().size;
        for index in 0..mult(size, size) as usize {
            let found: BTreeSet<_> = neighbors(index, size).collect();
            assert_eq!(found.len(), expected_neighbor_count(index, size), "size {size}, index {index}");
        }
    }
}

#[test]
fn neighbors_are_compass_steps_without_row_wrap() {
    for difficulty in Difficulty::ALL {
        let size = difficulty.config().size;
        for index in 0..mult(size, size) as usize {
            let (x, y) = to_coords(index, size);
            for neighbor in neighbors(index, size) {
                let (nx, ny) = to_coords(neighbor, size);
                assert_ne!(neighbor, index);
                assert!(x.abs_diff(nx) <= 1 && y.abs_diff(ny) <= 1, "{index} -> {neighbor} on {size}");
            }
        }
    }

    assert!(!neighbors(8, 9).any(|n| n == 9));
    assert!(!neighbors(9, 9).any(|n| n == 8));
}

#[test]
fn adjacency_is_symmetric() {
    let size = 16;
    for index in 0..256 {
        for neighbor in neighbors(index, size) {
            assert!(neighbors(neighbor, size).any(|n| n == index));
        }
    }
}

#[test]
fn generated_boards_hold_exact_mines_and_consistent_counts() {
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        for seed in 0..25 {
            let board = RandomMineGenerator::new(seed).generate(config).unwrap();

            let mines = board.cells().iter().filter(|cell| cell.has_mine()).count();
            assert_eq!(mines, config.mines as usize);

            for (index, cell) in board.cells().iter().enumerate() {
                let around = neighbors(index, config.size)
                    .filter(|&n| board[n].has_mine())
                    .count();
                assert_eq!(cell.adjacent_mines() as usize, around);
                assert_eq!(cell.neighbors().len(), expected_neighbor_count(index, config.size));
            }
        }
    }
}

#[test]
fn dense_board_placement_terminates() {
    let config = BoardConfig::new(4, 15).unwrap();
    let board = RandomMineGenerator::new(3).generate(config).unwrap();

    assert_eq!(board.mine_count(), 15);
    assert_eq!(board.safe_cell_count(), 1);
}
