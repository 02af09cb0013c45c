use sweeper_core::*;

/// Beginner board, mines in the middle column plus one in the bottom-right
/// corner:
///
/// ```text
/// . . . 2 * 2 . . .
/// . . . 3 * 3 . . .
/// . . . 3 * 3 . . .
/// . . . 3 * 3 . . .
/// . . . 3 * 3 . . .
/// . . . 3 * 3 . . .
/// . . . 3 * 3 . . .
/// . . . 3 * 3 . 1 1
/// . . . 2 * 2 . 1 *
/// ```
fn wall_layout() -> Board {
    let mut mines: Vec<Coord2> = (0..9).map(|y| (4, y)).collect();
    mines.push((8, 8));
    Board::from_mine_coords(9, &mines).unwrap()
}

fn revealed(board: &Board) -> usize {
    board.cells().iter().filter(|cell| cell.is_revealed()).count()
}

#[test]
fn layout_matches_beginner_preset() {
    let board = wall_layout();

    assert_eq!(board.config(), Difficulty::Beginner.config());
}

#[test]
fn clicking_left_zero_region_reveals_exactly_that_region() {
    let mut session = GameSession::new(wall_layout());

    assert_eq!(session.activate().unwrap(), RevealOutcome::Revealed);

    // three zero columns plus the numbered column bordering the wall
    assert_eq!(revealed(session.board()), 36);
    assert_eq!(session.board().revealed_count(), 36);
    for (index, cell) in session.board().cells().iter().enumerate() {
        let (x, _) = to_coords(index, 9);
        assert_eq!(cell.is_revealed(), x <= 3, "cell {index}");
    }
}

#[test]
fn clicking_right_zero_region_stops_at_corner_mine_border() {
    let mut session = GameSession::new(wall_layout());
    session.set_cursor((8, 0)).unwrap();

    assert_eq!(session.activate().unwrap(), RevealOutcome::Revealed);

    // 23 zero cells, the numbered column at x = 5, and three cells around the corner mine
    assert_eq!(revealed(session.board()), 35);
    assert!(session.board()[(7, 7)].is_revealed());
    assert!(session.board()[(8, 8)].is_hidden());
}

#[test]
fn clearing_both_regions_wins() {
    let mut session = GameSession::new(wall_layout());

    session.activate().unwrap();
    session.set_cursor((8, 0)).unwrap();

    assert_eq!(session.activate().unwrap(), RevealOutcome::Won);
    assert_eq!(session.state(), GameState::Won);
    assert!(session.board().is_cleared());
}

#[test]
fn flood_twice_is_a_noop() {
    let mut board = wall_layout();

    assert_eq!(board.flood_reveal(0), RevealOutcome::Revealed);
    let snapshot = board.clone();

    assert_eq!(board.flood_reveal(0), RevealOutcome::NoChange);
    assert_eq!(board.flood_reveal(20), RevealOutcome::NoChange);
    assert_eq!(board, snapshot);
}

#[test]
fn chord_next_to_wall_reveals_far_side() {
    let mut session = GameSession::new(wall_layout());
    session.set_cursor((5, 4)).unwrap();
    session.activate().unwrap();
    assert_eq!(session.current_cell().adjacent_mines(), 3);

    for y in 3..=5 {
        session.set_cursor((4, y)).unwrap();
        session.toggle_flag().unwrap();
    }
    session.set_cursor((5, 4)).unwrap();

    assert_eq!(session.activate().unwrap(), RevealOutcome::Revealed);
    assert!(session.board()[(6, 4)].is_revealed());
    assert!(session.board()[(4, 4)].is_flagged());
    assert_eq!(session.board().revealed_count(), 35);
}

#[test]
fn chord_with_missing_flags_is_a_noop() {
    let mut session = GameSession::new(wall_layout());
    session.set_cursor((5, 4)).unwrap();
    session.activate().unwrap();
    session.set_cursor((4, 4)).unwrap();
    session.toggle_flag().unwrap();
    session.set_cursor((5, 4)).unwrap();

    let before = session.board().clone();
    assert_eq!(session.activate().unwrap(), RevealOutcome::NoChange);
    assert_eq!(session.board(), &before);
}

#[test]
fn chord_with_wrong_flag_loses() {
    let mut session = GameSession::new(wall_layout());
    session.set_cursor((5, 4)).unwrap();
    session.activate().unwrap();

    session.set_cursor((4, 3)).unwrap();
    session.toggle_flag().unwrap();
    session.set_cursor((4, 4)).unwrap();
    session.toggle_flag().unwrap();
    session.set_cursor((5, 3)).unwrap();
    session.toggle_flag().unwrap();
    session.set_cursor((5, 4)).unwrap();

    assert_eq!(session.activate().unwrap(), RevealOutcome::HitMine);
    assert_eq!(session.triggered_mine(), Some(5 * 9 + 4));
    assert!(session.is_over());
}
