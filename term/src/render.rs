use std::io::{self, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use sweeper_core::{Cell, CellIndex, Coord, Difficulty, GameSession, GameState, RevealState};

pub const HIDDEN_GLYPH: char = '.';
pub const FLAG_GLYPH: char = '@';
pub const MINE_GLYPH: char = '*';

const FRAME: (Color, Color) = (Color::Cyan, Color::Black);
const REVEALED: (Color, Color) = (Color::Green, Color::Black);
const COVERED: (Color, Color) = (Color::Red, Color::Blue);
const EXPLODED: (Color, Color) = (Color::Black, Color::Red);

/// Character drawn for `cell`. Mines under hidden cells only show once
/// `show_mines` is set, after the game ended.
pub fn glyph(cell: &Cell, show_mines: bool) -> char {
    match cell.state() {
        RevealState::Hidden if show_mines && cell.has_mine() => MINE_GLYPH,
        RevealState::Hidden => HIDDEN_GLYPH,
        RevealState::Flagged => FLAG_GLYPH,
        RevealState::Revealed => match cell.adjacent_mines() {
            0 => ' ',
            count => char::from(b'0' + count),
        },
    }
}

/// `+-----+` line framing a board of side `size`.
pub fn horizontal_line(size: Coord) -> String {
    format!("+{}+", "-".repeat(size as usize))
}

fn colors(cell: &Cell, index: CellIndex, triggered: Option<CellIndex>) -> (Color, Color) {
    if triggered == Some(index) {
        EXPLODED
    } else if cell.is_revealed() {
        REVEALED
    } else {
        COVERED
    }
}

fn status_line(session: &GameSession, difficulty: Difficulty) -> String {
    let board = session.board();
    let (x, y) = session.cursor();
    format!(
        "{difficulty}  mines left: {}  x: {x} y: {y}",
        board.mines_left()
    )
}

fn help_line(state: GameState) -> &'static str {
    match state {
        GameState::Won => "Board cleared! Press any key to exit.",
        GameState::Lost => "Boom! Press any key to exit.",
        GameState::Ready | GameState::Active => {
            "arrows: move  enter: reveal  space: flag  l: log cell  q: quit"
        }
    }
}

/// Draws the whole frame and leaves the terminal cursor on the selected cell.
pub fn draw<W: Write>(out: &mut W, session: &GameSession, difficulty: Difficulty) -> io::Result<()> {
    let board = session.board();
    let size = board.size();
    let show_mines = session.is_over();
    let triggered = session.triggered_mine();
    let frame = horizontal_line(size);
    let grid = board.grid().map_err(io::Error::other)?;

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetForegroundColor(FRAME.0),
        SetBackgroundColor(FRAME.1),
        Print(&frame)
    )?;

    for (row, cells) in grid.rows().into_iter().enumerate() {
        queue!(
            out,
            MoveTo(0, row as u16 + 1),
            SetForegroundColor(FRAME.0),
            SetBackgroundColor(FRAME.1),
            Print('|')
        )?;
        for (col, cell) in cells.iter().enumerate() {
            let (fg, bg) = colors(cell, row * size as usize + col, triggered);
            queue!(out, SetForegroundColor(fg), SetBackgroundColor(bg), Print(glyph(cell, show_mines)))?;
        }
        queue!(
            out,
            SetForegroundColor(FRAME.0),
            SetBackgroundColor(FRAME.1),
            Print('|')
        )?;
    }

    let below = size as u16 + 1;
    queue!(
        out,
        MoveTo(0, below),
        Print(&frame),
        ResetColor,
        MoveTo(0, below + 1),
        Print(status_line(session, difficulty)),
        MoveTo(0, below + 2),
        Print(help_line(session.state())),
    )?;

    let (x, y) = session.cursor();
    queue!(out, MoveTo(x as u16 + 1, y as u16 + 1), Show)?;
    out.flush()
}
