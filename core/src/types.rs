/// Single coordinate axis used for board side length and cursor positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Linear position of a cell, `row * size + col`.
pub type CellIndex = usize;

/// Two-dimensional coordinates `(x, y)`, `x` being the column.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn to_index((x, y): Coord2, size: Coord) -> CellIndex {
    y as CellIndex * size as CellIndex + x as CellIndex
}

pub const fn to_coords(index: CellIndex, size: Coord) -> Coord2 {
    let size = size as CellIndex;
    ((index % size) as Coord, (index / size) as Coord)
}

/// Row/column offsets `(d_row, d_col)` of the eight compass neighbors.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `(row, col)`, returning a value only when both axes stay
/// inside `0..size`. Checking the axes separately keeps the last column of one
/// row from touching the first column of the next.
fn apply_delta((row, col): (Coord, Coord), (d_row, d_col): (i8, i8), size: Coord) -> Option<(Coord, Coord)> {
    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// Positions adjacent to `index` on a `size`×`size` grid.
///
/// Corners yield 3 neighbors, other border cells 5, interior cells 8.
pub fn neighbors(index: CellIndex, size: Coord) -> NeighborIter {
    NeighborIter::new(index, size)
}

#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: (Coord, Coord),
    size: Coord,
    index: u8,
}

impl NeighborIter {
    fn new(center: CellIndex, size: Coord) -> Self {
        let (col, row) = to_coords(center, size);
        Self {
            center: (row, col),
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if let Some((row, col)) = next_item {
                return Some(to_index((col, row), self.size));
            }
        }
    }
}
