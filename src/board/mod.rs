pub(crate) mod safety;

use crate::new_types::BoardSize;
use std::{collections::HashSet, fmt};

pub use safety::is_safe;

/// a (row, column) location on a `Board`, 0 indexed from the top left
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct CellPos {
    pub row: usize,
    pub column: usize,
}

/// Represents the N by N board
///
/// each cell only records whether a queen sits on it
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Vec<bool>>,
}

impl From<Board> for Vec<Vec<bool>> {
    fn from(value: Board) -> Self {
        value.cells
    }
}

impl Board {
    pub fn empty(size: BoardSize) -> Self {
        let n = size.get();
        Self {
            size,
            cells: vec![vec![false; n]; n],
        }
    }
    pub fn size(&self) -> BoardSize {
        self.size
    }
    /// side length as a plain number
    pub fn n(&self) -> usize {
        self.size.get()
    }
    pub fn has_queen(&self, pos: CellPos) -> bool {
        self.cells[pos.row][pos.column]
    }
    pub(crate) fn place(&mut self, pos: CellPos) {
        self.cells[pos.row][pos.column] = true;
    }
    pub(crate) fn clear(&mut self, pos: CellPos) {
        self.cells[pos.row][pos.column] = false;
    }
    /// positions of every queen, top row first
    pub fn queens(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &queen)| queen)
                .map(move |(column, _)| CellPos { row, column })
        })
    }
    /// the column of the first queen in each row, `None` for an empty row
    pub fn queen_columns(&self) -> Vec<Option<usize>> {
        self.cells
            .iter()
            .map(|row| row.iter().position(|&queen| queen))
            .collect()
    }
    pub fn is_empty(&self) -> bool {
        self.queens().next().is_none()
    }
    /// checks the board is a finished placement
    ///
    /// ## Rules
    ///
    /// - every row has exactly one queen
    /// - every column has exactly one queen
    /// - no two queens share a diagonal
    pub fn is_solution(&self) -> bool {
        let n = self.n();
        let queens: Vec<_> = self.queens().collect();
        if queens.len() != n {
            return false;
        }
        let mut rows = HashSet::new();
        let mut columns = HashSet::new();
        let mut falling = HashSet::new();
        let mut rising = HashSet::new();
        queens.into_iter().all(|CellPos { row, column }| {
            rows.insert(row)
                && columns.insert(column)
                // row - column, shifted so it stays unsigned
                && falling.insert(row + n - column)
                && rising.insert(row + column)
        })
    }
    /// the left-right reflection of this board
    pub fn mirrored(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Self {
            size: self.size,
            cells,
        }
    }
    /// rows of 0/1 flags, used for csv export
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&queen| u8::from(queen)).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    /// queens are `Q`, light squares `.` and dark squares `:`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<_> = row
                .iter()
                .enumerate()
                .map(|(c, &queen)| match (queen, (r + c) % 2) {
                    (true, _) => "Q",
                    (false, 0) => ".",
                    (false, _) => ":",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod macros {
    macro_rules! size {
        ($n:expr) => {
            crate::new_types::BoardSize::build($n).unwrap()
        };
    }
    macro_rules! pos {
        ($row:expr, $column:expr) => {
            crate::board::CellPos {
                row: $row,
                column: $column,
            }
        };
    }
    /// `board!(n; [c0, c1, ...])` puts a queen in row i at column ci
    macro_rules! board {
        ($n:expr; [$( $column:expr ),*]) => {{
            #[allow(unused_mut)]
            let mut board = crate::board::Board::empty(size!($n));
            let columns: Vec<usize> = vec![$($column),*];
            for (row, column) in columns.into_iter().enumerate() {
                board.place(pos!(row, column));
            }
            board
        }};
    }
    pub(crate) use {board, pos, size};
}
