use crate::{
    board::{is_safe, Board, CellPos},
    new_types::BoardSize,
};
use std::{fmt, ops::ControlFlow};

/// Which backtracking search to run
///
/// both scan columns left to right and stop at the first complete board, so
/// for a given size they find the same placement
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Strategy {
    Recursive,
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Recursive, Strategy::Iterative];

    /// solve a fresh empty board of the given size
    pub fn solve(self, size: BoardSize) -> Option<Board> {
        match self {
            Strategy::Recursive => {
                let mut board = Board::empty(size);
                solve_recursive(&mut board, 0).then_some(board)
            }
            Strategy::Iterative => solve_iterative(size),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

/// Attempt to fill every row from `row` down with a safe queen
///
/// we recur so we don't have to keep our own stack for backtracking.
/// on success the board holds the solution, on failure every row from `row`
/// down is empty again
pub fn solve_recursive(board: &mut Board, row: usize) -> bool {
    let n = board.n();
    if row >= n {
        return true;
    }
    let found = (0..n).try_for_each(|column| {
        let pos = CellPos { row, column };
        if !is_safe(board, pos) {
            return ControlFlow::Continue(());
        }
        board.place(pos);
        if solve_recursive(board, row + 1) {
            // first solution wins, don't look at the other columns
            return ControlFlow::Break(());
        }
        board.clear(pos);
        ControlFlow::Continue(())
    });
    found.is_break()
}

/// Same search as `solve_recursive` driven by an explicit stack of placed queens
///
/// `None` means every column of the first row was exhausted
pub fn solve_iterative(size: BoardSize) -> Option<Board> {
    let n = size.get();
    let mut board = Board::empty(size);
    // one entry per filled row, top row first
    let mut path: Vec<CellPos> = Vec::with_capacity(n);
    let (mut row, mut start) = (0, 0);

    while row < n {
        debug_assert_eq!(path.len(), row);
        let next = (start..n)
            .map(|column| CellPos { row, column })
            .find(|&pos| is_safe(&board, pos));
        match next {
            Some(pos) => {
                board.place(pos);
                path.push(pos);
                row += 1;
                start = 0;
            }
            None => {
                // nothing left above us means the search is exhausted
                let last = path.pop()?;
                board.clear(last);
                row = last.row;
                start = last.column + 1;
            }
        }
    }
    Some(board)
}
