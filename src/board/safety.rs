use super::{Board, CellPos};

/// whether a queen at `pos` is attacked by any queen in the rows above it
///
/// rows below `pos.row` are never inspected: both solvers fill rows top to
/// bottom, so they are always empty when this is asked
pub fn is_safe(board: &Board, pos: CellPos) -> bool {
    let CellPos { row, column } = pos;
    let n = board.n();
    let above = (0..row).rev();

    let column_clear = (0..row).all(|r| !board.has_queen(CellPos { row: r, column }));
    // up-left: row and column both decrease
    let up_left_clear = above
        .clone()
        .zip((0..column).rev())
        .all(|(row, column)| !board.has_queen(CellPos { row, column }));
    // up-right: row decreases while column increases
    let up_right_clear = above
        .zip(column + 1..n)
        .all(|(row, column)| !board.has_queen(CellPos { row, column }));

    column_clear && up_left_clear && up_right_clear
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::macros::*;

    #[test]
    fn anything_is_safe_on_empty_board() {
        let board = board!(5; []);
        assert!((0..5).all(|c| is_safe(&board, pos!(0, c))));
    }
    #[test]
    fn same_column_is_unsafe() {
        let board = board!(6; [2]);
        assert!(!is_safe(&board, pos!(4, 2)));
    }
    #[test]
    fn up_left_diagonal_is_unsafe() {
        let board = board!(6; [1]);
        assert!(!is_safe(&board, pos!(3, 4)));
    }
    #[test]
    fn up_right_diagonal_is_unsafe() {
        let board = board!(6; [5]);
        assert!(!is_safe(&board, pos!(2, 3)));
    }
    #[test]
    fn knight_move_is_safe() {
        let board = board!(6; [0]);
        assert!(is_safe(&board, pos!(1, 2)));
        assert!(is_safe(&board, pos!(2, 1)));
    }
    #[test]
    fn adjacent_rows_block_neighbours() {
        let board = board!(4; [1]);
        let safe: Vec<_> = (0..4).filter(|&c| is_safe(&board, pos!(1, c))).collect();
        assert_eq!(safe, vec![3]);
    }
    #[test]
    fn verdict_is_mirrored_with_board() {
        let partials = [
            board!(8; [0, 4, 7]),
            board!(8; [2, 5]),
            board!(6; [1, 3, 5]),
            board!(5; [4]),
        ];
        for board in partials {
            let n = board.n();
            let mirror = board.mirrored();
            let row = board.queens().count();
            for column in 0..n {
                assert_eq!(
                    is_safe(&board, pos!(row, column)),
                    is_safe(&mirror, pos!(row, n - 1 - column)),
                    "verdict changed under reflection at column {column} of\n{board}"
                );
            }
        }
    }
}
