use crate::new_types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use thiserror::Error;

/// reasons a requested board size is rejected before any solver runs
#[derive(Debug, Error, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum SizeError {
    #[error("board size {0} is below the minimum of {MIN_BOARD_SIZE}")]
    TooSmall(usize),
    #[error("board size {0} is above the supported maximum of {MAX_BOARD_SIZE}")]
    TooLarge(usize),
}
