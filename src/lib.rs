pub mod bench;
pub mod board;
mod errors;
pub mod new_types;
pub mod solve;

pub use bench::{measure, sweep, BenchmarkRecord, TimingRow};
pub use board::{is_safe, Board, CellPos};
pub use errors::SizeError;
pub use new_types::{BoardSize, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use solve::{solve_iterative, solve_recursive, Strategy};
