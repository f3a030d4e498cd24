use crate::{board::Board, new_types::BoardSize, solve::Strategy};
use log::{debug, info, warn};
use serde::Serialize;
use std::time::{Duration, Instant};

/// the outcome of timing both strategies on one board size
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BenchmarkRecord {
    pub size: BoardSize,
    pub recursive: Duration,
    pub iterative: Duration,
    /// the iterative board if there is one, otherwise the recursive one
    pub board: Option<Board>,
}

impl BenchmarkRecord {
    pub fn recursive_secs(&self) -> f64 {
        self.recursive.as_secs_f64()
    }
    pub fn iterative_secs(&self) -> f64 {
        self.iterative.as_secs_f64()
    }
    pub fn elapsed(&self, strategy: Strategy) -> Duration {
        match strategy {
            Strategy::Recursive => self.recursive,
            Strategy::Iterative => self.iterative,
        }
    }
}

/// one line of the timing series as written to csv
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct TimingRow {
    pub n: usize,
    pub recursive_secs: f64,
    pub iterative_secs: f64,
    pub solved: bool,
}

impl From<&BenchmarkRecord> for TimingRow {
    fn from(record: &BenchmarkRecord) -> Self {
        Self {
            n: record.size.get(),
            recursive_secs: record.recursive_secs(),
            iterative_secs: record.iterative_secs(),
            solved: record.board.is_some(),
        }
    }
}

/// runs `strategy` on its own fresh board, board allocation included
fn timed(strategy: Strategy, size: BoardSize) -> (Option<Board>, Duration) {
    let start = Instant::now();
    let board = strategy.solve(size);
    let elapsed = start.elapsed();
    debug!(
        "{strategy} n={} solved={} in {elapsed:?}",
        size.get(),
        board.is_some()
    );
    (board, elapsed)
}

/// prefer the iterative board, falling back to the recursive one
fn pick_board(recursive: Option<Board>, iterative: Option<Board>) -> Option<Board> {
    iterative.or(recursive)
}

/// time both strategies on one size
pub fn measure(size: BoardSize) -> BenchmarkRecord {
    let (recursive_board, recursive) = timed(Strategy::Recursive, size);
    let (iterative_board, iterative) = timed(Strategy::Iterative, size);
    let board = pick_board(recursive_board, iterative_board);
    if board.is_none() {
        warn!("no solution found for n={}", size.get());
    }
    BenchmarkRecord {
        size,
        recursive,
        iterative,
        board,
    }
}

/// time both strategies for every size from the minimum up to `max`, smallest first
pub fn sweep(max: BoardSize) -> Vec<BenchmarkRecord> {
    info!("benchmarking board sizes up to {}", max.get());
    BoardSize::sizes_up_to(max).map(measure).collect()
}
