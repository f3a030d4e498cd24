use crate::SizeError;
use nutype::nutype;

/// smallest board with a solution (2 and 3 have none, 1 is trivial)
pub const MIN_BOARD_SIZE: usize = 4;
/// largest board the benchmark will accept
pub const MAX_BOARD_SIZE: usize = 20;

/// The side length of a board the solvers are allowed to see
///
/// keep the bounds in sync with `MIN_BOARD_SIZE` and `MAX_BOARD_SIZE`
#[nutype(
    validate(greater_or_equal = 4, less_or_equal = 20),
    derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)
)]
pub struct BoardSize(usize);

impl BoardSize {
    /// validates `n` at the input boundary
    pub fn build(n: usize) -> Result<Self, SizeError> {
        Self::new(n).map_err(|_| {
            if n < MIN_BOARD_SIZE {
                SizeError::TooSmall(n)
            } else {
                SizeError::TooLarge(n)
            }
        })
    }
    /// every supported size from the minimum up to and including `max`
    pub fn sizes_up_to(max: BoardSize) -> impl Iterator<Item = Self> {
        (MIN_BOARD_SIZE..=max.into_inner()).map_while(|n| Self::new(n).ok())
    }
    pub fn get(&self) -> usize {
        self.into_inner()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_rejects_sizes_without_solutions() {
        assert_eq!(BoardSize::build(1), Err(SizeError::TooSmall(1)));
        assert_eq!(BoardSize::build(2), Err(SizeError::TooSmall(2)));
        assert_eq!(BoardSize::build(3), Err(SizeError::TooSmall(3)));
        assert_eq!(BoardSize::build(0), Err(SizeError::TooSmall(0)));
    }
    #[test]
    fn build_rejects_sizes_above_cap() {
        assert_eq!(
            BoardSize::build(MAX_BOARD_SIZE + 1),
            Err(SizeError::TooLarge(MAX_BOARD_SIZE + 1))
        );
    }
    #[test]
    fn bounds_match_constants() {
        assert_eq!(BoardSize::build(MIN_BOARD_SIZE).unwrap().get(), MIN_BOARD_SIZE);
        assert_eq!(BoardSize::build(MAX_BOARD_SIZE).unwrap().get(), MAX_BOARD_SIZE);
    }
    #[test]
    fn sizes_up_to_is_increasing_and_inclusive() {
        let max = BoardSize::build(8).unwrap();
        let sizes: Vec<_> = BoardSize::sizes_up_to(max).map(|s| s.get()).collect();
        assert_eq!(sizes, vec![4, 5, 6, 7, 8]);
    }
    #[test]
    fn sizes_up_to_minimum_is_single() {
        let max = BoardSize::build(4).unwrap();
        assert_eq!(BoardSize::sizes_up_to(max).count(), 1);
    }
}
