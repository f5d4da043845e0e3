use std::error::Error;

/// A pure source of field rows.
///
/// `compute_row` must depend only on `self` and `row`: the dispatcher calls it
/// from many threads at once, in any order, and places each result by index.
pub trait RowComputer: Sync {
    type Failure: Error + Send + Sync + 'static;

    fn width(&self) -> u32;

    fn rows(&self) -> u32;

    fn compute_row(&self, row: u32) -> Result<Vec<u32>, Self::Failure>;
}
