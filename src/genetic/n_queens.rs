//! Fitness and helpers for evolving N-queens boards.
//!
//! A board is one queen per column; an individual lists the row of each
//! column's queen. Fitness counts the queen pairs that leave each other
//! alone, so a full solution for n queens scores n * (n - 1) / 2, which is
//! 28 on the classic eight-queens board.

use itertools::Itertools;
use rand::Rng;

/// Counts queen pairs attacking neither by row nor by diagonal. Columns
/// differ by construction.
pub fn non_attacking_pairs(state: &[u8]) -> u32 {
    state
        .iter()
        .enumerate()
        .tuple_combinations()
        .filter(|&((i, &a), (j, &b))| a != b && i.abs_diff(j) != usize::from(a.abs_diff(b)))
        .count() as u32
}

/// `count` random boards of `n` queens.
pub fn random_states<R: Rng + ?Sized>(rng: &mut R, n: u8, count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| (0..n).map(|_| rng.gen_range(0..n)).collect())
        .collect()
}

/// The gene pool for boards of `n` queens: every row index.
pub fn genes(n: u8) -> Vec<u8> {
    (0..n).collect()
}
