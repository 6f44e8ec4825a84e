#[cfg(test)]
#[path = "../../../tests/unit/solver/operators/selection_test.rs"]
mod selection_test;

use nsga_kit::prelude::{Float, Random, compare_floats};
use std::cmp::Ordering;

/// Runs a tournament among `size` distinct random members and returns index of the member with
/// the highest fitness. The first drawn member wins ties.
pub fn tournament(fitness: &[Float], size: usize, random: &dyn Random) -> usize {
    assert!(!fitness.is_empty());

    let size = size.clamp(1, fitness.len());
    let mut indices = (0..fitness.len()).collect::<Vec<_>>();

    // partial Fisher-Yates shuffle: the first `size` entries are the participants
    (0..size).for_each(|i| {
        let j = random.uniform_int(i as i32, indices.len() as i32 - 1) as usize;
        indices.swap(i, j);
    });

    indices.iter().take(size).copied().fold(indices[0], |best, idx| {
        match compare_floats(fitness[idx], fitness[best]) {
            Ordering::Greater => idx,
            _ => best,
        }
    })
}
