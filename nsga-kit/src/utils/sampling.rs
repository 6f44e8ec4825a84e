#[cfg(test)]
#[path = "../../tests/unit/utils/sampling_test.rs"]
mod sampling_test;

use crate::utils::{Float, Random};

/// Samples indices proportionally to their weights using explicit cumulative distribution.
///
/// The same random values always map to the same indices, independently of the underlying
/// random generator implementation.
#[derive(Clone, Debug)]
pub struct CumulativeSampler {
    cumulative: Vec<Float>,
}

impl CumulativeSampler {
    /// Creates a new sampler. Negative or non finite weights are treated as zero. When all weights
    /// are zero, the distribution is uniform. Returns `None` for empty weights.
    pub fn new(weights: &[Float]) -> Option<Self> {
        if weights.is_empty() {
            return None;
        }

        let sanitize = |weight: Float| if weight.is_finite() && weight > 0. { weight } else { 0. };
        let total = weights.iter().copied().map(sanitize).sum::<Float>();
        let is_uniform = !total.is_finite() || total <= 0.;

        let cumulative = weights
            .iter()
            .scan(0., |acc, &weight| {
                *acc += if is_uniform { 1. } else { sanitize(weight) };
                Some(*acc)
            })
            .collect();

        Some(Self { cumulative })
    }

    /// Returns amount of entries in the distribution.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Returns true if distribution has no entries. Never happens for constructed instance.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Returns a probability of the entry with given index.
    pub fn probability(&self, idx: usize) -> Float {
        let previous = if idx == 0 { 0. } else { self.cumulative[idx - 1] };

        (self.cumulative[idx] - previous) / self.total()
    }

    /// Samples an index proportionally to its weight.
    pub fn sample(&self, random: &dyn Random) -> usize {
        let value = random.uniform_real(0., self.total());
        let idx = self.cumulative.partition_point(|&c| c <= value);

        idx.min(self.cumulative.len() - 1)
    }

    fn total(&self) -> Float {
        self.cumulative.last().copied().unwrap_or(0.)
    }
}
