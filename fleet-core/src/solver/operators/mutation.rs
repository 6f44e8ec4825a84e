#[cfg(test)]
#[path = "../../../tests/unit/solver/operators/mutation_test.rs"]
mod mutation_test;

use super::OperatorContext;
use crate::construction::repair;
use crate::models::{Allocation, BucketContext};
use nsga_kit::prelude::{Float, Random};

/// A max amount of attempts to get a feasible mutated allocation.
const MAX_ATTEMPTS: usize = 20;

/// Specifies whether mutation strategy has changed the allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Allocation was changed.
    Changed,
    /// Allocation was left as is.
    Unchanged,
}

impl MutationOutcome {
    fn or(self, other: MutationOutcome) -> MutationOutcome {
        match (self, other) {
            (MutationOutcome::Unchanged, MutationOutcome::Unchanged) => MutationOutcome::Unchanged,
            _ => MutationOutcome::Changed,
        }
    }
}

/// Keeps data available to a mutation strategy.
pub struct MutationContext<'a> {
    /// A bucket.
    pub bucket: &'a BucketContext,
    /// A current mutation rate.
    pub rate: Float,
    /// A random generator.
    pub random: &'a dyn Random,
}

/// A strategy which tries to change allocation in place.
pub trait MutationStrategy {
    /// Tries to apply strategy to the allocation.
    fn try_apply(&self, ctx: &MutationContext, allocation: &mut Allocation) -> MutationOutcome;
}

/// Adjusts each vehicle type with probability equal to mutation rate: adds a unit (within count
/// bound), removes a unit or resets the count to zero.
pub struct RandomAdjust;

impl MutationStrategy for RandomAdjust {
    fn try_apply(&self, ctx: &MutationContext, allocation: &mut Allocation) -> MutationOutcome {
        (0..allocation.len()).fold(MutationOutcome::Unchanged, |outcome, idx| {
            if !ctx.random.is_hit(ctx.rate) {
                return outcome;
            }

            let is_changed = match ctx.random.uniform_int(0, 2) {
                0 if allocation.total() < ctx.bucket.max_vehicles => {
                    allocation.increment(idx);
                    true
                }
                1 => allocation.decrement(idx),
                2 if allocation.get(idx) > 0 => {
                    allocation.set(idx, 0);
                    true
                }
                _ => false,
            };

            if is_changed { MutationOutcome::Changed } else { outcome }
        })
    }
}

/// Replaces a unit of the highest emission used vehicle type with a unit of the lowest emission
/// used one if the result stays feasible.
pub struct EmissionSwap {
    probability: Float,
}

impl EmissionSwap {
    /// Creates a new instance of `EmissionSwap`.
    pub fn new(probability: Float) -> Self {
        Self { probability }
    }
}

impl MutationStrategy for EmissionSwap {
    fn try_apply(&self, ctx: &MutationContext, allocation: &mut Allocation) -> MutationOutcome {
        if !ctx.random.is_hit(self.probability) {
            return MutationOutcome::Unchanged;
        }

        let used = ctx
            .bucket
            .sorted_indices(|v| v.emission_per_km)
            .into_iter()
            .filter(|&idx| allocation.get(idx) > 0)
            .collect::<Vec<_>>();

        match (used.first(), used.last()) {
            (Some(&low), Some(&high)) if low != high => {
                let mut candidate = allocation.clone();
                candidate.transfer(high, low);

                apply_if_feasible(ctx.bucket, allocation, candidate)
            }
            _ => MutationOutcome::Unchanged,
        }
    }
}

/// Replaces two units of a low range vehicle type with one unit of a higher range type if the
/// result stays feasible.
pub struct Consolidation {
    probability: Float,
}

impl Consolidation {
    /// Creates a new instance of `Consolidation`.
    pub fn new(probability: Float) -> Self {
        Self { probability }
    }
}

impl MutationStrategy for Consolidation {
    fn try_apply(&self, ctx: &MutationContext, allocation: &mut Allocation) -> MutationOutcome {
        if !ctx.random.is_hit(self.probability) {
            return MutationOutcome::Unchanged;
        }

        let by_range = ctx.bucket.sorted_indices(|v| v.yearly_range);
        let vehicles = &ctx.bucket.vehicles;

        for &high in by_range.iter().rev() {
            for &low in by_range.iter() {
                if allocation.get(low) < 2 || vehicles[high].yearly_range <= vehicles[low].yearly_range {
                    continue;
                }

                let mut candidate = allocation.clone();
                candidate.set(low, candidate.get(low) - 2);
                candidate.increment(high);

                if apply_if_feasible(ctx.bucket, allocation, candidate) == MutationOutcome::Changed {
                    return MutationOutcome::Changed;
                }
            }
        }

        MutationOutcome::Unchanged
    }
}

/// Adds or removes one unit of a random vehicle type. The result may be infeasible and is
/// left to repair.
pub struct ForcedChange;

impl MutationStrategy for ForcedChange {
    fn try_apply(&self, ctx: &MutationContext, allocation: &mut Allocation) -> MutationOutcome {
        if allocation.is_empty() {
            return MutationOutcome::Unchanged;
        }

        let idx = ctx.random.uniform_index(allocation.len());

        if !(ctx.random.is_head_not_tails() && allocation.decrement(idx)) {
            allocation.increment(idx);
        }

        MutationOutcome::Changed
    }
}

/// A mutation which applies strategies in order. When none of them changes the allocation, a
/// forced change is applied. Infeasible results are repaired.
pub struct Mutation {
    strategies: Vec<Box<dyn MutationStrategy + Send + Sync>>,
    fallback: Box<dyn MutationStrategy + Send + Sync>,
}

impl Mutation {
    /// Creates a new instance of `Mutation` with default strategies.
    pub fn new(emission_swap_probability: Float, consolidation_probability: Float) -> Self {
        Self::new_with_strategies(
            vec![
                Box::new(RandomAdjust),
                Box::new(EmissionSwap::new(emission_swap_probability)),
                Box::new(Consolidation::new(consolidation_probability)),
            ],
            Box::new(ForcedChange),
        )
    }

    /// Creates a new instance of `Mutation` with given strategies.
    pub fn new_with_strategies(
        strategies: Vec<Box<dyn MutationStrategy + Send + Sync>>,
        fallback: Box<dyn MutationStrategy + Send + Sync>,
    ) -> Self {
        Self { strategies, fallback }
    }

    /// Mutates the allocation with given rate. The result is always feasible.
    pub fn mutate(&self, ctx: &OperatorContext, rate: Float, allocation: &Allocation) -> Allocation {
        let mutation_ctx = MutationContext { bucket: ctx.bucket, rate, random: ctx.random };

        for _ in 0..MAX_ATTEMPTS {
            let mut mutated = allocation.clone();

            let outcome = self
                .strategies
                .iter()
                .fold(MutationOutcome::Unchanged, |acc, strategy| acc.or(strategy.try_apply(&mutation_ctx, &mut mutated)));

            if outcome == MutationOutcome::Unchanged {
                self.fallback.try_apply(&mutation_ctx, &mut mutated);
            }

            if ctx.bucket.is_feasible(&mutated) {
                return mutated;
            }

            let repaired = repair(ctx.bucket, &mutated);
            if ctx.bucket.is_feasible(&repaired) {
                return repaired;
            }
        }

        ctx.first_feasible([allocation, &repair(ctx.bucket, allocation)])
    }
}

fn apply_if_feasible(bucket: &BucketContext, allocation: &mut Allocation, candidate: Allocation) -> MutationOutcome {
    if bucket.is_feasible(&candidate) {
        *allocation = candidate;
        MutationOutcome::Changed
    } else {
        MutationOutcome::Unchanged
    }
}
