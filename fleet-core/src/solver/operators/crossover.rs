#[cfg(test)]
#[path = "../../../tests/unit/solver/operators/crossover_test.rs"]
mod crossover_test;

use super::OperatorContext;
use crate::construction::repair;
use crate::models::Allocation;

/// Produces two children from two parents using cut point crossover: one cut for two vehicle types,
/// two distinct cuts for three and more. With one vehicle type children are copies of parents.
///
/// Cuts are resampled up to `attempts` times till both children are feasible. Otherwise, children
/// are repaired and, if still infeasible, replaced by a feasible parent (own parent first) or by
/// basic allocation.
pub fn crossover(
    ctx: &OperatorContext,
    parents: (&Allocation, &Allocation),
    attempts: usize,
) -> (Allocation, Allocation) {
    let (left, right) = parents;
    let size = left.len();

    if size < 2 {
        return (ctx.first_feasible([left, right]), ctx.first_feasible([right, left]));
    }

    let mut children = exchange(left, right, get_cuts(ctx, size));

    for _ in 1..attempts.max(1) {
        if ctx.bucket.is_feasible(&children.0) && ctx.bucket.is_feasible(&children.1) {
            return children;
        }

        children = exchange(left, right, get_cuts(ctx, size));
    }

    let first = repair(ctx.bucket, &children.0);
    let second = repair(ctx.bucket, &children.1);

    (ctx.first_feasible([&first, left, right]), ctx.first_feasible([&second, right, left]))
}

/// Returns a half open range of indices taken from the other parent.
fn get_cuts(ctx: &OperatorContext, size: usize) -> (usize, usize) {
    let last = size as i32 - 1;

    if size == 2 {
        return (ctx.random.uniform_int(1, last) as usize, size);
    }

    let first = ctx.random.uniform_int(1, last);
    let second = ctx.random.uniform_int(1, last - 1);
    let second = if second >= first { second + 1 } else { second };

    (first.min(second) as usize, first.max(second) as usize)
}

fn exchange(left: &Allocation, right: &Allocation, cuts: (usize, usize)) -> (Allocation, Allocation) {
    let (start, end) = cuts;

    let mut first = left.clone();
    let mut second = right.clone();

    (start..end).for_each(|idx| {
        first.set(idx, right.get(idx));
        second.set(idx, left.get(idx));
    });

    (first, second)
}
