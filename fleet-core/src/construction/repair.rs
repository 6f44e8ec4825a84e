#[cfg(test)]
#[path = "../../tests/unit/construction/repair_test.rs"]
mod repair_test;

use crate::models::{Allocation, BucketContext};

/// Repairs the allocation on best effort basis. Feasible allocation is returned unchanged, so
/// callers are expected to check feasibility of the result.
///
/// The steps are:
/// - remove units of the lowest range vehicle types while count bound is exceeded
/// - add units of the lowest emission vehicle types while demand is not covered
/// - swap low range units for high range ones while demand is still not covered
pub fn repair(bucket: &BucketContext, allocation: &Allocation) -> Allocation {
    let mut repaired = allocation.clone();

    let by_range = bucket.sorted_indices(|v| v.yearly_range);

    for &idx in by_range.iter() {
        let excess = repaired.total().saturating_sub(bucket.max_vehicles);
        let count = repaired.get(idx);

        repaired.set(idx, count - count.min(excess));
    }

    let is_short = |allocation: &Allocation| !bucket.covers_demand(bucket.capacity(allocation));

    if is_short(&repaired) {
        for idx in bucket.sorted_indices(|v| v.emission_per_km) {
            while is_short(&repaired) && repaired.total() < bucket.max_vehicles {
                repaired.increment(idx);
            }
        }
    }

    if is_short(&repaired) {
        'swap: for &high in by_range.iter().rev() {
            for &low in by_range.iter() {
                let vehicles = &bucket.vehicles;
                if high == low || vehicles[high].yearly_range <= vehicles[low].yearly_range {
                    continue;
                }

                while is_short(&repaired) && repaired.transfer(low, high) {}

                if !is_short(&repaired) {
                    break 'swap;
                }
            }
        }
    }

    repaired
}

/// Creates an allocation by adding units of vehicle types in given order while demand is not
/// covered and total count is below bound.
pub fn greedy_fill(bucket: &BucketContext, order: &[usize]) -> Allocation {
    let mut allocation = Allocation::new(bucket.size());

    for &idx in order {
        while !bucket.covers_demand(bucket.capacity(&allocation)) && allocation.total() < bucket.max_vehicles {
            allocation.increment(idx);
        }
    }

    allocation
}

/// Creates a basic allocation: the lowest emission vehicles are added until demand is covered
/// and the result is repaired.
pub fn create_basic_allocation(bucket: &BucketContext) -> Allocation {
    let mut allocation = Allocation::new(bucket.size());

    let lowest_emission =
        bucket.sorted_indices(|v| v.emission_per_km).into_iter().find(|&idx| bucket.vehicles[idx].yearly_range > 0.);

    if let Some(idx) = lowest_emission {
        allocation.set(idx, (bucket.demand / bucket.vehicles[idx].yearly_range).ceil() as u32);

        while !bucket.covers_demand(bucket.capacity(&allocation)) {
            allocation.increment(idx);
        }
    }

    repair(bucket, &allocation)
}
