//! Contains logic to check allocation feasibility against a vehicle catalog.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use fleet_core::models::{DEMAND_TOLERANCE, group_into_buckets};
use fleet_core::prelude::*;
use std::collections::BTreeMap;

/// Checks allocation records against catalog rows. Returns all found violations:
/// - vehicle is not known in its bucket or bucket is unknown or invalid
/// - total count exceeds max vehicles of the bucket
/// - capacity does not cover bucket demand
/// - valid catalog bucket has no allocation records
pub fn check_allocation(catalog: Vec<VehicleRow>, records: &[AllocationRecord]) -> Result<(), Vec<String>> {
    let buckets = group_into_buckets(catalog)
        .into_iter()
        .map(|bucket| match bucket {
            Ok(bucket) => (bucket.key.clone(), Ok(bucket)),
            Err(invalid) => (invalid.key.clone(), Err(invalid.error.to_string())),
        })
        .collect::<BTreeMap<_, _>>();

    let allocated = records.iter().fold(BTreeMap::<_, Vec<&AllocationRecord>>::new(), |mut acc, record| {
        acc.entry(BucketKey::new(record.size.as_str(), record.tier.as_str())).or_default().push(record);
        acc
    });

    let errors = allocated
        .iter()
        .flat_map(|(key, records)| match buckets.get(key) {
            Some(Ok(bucket)) => check_bucket(bucket, records.as_slice()),
            Some(Err(err)) => vec![format!("bucket {key} is invalid in catalog: {err}")],
            None => vec![format!("bucket {key} is not present in catalog")],
        })
        .chain(
            buckets
                .iter()
                .filter(|(key, bucket)| bucket.is_ok() && !allocated.contains_key(*key))
                .map(|(key, _)| format!("bucket {key} has no allocated vehicles")),
        )
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_bucket(bucket: &BucketContext, records: &[&AllocationRecord]) -> Vec<String> {
    let mut errors = vec![];
    let mut allocation = Allocation::new(bucket.size());

    for record in records {
        match bucket.vehicles.iter().position(|vehicle| vehicle.id == record.vehicle) {
            Some(idx) => allocation.set(idx, allocation.get(idx) + record.count),
            None => errors.push(format!("vehicle '{}' is not eligible for bucket {}", record.vehicle, bucket.key)),
        }
    }

    let total = allocation.total();
    if total > bucket.max_vehicles {
        errors.push(format!("bucket {} uses {total} vehicles, max is {}", bucket.key, bucket.max_vehicles));
    }

    let capacity = bucket.capacity(&allocation);
    if !bucket.covers_demand(capacity) {
        errors.push(format!(
            "bucket {} capacity {capacity} does not cover demand {} with tolerance {DEMAND_TOLERANCE}",
            bucket.key, bucket.demand
        ));
    }

    errors
}
