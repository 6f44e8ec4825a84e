use super::*;

#[test]
fn can_create_empty_allocation() {
    let allocation = Allocation::new(3);

    assert_eq!(allocation.counts(), &[0, 0, 0]);
    assert_eq!(allocation.total(), 0);
    assert_eq!(allocation.used().count(), 0);
}

#[test]
fn can_modify_counts() {
    let mut allocation = Allocation::from_counts(&[1, 0, 2]);

    allocation.increment(1);
    assert!(allocation.decrement(0));
    assert!(!allocation.decrement(0));
    allocation.set(2, 5);

    assert_eq!(allocation.counts(), &[0, 1, 5]);
    assert_eq!(allocation.total(), 6);
    assert_eq!(allocation.used().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn can_transfer_unit_between_types() {
    let mut allocation = Allocation::from_counts(&[1, 0]);

    assert!(allocation.transfer(0, 1));
    assert!(!allocation.transfer(0, 1));

    assert_eq!(allocation.counts(), &[0, 1]);
}

#[test]
fn can_use_allocation_as_hash_key() {
    let mut known = std::collections::HashSet::new();

    assert!(known.insert(Allocation::from_counts(&[1, 2])));
    assert!(!known.insert(Allocation::from_counts(&[1, 2])));
    assert!(known.insert(Allocation::from_counts(&[2, 1])));
}

#[test]
fn can_display_allocation() {
    assert_eq!(Allocation::from_counts(&[3, 0, 1]).to_string(), "[3,0,1]");
}

#[test]
fn can_store_more_types_than_inline_capacity() {
    let mut allocation = Allocation::new(12);
    allocation.set(11, 2);

    assert_eq!(allocation.len(), 12);
    assert_eq!(allocation.total(), 2);
}
