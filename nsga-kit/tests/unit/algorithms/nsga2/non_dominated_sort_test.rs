use super::*;
use crate::helpers::algorithms::nsga2::*;
use crate::utils::Float;

/// Creates solutions lying on `n_fronts` parallel diagonals with `n` solutions each.
fn create_layered_solutions(n: usize, n_fronts: usize) -> (Vec<Vec<Float>>, Vec<Vec<usize>>) {
    let solutions = (0..n_fronts)
        .flat_map(|layer| (0..n).map(move |i| vec![(layer + i) as Float, (layer + n - i) as Float]))
        .collect();
    let expected = (0..n_fronts).map(|layer| (layer * n..(layer + 1) * n).collect()).collect();

    (solutions, expected)
}

#[test]
fn can_compare_dominant_relations() {
    let objective = SliceMultiObjective::default();
    let a = vec![1., 2.];
    let b = vec![1., 3.];
    let c = vec![0., 2.];

    assert_eq!(Ordering::Less, objective.total_order(&a, &b));
    assert_eq!(Ordering::Less, objective.total_order(&c, &a));
    assert_eq!(Ordering::Less, objective.total_order(&c, &b));

    assert_eq!(Ordering::Greater, objective.total_order(&b, &a));
    assert_eq!(Ordering::Greater, objective.total_order(&a, &c));
    assert_eq!(Ordering::Greater, objective.total_order(&b, &c));
}

#[test]
fn can_compare_non_dominant_relations() {
    let objective = SliceMultiObjective::default();
    let a = vec![1., 2.];
    let b = vec![2., 1.];
    let inf = vec![Float::INFINITY, Float::INFINITY];

    assert_eq!(Ordering::Equal, objective.total_order(&a, &a));
    assert_eq!(Ordering::Equal, objective.total_order(&a, &b));
    assert_eq!(Ordering::Equal, objective.total_order(&b, &a));
    assert_eq!(Ordering::Equal, objective.total_order(&inf, &inf));
    assert_eq!(Ordering::Less, objective.total_order(&a, &inf));
}

#[test]
fn can_sort_into_fronts() {
    let objective = SliceMultiObjective::default();
    let solutions = vec![vec![1., 2.], vec![1., 2.], vec![2., 1.], vec![1., 3.], vec![0., 2.]];

    let f0 = non_dominated_sort(&solutions, &objective);
    assert_eq!(0, f0.rank());
    assert_eq!(&[2, 4], f0.members());

    let f1 = f0.next_front();
    assert_eq!(1, f1.rank());
    assert_eq!(&[0, 1], f1.members());

    let f2 = f1.next_front();
    assert_eq!(2, f2.rank());
    assert_eq!(&[3], f2.members());

    let f3 = f2.next_front();
    assert_eq!(3, f3.rank());
    assert!(f3.is_empty());
}

#[test]
fn can_keep_first_front_non_dominated() {
    let objective = SliceMultiObjective::default();
    let solutions = vec![
        vec![5., 5.],
        vec![1., 9.],
        vec![Float::INFINITY, Float::INFINITY],
        vec![3., 3.],
        vec![9., 1.],
        vec![3., 3.],
        vec![4., 8.],
    ];

    let f0 = non_dominated_sort(&solutions, &objective);
    let front = f0.iter().map(|(solution, _)| solution).collect::<Vec<_>>();

    assert_eq!(f0.len(), 4);
    front.iter().for_each(|a| {
        solutions.iter().for_each(|b| assert_ne!(objective.total_order(b, a), Ordering::Less));
    });
}

parameterized_test! {can_sort_n_fronts, (n, n_fronts), {
    can_sort_n_fronts_impl(n, n_fronts);
}}

can_sort_n_fronts! {
    case_01: (5, 5),
    case_02: (1, 3),
    case_03: (1_000, 5),
}

fn can_sort_n_fronts_impl(n: usize, n_fronts: usize) {
    let objective = SliceMultiObjective::default();
    let (solutions, expected_fronts) = create_layered_solutions(n, n_fronts);

    let mut f = non_dominated_sort(&solutions, &objective);
    for (expected_rank, expected_front) in expected_fronts.iter().enumerate() {
        assert_eq!(expected_rank, f.rank());
        assert_eq!(&expected_front[..], f.members());
        f = f.next_front();
    }
    assert!(f.is_empty());
}
