use super::*;

#[test]
fn can_collect_in_source_order() {
    let source = (0..100).collect::<Vec<usize>>();

    let result = parallel_into_collect(source, |item| item * 2);

    assert_eq!(result, (0..100).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).expect("cannot create pool");

    let result = pool.execute(|| parallel_into_collect(vec![3, 2, 1], |item| item + 1));

    assert_eq!(result, vec![4, 3, 2]);
}
