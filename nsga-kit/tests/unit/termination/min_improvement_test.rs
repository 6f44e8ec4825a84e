use super::*;
use crate::termination::{CompositeTermination, MaxGeneration};

#[test]
fn can_detect_stall() {
    let termination = MinImprovement::new(3);
    let mut statistics = HeuristicStatistics::default();

    statistics.on_generation(true);
    statistics.on_generation(false);
    statistics.on_generation(false);
    assert!(!termination.is_termination(&statistics));

    statistics.on_generation(false);
    assert!(termination.is_termination(&statistics));
    assert_eq!(statistics.stall_generations, 3);

    statistics.on_generation(true);
    assert!(!termination.is_termination(&statistics));
    assert_eq!(statistics.generation, 5);
    assert!((statistics.improvement_all_ratio - 0.4).abs() < 1E-9);
}

#[test]
fn can_combine_terminations() {
    let termination = CompositeTermination::new(vec![Box::new(MaxGeneration::new(10)), Box::new(MinImprovement::new(2))]);
    let statistics = HeuristicStatistics { generation: 5, stall_generations: 1, ..HeuristicStatistics::default() };

    assert!(!termination.is_termination(&statistics));
    assert_eq!(termination.estimate(&statistics), 0.5);

    let statistics = HeuristicStatistics { generation: 5, stall_generations: 2, ..HeuristicStatistics::default() };
    assert!(termination.is_termination(&statistics));
}
