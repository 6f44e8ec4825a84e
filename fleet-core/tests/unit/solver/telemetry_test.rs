use super::*;
use std::sync::{Arc, Mutex};

fn create_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(vec![]));
    let messages_copy = messages.clone();

    (Arc::new(move |msg: &str| messages_copy.lock().unwrap().push(msg.to_string())), messages)
}

fn run_generations(telemetry: &mut Telemetry, amount: usize) {
    let mut statistics = HeuristicStatistics::default();

    (0..amount).for_each(|idx| {
        let is_improvement = idx % 2 == 0;
        statistics.on_generation(is_improvement);

        telemetry.on_generation(
            &statistics,
            GenerationInfo { best_fitness: Some(idx as Float), front_size: 3, mutation_rate: 0.1, is_improvement },
            Timer::start(),
        );
    });

    telemetry.on_result(&statistics, Some(amount as Float));
}

#[test]
fn can_log_every_nth_generation() {
    let (logger, messages) = create_logger();
    let mut telemetry = Telemetry::new_with_prefix(TelemetryMode::OnlyLogging { logger, log_best: 2 }, "S1/D1");

    run_generations(&mut telemetry, 4);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|msg| msg.starts_with("S1/D1: ")));
    assert!(messages[0].contains("generation 2 took"));
    assert!(messages[1].contains("generation 4 took"));
    assert!(messages[2].contains("total generations: 4"));
    assert!(telemetry.get_metrics().is_none());
}

#[test]
fn can_track_metrics_without_logging() {
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyMetrics { track_best: 1 });

    run_generations(&mut telemetry, 5);

    let metrics = telemetry.get_metrics().expect("metrics should be tracked");
    assert_eq!(metrics.generations, 5);
    assert_eq!(metrics.evolution.len(), 5);
    assert_eq!(metrics.evolution.iter().filter(|generation| generation.is_improvement).count(), 3);
    assert_eq!(metrics.evolution[4].best_fitness, Some(4.));
}

#[test]
fn can_do_nothing_without_telemetry() {
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    run_generations(&mut telemetry, 3);

    assert!(telemetry.get_metrics().is_none());
}
