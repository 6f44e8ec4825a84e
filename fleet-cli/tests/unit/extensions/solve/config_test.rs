use super::*;
use std::fs::File;

fn read_sample_config() -> Config {
    let file = File::open("data/config.json").expect("cannot read config from file");

    read_config(BufReader::new(file)).expect("cannot read config")
}

#[test]
fn can_read_full_config() {
    let config = read_sample_config();

    let evolution = config.evolution.as_ref().expect("no evolution config");
    assert_eq!(evolution.population_size, Some(40));
    assert_eq!(evolution.tournament_size, Some(3));
    assert_eq!(evolution.crossover_attempts, Some(10));
    assert_eq!(
        evolution.mutation,
        Some(MutationType::Decay { initial: Some(0.3), decay_ratio: Some(0.7), min: Some(0.02) })
    );
    assert_eq!(evolution.desirability, Some(DesirabilityType::Score));

    assert_eq!(config.objective, Some(ObjectiveType::Tradeoff { cost_weight: Some(0.6), emission_weight: Some(0.4) }));

    let termination = config.termination.as_ref().expect("no termination config");
    assert_eq!(termination.max_generations, Some(30));
    assert_eq!(termination.max_time, None);
    assert_eq!(termination.stall_generations, Some(10));

    let environment = config.environment.as_ref().expect("no environment config");
    assert_eq!(environment.seed, Some(42));
    assert_eq!(environment.threads, Some(2));

    assert!(!config.is_logging_enabled());
}

#[test]
fn can_create_builder_from_full_config() {
    let config = read_sample_config();

    let solver = create_builder_from_config(&config, create_silent_logger()).build().expect("cannot build solver");

    let solver_config = solver.config();
    assert_eq!(solver_config.population_size, 40);
    assert_eq!(solver_config.objective, ObjectiveVariant::Tradeoff { cost_weight: 0.6, emission_weight: 0.4 });
    assert_eq!(solver_config.termination.max_generations, 30);
    assert_eq!(solver_config.termination.stall_generations, Some(10));
    assert_eq!(solver_config.mutation, MutationSchedule::LinearDecay { initial: 0.3, decay_ratio: 0.7, min_rate: 0.02 });
}

#[test]
fn can_create_builder_from_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).expect("cannot read config");

    let solver = create_builder_from_config(&config, create_silent_logger()).build().expect("cannot build solver");

    assert_eq!(solver.config(), &SolverConfig::default());
}

#[test]
fn can_read_objective_and_mutation_types() {
    let json = r#"{
      "evolution": { "mutation": { "type": "constant", "rate": 0.1 }, "desirability": "rank" },
      "objective": { "type": "emission" },
      "termination": { "stallGenerations": 0 }
    }"#;
    let config = read_config(BufReader::new(json.as_bytes())).expect("cannot read config");

    let solver = create_builder_from_config(&config, create_silent_logger()).build().expect("cannot build solver");

    let solver_config = solver.config();
    assert_eq!(solver_config.mutation, MutationSchedule::Constant { rate: 0.1 });
    assert_eq!(solver_config.desirability, DesirabilitySource::Rank);
    assert_eq!(solver_config.objective, ObjectiveVariant::EmissionMinimizing);
    assert_eq!(solver_config.termination.stall_generations, None);
}

#[test]
fn can_reject_invalid_values() {
    let json = r#"{ "evolution": { "populationSize": 0 } }"#;
    let config = read_config(BufReader::new(json.as_bytes())).expect("cannot read config");

    let result = create_builder_from_config(&config, create_silent_logger()).build();

    assert!(result.is_err());
}

#[test]
fn can_reject_unknown_objective_type() {
    let json = r#"{ "objective": { "type": "speed" } }"#;

    let result = read_config(BufReader::new(json.as_bytes()));

    assert!(result.err().is_some_and(|err| err.to_string().starts_with("cannot deserialize config")));
}
