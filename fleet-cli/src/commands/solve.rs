#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction};
use fleet_cli::extensions::import::read_catalog;
use fleet_cli::extensions::solve::config::*;
use fleet_cli::extensions::solve::formats::*;
use fleet_cli::fleet_core::prelude::*;
use fleet_cli::get_label_from_path;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const INPUT_ARG_NAME: &str = "INPUT";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_DIR_ARG_NAME: &str = "out-dir";
const DIAGNOSTICS_ARG_NAME: &str = "diagnostics";
const SUMMARY_ARG_NAME: &str = "summary";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const TIME_ARG_NAME: &str = "max-time";
const POPULATION_ARG_NAME: &str = "population-size";
const OBJECTIVE_ARG_NAME: &str = "objective";
const COST_WEIGHT_ARG_NAME: &str = "cost-weight";
const EMISSION_WEIGHT_ARG_NAME: &str = "emission-weight";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds fleet allocation for each bucket of the vehicle catalog")
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets vehicle catalog csv files, a trailing _YYYY of the file name is used as label")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for allocation output, default is stdout")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false)
                .conflicts_with(OUT_DIR_ARG_NAME),
        )
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies output directory, required when several input files are given")
                .long(OUT_DIR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DIAGNOSTICS_ARG_NAME)
                .help("Specifies path to file for bucket diagnostics in json")
                .long(DIAGNOSTICS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SUMMARY_ARG_NAME)
                .help("Specifies path to file for run summary in csv")
                .long(SUMMARY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations per bucket")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of one bucket in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POPULATION_ARG_NAME)
                .help("Specifies population size")
                .short('p')
                .long(POPULATION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OBJECTIVE_ARG_NAME)
                .help("Specifies objective variant")
                .long(OBJECTIVE_ARG_NAME)
                .required(false)
                .value_parser(["tradeoff", "cost", "emission"]),
        )
        .arg(
            Arg::new(COST_WEIGHT_ARG_NAME)
                .help("Specifies cost weight of tradeoff objective")
                .long(COST_WEIGHT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(EMISSION_WEIGHT_ARG_NAME)
                .help("Specifies emission weight of tradeoff objective")
                .long(EMISSION_WEIGHT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to get repeatable results")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let inputs = matches.get_many::<String>(INPUT_ARG_NAME).map(|paths| paths.cloned().collect::<Vec<_>>());
    let inputs = inputs.filter(|inputs| !inputs.is_empty()).ok_or_else(|| "no input files".to_string())?;
    let out_dir = matches.get_one::<String>(OUT_DIR_ARG_NAME).map(PathBuf::from);
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME);

    if inputs.len() > 1 && out_dir.is_none() {
        return Err(format!("{} input files are given, specify --{OUT_DIR_ARG_NAME}", inputs.len()));
    }

    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file)).map_err(to_string)))
        .transpose()?
        .unwrap_or_default();

    apply_config_overrides(matches, &mut config)?;

    let is_stdout = out_dir.is_none() && out_result.is_none();
    let logger = if config.is_logging_enabled() { create_logger(is_stdout) } else { create_silent_logger() };

    let solver = apply_solver_overrides(matches, create_builder_from_config(&config, logger))?
        .build()
        .map_err(|err| format!("cannot create solver: '{err}'"))?;

    let mut summaries = Vec::with_capacity(inputs.len());
    let mut diagnostics = Vec::new();

    for input in inputs.iter() {
        let label = get_label_from_path(Path::new(input));

        let rows = open_file(input, "catalog")
            .and_then(|file| read_catalog(BufReader::new(file), Some(label.as_str())).map_err(to_string))?;
        let result = solver.solve(rows).map_err(|err| format!("cannot solve '{input}': '{err}'"))?;

        let out_file = match &out_dir {
            Some(out_dir) => {
                let path = out_dir.join(format!("fleet_allocation_{label}.csv"));
                Some(create_file(path.to_string_lossy().as_ref(), "allocation")?)
            }
            None => out_result.map(|path| create_file(path, "allocation")).transpose()?,
        };

        write_allocation_csv(out_writer_func(out_file), result.records.as_slice()).map_err(to_string)?;

        summaries.push(result.summary(label.as_str()));
        diagnostics.extend(result.diagnostics);
    }

    if let Some(path) = matches.get_one::<String>(DIAGNOSTICS_ARG_NAME) {
        let file = create_file(path, "diagnostics")?;
        write_diagnostics_json(out_writer_func(Some(file)), diagnostics.as_slice()).map_err(to_string)?;
    }

    if let Some(path) = matches.get_one::<String>(SUMMARY_ARG_NAME) {
        let file = create_file(path, "summary")?;
        write_summary_csv(out_writer_func(Some(file)), summaries.as_slice()).map_err(to_string)?;
    }

    Ok(())
}

fn apply_config_overrides(matches: &ArgMatches, config: &mut Config) -> Result<(), String> {
    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        config.environment.get_or_insert_with(EnvironmentConfig::default).seed = Some(seed);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        let telemetry = config.telemetry.get_or_insert_with(TelemetryConfig::default);
        let log_best = telemetry.logging.as_ref().and_then(|logging| logging.log_best);
        telemetry.logging = Some(LoggingConfig { enabled: true, log_best });
    }

    Ok(())
}

fn apply_solver_overrides(matches: &ArgMatches, builder: SolverBuilder) -> Result<SolverBuilder, String> {
    let mut builder = builder;

    if let Some(limit) = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")? {
        builder = builder.with_max_generations(limit);
    }

    if let Some(limit) = parse_float_value::<Float>(matches, TIME_ARG_NAME, "max time")? {
        builder = builder.with_max_time(Some(limit));
    }

    if let Some(size) = parse_int_value::<usize>(matches, POPULATION_ARG_NAME, "population size")? {
        builder = builder.with_population_size(size);
    }

    let cost_weight = parse_float_value::<Float>(matches, COST_WEIGHT_ARG_NAME, "cost weight")?;
    let emission_weight = parse_float_value::<Float>(matches, EMISSION_WEIGHT_ARG_NAME, "emission weight")?;

    let objective = match matches.get_one::<String>(OBJECTIVE_ARG_NAME).map(String::as_str) {
        Some("cost") => Some(ObjectiveType::Cost),
        Some("emission") => Some(ObjectiveType::Emission),
        Some(_) => Some(ObjectiveType::Tradeoff { cost_weight, emission_weight }),
        None if cost_weight.is_some() || emission_weight.is_some() => {
            Some(ObjectiveType::Tradeoff { cost_weight, emission_weight })
        }
        None => None,
    };

    if let Some(objective) = objective {
        builder = builder.with_objective(objective.to_variant());
    }

    Ok(builder)
}

fn create_logger(is_stdout_busy: bool) -> InfoLogger {
    if is_stdout_busy { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|msg: &str| println!("{msg}")) }
}

fn to_string(err: GenericError) -> String {
    err.to_string()
}
