#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::Arg;
use fleet_cli::extensions::check::check_allocation;
use fleet_cli::extensions::import::read_catalog;
use fleet_cli::extensions::solve::formats::read_allocation_csv;
use fleet_cli::get_label_from_path;
use std::io::BufReader;
use std::path::Path;

const CATALOG_ARG_NAME: &str = "CATALOG";
const ALLOCATION_ARG_NAME: &str = "ALLOCATION";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check allocation feasibility against vehicle catalog")
        .arg(Arg::new(CATALOG_ARG_NAME).help("Sets vehicle catalog csv file").required(true).index(1))
        .arg(Arg::new(ALLOCATION_ARG_NAME).help("Sets allocation csv file").required(true).index(2))
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let get_path = |name: &str| {
        matches.get_one::<String>(name).cloned().ok_or_else(|| format!("argument '{name}' is not specified"))
    };

    let catalog_path = get_path(CATALOG_ARG_NAME)?;
    let allocation_path = get_path(ALLOCATION_ARG_NAME)?;

    let label = get_label_from_path(Path::new(catalog_path.as_str()));
    let catalog = open_file(catalog_path.as_str(), "catalog").and_then(|file| {
        read_catalog(BufReader::new(file), Some(label.as_str())).map_err(|err| err.to_string())
    })?;
    let records = open_file(allocation_path.as_str(), "allocation")
        .and_then(|file| read_allocation_csv(BufReader::new(file)).map_err(|err| err.to_string()))?;

    check_allocation(catalog, records.as_slice())
        .map_err(|errs| format!("checker found {} errors:\n{}", errs.len(), errs.join("\n")))?;

    println!("allocation feasibility check is completed successfully");

    Ok(())
}
