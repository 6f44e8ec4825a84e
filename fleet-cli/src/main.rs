//! A command line interface to *Fleet Mix Allocator*.

mod commands;

use crate::commands::check::{get_check_app, run_check};
use crate::commands::solve::{get_solve_app, run_solve};
use crate::commands::{create_write_buffer, get_app};
use std::process;

fn main() {
    let matches = get_app().subcommand(get_solve_app()).subcommand(get_check_app()).get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("check", check_matches)) => run_check(check_matches),
        _ => Err("no subcommand was used. Use -h to print help information".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
