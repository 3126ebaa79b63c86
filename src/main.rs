//! Directory line sorter
//!
//! Sorts the lines of every file in a directory into one ordered output
//! file, with a choice of ordering policy, sorting algorithm, and
//! single-threaded or concurrent pipeline.

use clap::{Arg, ArgAction, Command};
use std::process;

use dirsort::{
    config::{Algorithm, OrderingPolicy, PipelineMode, SortConfig},
    error::SortResult,
    sort,
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("dirsort: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    sort(&config)
}

fn build_cli() -> Command {
    Command::new("dirsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("dirsort [OPTION]... DIR")
        .about("Sort the lines of every file in a directory into one output file")
        .arg(
            Arg::new("input-dir")
                .help("Directory whose non-directory entries are read as input")
                .required(true)
                .value_name("DIR"),
        )
        .arg(
            Arg::new("order")
                .short('s')
                .long("order")
                .help("Ordering policy")
                .long_help(
                    "Ordering policy: 'ascending' and 'descending' compare bytes from \
                     the front of each line; 'last-letter' compares from the last byte \
                     walking backward",
                )
                .value_name("ORDER")
                .value_parser(["ascending", "descending", "last-letter"])
                .default_value("ascending"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Sorting algorithm: linear-time 'radix' or quadratic 'exchange'")
                .value_name("ALGO")
                .value_parser(["radix", "exchange"])
                .default_value("radix"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write result to FILE instead of sorted.txt")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Read and sort everything on one thread instead of per-file workers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of sort worker threads (defaults to the CPU count)")
                .value_name("N"),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::new();

    if let Some(dir) = matches.get_one::<String>("input-dir") {
        config = config.with_input_dir(dir);
    }

    if let Some(order) = matches.get_one::<String>("order") {
        config = config.with_policy(order.parse::<OrderingPolicy>()?);
    }

    if let Some(algorithm) = matches.get_one::<String>("algorithm") {
        config = config.with_algorithm(algorithm.parse::<Algorithm>()?);
    }

    if let Some(output) = matches.get_one::<String>("output") {
        config = config.with_output_file(output);
    }

    if matches.get_flag("sequential") {
        config = config.with_mode(PipelineMode::SingleThreaded);
    }

    if let Some(jobs_str) = matches.get_one::<String>("jobs") {
        let jobs: usize = jobs_str.parse().map_err(|_| {
            dirsort::SortError::parse(&format!("invalid thread count: {jobs_str}"))
        })?;
        config = config.with_threads(Some(jobs));
    }

    config.validate()?;
    Ok(config)
}
