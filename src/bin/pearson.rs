//! Loads an (x, y) measurement file and prints the least-squares slope, intercept and Pearson
//! coefficient computed by the parallel reduction in [`par_merge::stats`].

use std::env;
use std::fs;
use std::process::ExitCode;

use par_merge::stats;

fn main() -> ExitCode {
    let args = env::args().collect::<Vec<_>>();

    if args.len() == 1 {
        println!("Usage: {} <filename>", args[0]);
        return ExitCode::SUCCESS;
    }

    if args.len() != 2 {
        eprintln!("Incorrect number of arguments.");
        return ExitCode::FAILURE;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let data_set = match stats::load(&contents) {
        Ok(data_set) => data_set,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let result = stats::correlation(&data_set);
    println!("a: {}\tb: {}\tr: {}", result.a, result.b, result.r);

    ExitCode::SUCCESS
}
