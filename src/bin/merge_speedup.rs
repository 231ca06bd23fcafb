//! Times the sequential two-pointer merge against the fork-join recursive merge on a fixed
//! workload, sweeping the cutoff in steps of 1024, and prints duration, a sortedness verdict,
//! speedup and efficiency for each run.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use par_merge::{parallel, patterns, sequential, task};

fn speedup(seq: f64, par: f64) -> f64 {
    seq / par
}

fn efficiency(seq: f64, par: f64, threads: usize) -> f64 {
    speedup(seq, par) / threads as f64
}

fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

fn main() -> ExitCode {
    let args = env::args().collect::<Vec<_>>();

    if args.len() == 1 {
        println!("Usage: {} <iterations>", args[0]);
        return ExitCode::SUCCESS;
    }

    if args.len() != 2 {
        eprintln!("Incorrect number of arguments.");
        return ExitCode::FAILURE;
    }

    let iters: usize = match args[1].parse() {
        Ok(iters) => iters,
        Err(_) => {
            eprintln!("Incorrect argument.");
            return ExitCode::FAILURE;
        }
    };

    // Two ascending operands of different lengths, the same workload for every measurement.
    let lhs = patterns::ascending_from(128 * 1024, 19);
    let rhs = patterns::ascending_from(lhs.len() + 211, 5);
    let mut result = vec![0i32; lhs.len() + rhs.len()];

    let seq = {
        let start = Instant::now();
        for _ in 0..iters {
            sequential::merge(&lhs, &rhs, &mut result, 0);
        }
        start.elapsed().as_secs_f64()
    };

    println!("--[ merge: begin ]--");
    println!("\tDuration:\t{seq} sec.");
    println!("\tVerdict:\t{}", is_sorted(&result));
    println!("--[ merge: end ]--");
    println!();

    let threads = task::num_threads();

    for cutoff in (1024..result.len()).step_by(1024) {
        let par = {
            let start = Instant::now();
            for _ in 0..iters {
                parallel::merge(&lhs, &rhs, &mut result, cutoff);
            }
            start.elapsed().as_secs_f64()
        };

        println!("--[ parallel_recursive_merge({cutoff}): begin ]--");
        println!("\tThread(s):\t{threads}");
        println!("\tDuration:\t{par} sec.");
        println!("\tVerdict:\t{}", is_sorted(&result));
        println!("\tSpeedup:\t{}", speedup(seq, par));
        println!("\tEfficiency:\t{}", efficiency(seq, par, threads));
        println!("--[ parallel_recursive_merge({cutoff}): end ]--");
        println!();
    }

    ExitCode::SUCCESS
}
