//! Generates a random polynomial dataset, fits it, and prints the result.
//!
//! ```text
//! Usage: fit_demo [degree=<n>] [count=<n>] [min=<x>] [max=<x>] [noise=<sigma>] [seed=<n>]
//! ```
use polyapprox::{
    generate::{ApplyNoise, RandomPolynomial},
    Approximator,
};

fn main() {
    let mut degree = 2usize;
    let mut count = 10usize;
    let mut min_x = -10.0f64;
    let mut max_x = 10.0f64;
    let mut noise = 0.0f64;
    let mut seed = None;

    for arg in std::env::args().skip(1) {
        if arg == "help" || arg == "--help" || arg == "-h" {
            print_usage();
            std::process::exit(0);
        }

        let parsed = parse_option(
            &arg, &mut degree, &mut count, &mut min_x, &mut max_x, &mut noise, &mut seed,
        );
        if !parsed {
            eprintln!("Unrecognized option: {arg}");
            print_usage();
            std::process::exit(1);
        }
    }

    let source = RandomPolynomial::new(degree, 1.0..=5.0, seed);
    let data = source
        .sampled(min_x..=max_x, count)
        .apply_normal_noise(noise, seed);

    let mut approx = Approximator::new(data);
    match approx.fit(degree) {
        Ok(fitted) => {
            println!("Source:    {}", source.polynomial());
            println!("Recovered: {fitted}");
        }
        Err(e) => {
            eprintln!("No fit: {e}");
            std::process::exit(1);
        }
    }

    println!();
    println!("Samples:");
    for &(x, y) in approx.data() {
        println!("  ({x:.4}, {y:.4})");
    }

    println!();
    println!("SSE = {:.6e}", approx.sum_squared_errors());
}

fn print_usage() {
    eprintln!(
        "Usage: fit_demo [degree=<n>] [count=<n>] [min=<x>] [max=<x>] [noise=<sigma>] [seed=<n>]"
    );
}

fn parse_option(
    arg: &str,
    degree: &mut usize,
    count: &mut usize,
    min_x: &mut f64,
    max_x: &mut f64,
    noise: &mut f64,
    seed: &mut Option<u64>,
) -> bool {
    fn set<T: std::str::FromStr>(value: &str, out: &mut T) -> bool {
        match value.parse() {
            Ok(parsed) => {
                *out = parsed;
                true
            }
            Err(_) => false,
        }
    }

    match arg.split_once('=') {
        Some(("degree", value)) => set(value, degree),
        Some(("count", value)) => set(value, count),
        Some(("min", value)) => set(value, min_x),
        Some(("max", value)) => set(value, max_x),
        Some(("noise", value)) => set(value, noise),
        Some(("seed", value)) => {
            let mut parsed = 0u64;
            set(value, &mut parsed) && {
                *seed = Some(parsed);
                true
            }
        }
        _ => false,
    }
}
