/// Pure Rust benchmarks for the metric suite.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data
/// generation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use hydroskill_core::calculate_all_metrics;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic series generation.
///
/// Observed flows span a realistic daily-discharge range; simulated flows
/// perturb them so every metric branch does real work, including the
/// negative-clipping path.
fn make_series(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let observed: Vec<f64> = (0..n).map(|_| next_f64() * 100.0).collect();
    let simulated: Vec<f64> = observed
        .iter()
        .map(|o| o + (next_f64() - 0.55) * 20.0)
        .collect();
    (observed, simulated)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn main() {
    // One year, one decade, one century of daily flows.
    let sizes = [365usize, 3_650, 36_500];

    println!("{:<12} {:>12}", "n (days)", "median time");
    for &n in &sizes {
        let (observed, simulated) = make_series(n, 42);
        let t = median_time(|| {
            let m = calculate_all_metrics(black_box(&observed), black_box(&simulated))
                .expect("aligned series");
            black_box(m);
        });
        println!("{:<12} {:>12?}", n, t);
    }
}
