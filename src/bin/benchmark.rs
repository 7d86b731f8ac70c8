//! Performance benchmark comparing serial and parallel rule evaluation

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{Algorithm, Grid, GridError};

fn soup(size: usize) -> Result<Grid, GridError> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut grid = Grid::new(size)?;
    grid.randomize(0.3, &mut rng);
    grid.apply_pending();
    grid.drain_changes();
    Ok(grid)
}

/// Milliseconds per generation, plus the average number of flips
fn benchmark(size: usize, iterations: u32, algorithm: Algorithm) -> Result<(f64, f64), GridError> {
    let mut grid = soup(size)?;
    let mut flips = 0usize;

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_with(algorithm);
        flips += grid.drain_changes().len();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    Ok((ms, flips as f64 / iterations as f64))
}

fn main() -> Result<(), GridError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("=== Toroidal Life Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10} {:>12}",
        "Size", "Serial", "Parallel", "Speedup", "Flips/gen");
    println!("{:-<62}", "");

    for size in sizes {
        let (serial_ms, flips) = benchmark(size, iterations, Algorithm::Serial)?;
        let (parallel_ms, _) = benchmark(size, iterations, Algorithm::Parallel)?;

        println!(
            "{:>12} {:>10.2}ms {:>10.2}ms {:>9.1}x {:>12.0}",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            flips
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000.0 * 2000.0;
    for algorithm in Algorithm::all() {
        let (ms, _) = benchmark(2000, iterations, algorithm)?;
        println!("{:<10} {:.2} ms/gen, {:.1}M cells/sec",
            algorithm.name(), ms, cells / (ms / 1000.0) / 1_000_000.0);
    }

    Ok(())
}
