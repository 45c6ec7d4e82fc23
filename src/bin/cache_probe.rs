//! Estimate cache sizes from cycles per strided access.

use cache_aware::probe::{self, Measurement, ProbeConfig, SweepConfig};
use cache_aware::timer::{CycleSource, MonotonicClock, platform_counter};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Clock {
    /// Cycle counter of this CPU (falls back to monotonic on other targets).
    Platform,
    /// Monotonic nanosecond clock.
    Monotonic,
}

#[derive(Parser)]
#[command(name = "cache_probe", about = "Estimate cache sizes (cycles per access)")]
struct Args {
    /// Timed passes per size.
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// First working-set size in KB.
    #[arg(long, default_value_t = 1)]
    start_kb: usize,

    /// Largest working-set size in KB.
    #[arg(long, default_value_t = 24000)]
    max_kb: usize,

    /// Linear growth step in KB once doubling would overshoot it.
    #[arg(long, default_value_t = 1024)]
    step_kb: usize,

    /// Cache line size in bytes.
    #[arg(long, default_value_t = probe::CACHE_LINE_SIZE)]
    line_size: usize,

    #[arg(long, value_enum, default_value_t = Clock::Platform)]
    clock: Clock,

    /// Print `size_kb,cycles_per_access` rows for plotting.
    #[arg(long)]
    csv: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match args.clock {
        Clock::Platform => run(&platform_counter(), &args),
        Clock::Monotonic => run(&MonotonicClock, &args),
    };

    if let Err(e) = result {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn run<S: CycleSource>(source: &S, args: &Args) -> cache_aware::Result<()> {
    let sweep = SweepConfig {
        start_kb: args.start_kb,
        cap_kb: args.max_kb,
        step_kb: args.step_kb,
    };
    let config = ProbeConfig {
        line_size: args.line_size,
        trials: args.trials,
    };

    let overhead = probe::measure_overhead_cycles(source, args.trials)?;
    log::info!("timer overhead with {}: {:.2} cycles", source.name(), overhead);

    if args.csv {
        println!("size_kb,cycles_per_access");
    } else {
        println!("Estimating cache sizes (cycles per access)...");
        println!("Size (KB)  Cycles/access");
        println!("{}", "-".repeat(27));
    }

    for Measurement {
        size_kb,
        cycles_per_access,
    } in probe::run_sweep(source, &sweep, &config)?
    {
        if args.csv {
            println!("{},{}", size_kb, cycles_per_access);
        } else {
            println!("{:<10} {:.4}", size_kb, cycles_per_access);
        }
    }
    Ok(())
}
