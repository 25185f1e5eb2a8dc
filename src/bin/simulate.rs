//! Slot machine balance simulator CLI.
//!
//! Plays a headless session through the real engine and reports the odds.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # 10000 spins, random seed
//!   cargo run --bin simulate -- -n 500 -s 42    # reproducible short run
//!   cargo run --bin simulate -- --no-penalty    # daytime odds only

use jackpot::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              JACKPOT BALANCE SIMULATOR                        ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Spins:          {}", config.num_spins);
        println!("  Auto-buy:       {}", config.auto_purchase);
        println!("  Fever:          {}", config.features.fever);
        println!("  Free spins:     {}", config.features.free_spins);
        println!("  Penalty:        {}", config.features.penalty);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--spins" => {
                if i + 1 < args.len() {
                    config.num_spins = args[i + 1].parse().unwrap_or(config.num_spins);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--no-fever" => config.features.fever = false,
            "--no-free-spins" => config.features.free_spins = false,
            "--no-penalty" => config.features.penalty = false,
            "--no-auto-buy" => config.auto_purchase = false,
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "--json" => write_json = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Jackpot Balance Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --spins <N>     Number of spins to play (default: 10000)");
    println!("  -s, --seed <N>      Random seed for reproducibility");
    println!("  --no-fever          Remove the fever symbol");
    println!("  --no-free-spins     Remove the free spin symbol");
    println!("  --no-penalty        Remove the skull symbol");
    println!("  --no-auto-buy       Stop when tokens run out instead of buying more");
    println!("  --json              Also save the report as JSON");
    println!("  -v, --verbose       Print every spin");
    println!("  -q, --quiet         Only print the report, no settings or progress");
    println!("  -h, --help          Show this help");
}
