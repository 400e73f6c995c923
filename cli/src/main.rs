//! Command-line front end for the competence simulator.
//!
//! Runs one simulation and prints the per-quartile summary the host UI
//! would chart; `--output` additionally writes the full result as JSON
//! for downstream tooling.

use std::fs;

use competence_simulator_core_rs::{simulate, QuartileBin, SimulationParams};

struct CliArgs {
    participants: usize,
    correlation: f64,
    quartiles: usize,
    seed: Option<u64>,
    output: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        participants: 4000,
        correlation: 0.0,
        quartiles: 4,
        seed: None,
        output: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--participants" => {
                i += 1;
                if i < args.len() {
                    let value: i64 = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --participants value: {}", args[i]);
                        std::process::exit(1);
                    });
                    if value <= 0 {
                        eprintln!("sample_size must be positive");
                        std::process::exit(1);
                    }
                    cli.participants = value as usize;
                }
            }
            "--correlation" => {
                i += 1;
                if i < args.len() {
                    cli.correlation = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --correlation value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--quartiles" => {
                i += 1;
                if i < args.len() {
                    cli.quartiles = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --quartiles value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    cli.output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: competence-simulate [--participants N] [--correlation R] [--quartiles Q] [--seed S] [--output FILE]"
                );
                println!();
                println!("Options:");
                println!("  --participants N  Number of synthetic participants (default: 4000)");
                println!("  --correlation R   Injected actual/perceived correlation in [-1, 1] (default: 0.0)");
                println!("  --quartiles Q     Number of equal-frequency bins (default: 4)");
                println!("  --seed S          RNG seed (default: fresh entropy per run)");
                println!("  --output FILE     Write the full result as pretty JSON to FILE");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: competence-simulate [--participants N] [--correlation R] [--quartiles Q] [--seed S] [--output FILE]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn print_bins(title: &str, bins: &[QuartileBin]) {
    println!("{}:", title);
    println!("  {:<8} {:>6}  {:>12}  {:>15}", "bin", "n", "mean actual", "mean perceived");
    for bin in bins {
        let mean_actual = if bin.mean_actual.is_nan() {
            "--".to_string()
        } else {
            format!("{:.1}", bin.mean_actual)
        };
        let mean_perceived = if bin.mean_perceived.is_nan() {
            "--".to_string()
        } else {
            format!("{:.1}", bin.mean_perceived)
        };
        println!(
            "  {:<8} {:>6}  {:>12}  {:>15}",
            bin.label, bin.participant_count, mean_actual, mean_perceived
        );
    }
    println!();
}

fn main() {
    let cli = parse_args();

    let mut params = SimulationParams::new(cli.participants, cli.correlation)
        .with_quartile_count(cli.quartiles);
    if let Some(seed) = cli.seed {
        params = params.with_seed(seed);
    }

    let result = match simulate(&params) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Competence Simulation ({} participants)",
        result.params.sample_size
    );
    println!("  Correlation:  {:.2}", result.params.correlation);
    println!("  Seed:         {}", result.seed);
    println!();

    print_bins("By actual-competence quartile", &result.bins);
    print_bins("By perceived-competence quartile", &result.perceived_bins);

    if let Some(path) = cli.output {
        let json = match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = fs::write(&path, json) {
            eprintln!("Failed to write {}: {}", path, e);
            std::process::exit(1);
        }
        println!("Result written: {}", path);
    }
}
