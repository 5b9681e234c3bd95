use clap::{Parser, Subcommand};
use planarlp_solver::{LpProblem, Outcome, Solver};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planarlp")]
#[command(about = "Two-variable integer programs via simplex and grid refinement", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem, refining to integers when the relaxation is fractional
    Solve {
        /// JSON file with "constraints" rows and "objective" coefficients
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Solve only the LP relaxation
    Relax {
        /// JSON file with "constraints" rows and "objective" coefficients
        file: PathBuf,
    },
}

fn load_problem(file: &PathBuf) -> LpProblem {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::from_str(&source) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error parsing problem: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { file, format } => {
            let problem = load_problem(&file);

            let outcome = match planarlp_solver::optimize(&problem) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Solve error: {}", e);
                    std::process::exit(1);
                }
            };

            if format == "json" {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing outcome: {}", e);
                        std::process::exit(1);
                    }
                }
                return;
            }

            match outcome {
                Outcome::Integral(relaxation) => {
                    println!("Status: INTEGRAL (no refinement needed)");
                    println!("Objective value: {}", relaxation.objective_value);
                    println!("Basic values: {:?}", relaxation.values);
                }
                Outcome::Refined(solution) => {
                    println!("Status: REFINED");
                    println!("Optimal objective value: {}", solution.objective_value);
                    println!("x: {}", solution.x);
                    println!("y: {}", solution.y);
                }
            }
        }
        Commands::Relax { file } => {
            let problem = load_problem(&file);

            let solver = Solver::new();
            match solver.solve(&problem) {
                Ok(relaxation) => {
                    println!("Objective value: {}", relaxation.objective_value);
                    println!("Basic values: {:?}", relaxation.values);
                    println!(
                        "Integral: {}",
                        relaxation.is_integral(solver.tolerance())
                    );
                }
                Err(e) => {
                    eprintln!("Solve error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
