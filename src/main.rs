use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_PIPELINE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate all enabled pages from a product input file
    Generate {
        /// Path to the product input JSON
        input: PathBuf,

        /// Override the configured output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Normalize and validate an input file without generating pages
    Check {
        /// Path to the product input JSON
        input: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "pagegen")]
#[command(about = "Generate FAQ, product and comparison pages from product data", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pagegen/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let default_filter = if cli.verbose {
        "pagegen=debug"
    } else {
        "pagegen=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.map(PathBuf::from);
    let mut config = match pagegen::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e:#}");
            std::process::exit(EXIT_CONFIG);
        }
    };

    match cli.command {
        Commands::Generate { input, output_dir } => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }

            let raw = match pagegen::product::load_input(&input) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("Input error: {e:#}");
                    std::process::exit(EXIT_INPUT);
                }
            };

            let result = pagegen::pipeline::run(&raw, &config);

            for warning in &result.warnings {
                eprintln!("warning: {warning}");
            }

            if !result.success {
                for error in &result.errors {
                    eprintln!("Pipeline error: {error}");
                }
                std::process::exit(EXIT_PIPELINE);
            }

            let paths = match pagegen::output::write_outputs(
                &config.output_dir,
                &result.outputs,
                config.pretty_print,
            ) {
                Ok(paths) => paths,
                Err(e) => {
                    eprintln!("Output error: {e:#}");
                    std::process::exit(EXIT_PIPELINE);
                }
            };

            for path in &paths {
                println!("Saved {}", path.display());
            }

            let summary = result.summary();
            println!(
                "{} steps in {:?} ({:.0}% success, avg {:.2}ms per step)",
                summary.steps_run,
                start_time.elapsed(),
                summary.success_rate,
                summary.avg_duration_ms
            );
        }
        Commands::Check { input } => {
            let raw = match pagegen::product::load_input(&input) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("Input error: {e:#}");
                    std::process::exit(EXIT_INPUT);
                }
            };

            let product = match pagegen::product::normalize(&raw) {
                Ok(product) => product,
                Err(e) => {
                    eprintln!("Input error: {e:#}");
                    std::process::exit(EXIT_INPUT);
                }
            };

            println!("{}", product.summary());

            let warnings = pagegen::product::check_product(&product);
            if warnings.is_empty() {
                println!(
                    "Input OK: {} ingredients, {} benefits, price {}",
                    product.ingredient_count(),
                    product.benefit_count(),
                    product.price_formatted()
                );
            } else {
                for warning in &warnings {
                    eprintln!("warning: {warning}");
                }
                std::process::exit(EXIT_INPUT);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
