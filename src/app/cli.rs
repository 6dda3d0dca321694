use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::algorithms::FareSolver;
use crate::app::report::render_result;
use crate::app::scenario::{load_pricing, load_request, load_requests};
use crate::app::AppError;
use crate::pricing::PricingTable;
use crate::FareCalculator;

/// command line tool comparing Swiss public-transport subscriptions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FareCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: FareOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FareOperation {
    /// compares every subscription option for one scenario file
    Compare {
        /// JSON file holding a calculation request
        #[arg(short, long)]
        scenario: PathBuf,
        /// TOML pricing table replacing the built-in prices
        #[arg(short, long)]
        pricing: Option<PathBuf>,
        /// print the full result as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// compares a JSON array of scenarios in parallel
    Batch {
        #[arg(short, long)]
        scenarios: PathBuf,
        #[arg(short, long)]
        pricing: Option<PathBuf>,
    },
    /// writes the built-in pricing table as TOML
    Pricing {
        /// output file, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl FareOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            FareOperation::Compare {
                scenario,
                pricing,
                json,
            } => {
                let calculator = FareCalculator::new(load_pricing(pricing.as_deref())?)?;
                let request = load_request(scenario)?;
                let result = calculator.calculate(&request)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print!("{}", render_result(&result));
                }
                Ok(())
            }
            FareOperation::Batch { scenarios, pricing } => {
                let calculator = FareCalculator::new(load_pricing(pricing.as_deref())?)?;
                let requests = load_requests(scenarios)?;
                log::info!("comparing {} scenarios", requests.len());

                let start_time = std::time::Instant::now();
                let results = calculator.calculate_batch(&requests);
                log::info!("batch finished in {:.2?}", start_time.elapsed());

                for (i, result) in results.iter().enumerate() {
                    match result {
                        Ok(result) => {
                            if let Some(best) = result.best_option() {
                                println!(
                                    "Scenario {}: {} at {:.2} (baseline {:.2})",
                                    i + 1,
                                    best.kind,
                                    best.total,
                                    result.annual_baseline_spend
                                );
                            }
                        }
                        Err(e) => {
                            log::error!("scenario {} failed: {}", i + 1, e);
                            println!("Scenario {}: failed ({})", i + 1, e);
                        }
                    }
                }
                Ok(())
            }
            FareOperation::Pricing { output } => {
                let source = PricingTable::default().to_toml_string()?;
                match output {
                    Some(path) => {
                        fs::write(path, source)?;
                        log::info!("pricing table written to {}", path.display());
                    }
                    None => print!("{}", source),
                }
                Ok(())
            }
        }
    }
}
