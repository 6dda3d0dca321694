pub mod baseline;
pub mod calculator;
pub mod metered;
pub mod night_pass;
pub mod reload;
pub mod season_pass;

// Common algorithm traits
use crate::error::FareError;
use crate::models::{CalculationRequest, CalculationResult, Money};

/// Trait for subscription fare solvers
pub trait FareSolver {
    /// Price every subscription strategy for the request and select the cheapest
    fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult, FareError>;

    /// Annual cost of traveling without any subscription
    fn annual_baseline_spend(&self, request: &CalculationRequest) -> Money;

    /// Annual ticket cost with every trip bought at half-fare price
    fn half_fare_discounted_spend(&self, request: &CalculationRequest) -> Money;
}
