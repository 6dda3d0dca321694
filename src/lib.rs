// Public modules
pub mod algorithms;
pub mod app;
pub mod error;
pub mod models;
pub mod pricing;
pub mod utils;

// Re-exports for convenience
pub use algorithms::calculator::FareCalculator;
pub use algorithms::FareSolver;
pub use error::FareError;
pub use models::{
    AgeBracket, CalculationRequest, CalculationResult, Route, SubscriptionOption, TravelerProfile,
};
pub use pricing::PricingTable;
