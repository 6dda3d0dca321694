// Models module - exports all model types

mod age;
mod option;
mod package;
mod profile;
mod request;
mod result;
mod route;

// Re-export model types
pub use self::age::{AgeBracket, CreditCategory, TravelClass};
pub use self::option::{
    NightComplement, OptionDetail, OptionKind, ReloadOutcome, SubscriptionOption,
    TravelcardPricing,
};
pub use self::package::CreditPackage;
pub use self::profile::{AddOnFee, TravelerProfile};
pub use self::request::{CalculationRequest, TravelPattern};
pub use self::result::{CalculationResult, SeasonPassAssessment};
pub use self::route::{BudgetUnit, ExtraBudget, FareBasis, FrequencyUnit, Route};

// Common type aliases for improved code readability
pub type Money = f64;
pub type Months = u8;
