// Pricing module - the static price table consulted by the calculator

mod table;

pub use self::table::{BracketPrices, CategoryPackages, MeteredTerms, NightPassTerms, PricingTable};
