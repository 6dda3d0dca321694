// Half-fare-plus credit package

use crate::models::Money;
use serde::{Deserialize, Serialize};

/// A prepaid ticket credit bought together with the half-fare card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditPackage {
    /// Ticket credit the package grants
    pub credit: Money,

    /// Purchase price of the package
    pub cost: Money,
}

impl CreditPackage {
    pub fn new(credit: Money, cost: Money) -> Self {
        Self { credit, cost }
    }

    /// Credit received on top of what was paid
    pub fn bonus(&self) -> Money {
        self.credit - self.cost
    }
}
