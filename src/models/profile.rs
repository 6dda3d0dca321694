// Traveler profile model

use crate::error::FareError;
use crate::models::{AgeBracket, Money, TravelClass};
use serde::{Deserialize, Serialize};

/// A fixed-fee pass or product the traveler pays for regardless of strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnFee {
    pub label: String,
    pub annual_fee: Money,
}

impl AddOnFee {
    pub fn new<S: Into<String>>(label: S, annual_fee: Money) -> Self {
        Self {
            label: label.into(),
            annual_fee,
        }
    }
}

/// Describes who is traveling and which cards they already hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelerProfile {
    /// Age bracket selecting the price row
    pub age_bracket: AgeBracket,

    /// Travel class used for the unlimited travelcard and night pass
    #[serde(default)]
    pub travel_class: TravelClass,

    /// Already holds a half-fare card, so its price is not counted again
    #[serde(default)]
    pub owns_half_fare: bool,

    /// Receives the half-fare card for free
    #[serde(default)]
    pub free_half_fare: bool,

    /// Buys the half-fare card for the first time (new-customer price)
    #[serde(default = "default_new_customer")]
    pub new_customer: bool,

    /// Flat fees added verbatim to every option
    #[serde(default)]
    pub add_ons: Vec<AddOnFee>,
}

fn default_new_customer() -> bool {
    true
}

impl TravelerProfile {
    /// Creates a second-class, new-customer profile without any cards
    pub fn new(age_bracket: AgeBracket) -> Self {
        Self {
            age_bracket,
            travel_class: TravelClass::Second,
            owns_half_fare: false,
            free_half_fare: false,
            new_customer: true,
            add_ons: Vec::new(),
        }
    }

    pub fn with_class(mut self, travel_class: TravelClass) -> Self {
        self.travel_class = travel_class;
        self
    }

    pub fn with_add_on<S: Into<String>>(mut self, label: S, annual_fee: Money) -> Self {
        self.add_ons.push(AddOnFee::new(label, annual_fee));
        self
    }

    /// Whether the half-fare card price has to be paid on top of a strategy
    pub fn pays_half_fare_card(&self) -> bool {
        !(self.owns_half_fare || self.free_half_fare)
    }

    /// Sum of all add-on fees
    pub fn add_on_total(&self) -> Money {
        self.add_ons.iter().map(|a| a.annual_fee).sum()
    }

    pub fn validate(&self) -> Result<(), FareError> {
        for add_on in &self.add_ons {
            if !add_on.annual_fee.is_finite() || add_on.annual_fee < 0.0 {
                return Err(FareError::invalid_input(format!(
                    "add-on '{}' has fee {}, expected a non-negative amount",
                    add_on.label, add_on.annual_fee
                )));
            }
        }
        Ok(())
    }
}
