// Route models for representing recurring trips

use crate::error::FareError;
use crate::models::{Money, Months};
use crate::utils::period::{budget_periods_per_year, periods_in, MONTHS_PER_YEAR, WEEKS_PER_MONTH};
use serde::{Deserialize, Serialize};

/// Period the trip count of a route refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    #[default]
    Weekly,
    Monthly,
}

/// Whether the entered cost buys a one-way or a round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FareBasis {
    #[default]
    Single,
    Return,
}

/// A recurring trip the traveler makes for part or all of the year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Name of the route, used to label season-pass assessments
    pub name: String,

    /// Trips per frequency period, fractional values allowed
    pub trips: f64,

    /// Price paid per trip
    pub cost: Money,

    /// The entered cost is already the half-fare price
    #[serde(default)]
    pub half_fare_discounted: bool,

    /// Number of months the route is traveled, 1 to 12
    #[serde(default = "default_duration")]
    pub duration_months: Months,

    #[serde(default)]
    pub frequency: FrequencyUnit,

    #[serde(default)]
    pub fare_basis: FareBasis,

    /// Trips on this route are covered by the night pass
    #[serde(default)]
    pub night_covered: bool,
}

fn default_duration() -> Months {
    MONTHS_PER_YEAR
}

impl Route {
    /// Creates a weekly, full-fare, year-round route
    pub fn new<S: Into<String>>(name: S, trips: f64, cost: Money) -> Self {
        Self {
            name: name.into(),
            trips,
            cost,
            half_fare_discounted: false,
            duration_months: MONTHS_PER_YEAR,
            frequency: FrequencyUnit::Weekly,
            fare_basis: FareBasis::Single,
            night_covered: false,
        }
    }

    pub fn with_duration(mut self, duration_months: Months) -> Self {
        self.duration_months = duration_months;
        self
    }

    pub fn with_frequency(mut self, frequency: FrequencyUnit) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_fare_basis(mut self, fare_basis: FareBasis) -> Self {
        self.fare_basis = fare_basis;
        self
    }

    pub fn half_fare_discounted(mut self) -> Self {
        self.half_fare_discounted = true;
        self
    }

    pub fn night_covered(mut self) -> Self {
        self.night_covered = true;
        self
    }

    /// Price of one trip without any discount card
    pub fn full_fare_cost(&self) -> Money {
        if self.half_fare_discounted {
            self.cost * 2.0
        } else {
            self.cost
        }
    }

    /// Price of one trip with a half-fare card
    pub fn half_fare_cost(&self) -> Money {
        if self.half_fare_discounted {
            self.cost
        } else {
            self.cost / 2.0
        }
    }

    /// Full-fare price of a one-way trip
    pub fn single_trip_price(&self) -> Money {
        match self.fare_basis {
            FareBasis::Single => self.full_fare_cost(),
            FareBasis::Return => self.full_fare_cost() / 2.0,
        }
    }

    /// Periods covered over the whole route duration
    pub fn periods(&self) -> f64 {
        periods_in(self.frequency, self.duration_months)
    }

    /// Spend over the route duration without any discount card
    pub fn annual_full_fare_spend(&self) -> Money {
        self.trips * self.full_fare_cost() * self.periods()
    }

    /// Spend over the route duration with a half-fare card
    pub fn annual_half_fare_spend(&self) -> Money {
        self.trips * self.half_fare_cost() * self.periods()
    }

    /// Full-fare spend within calendar month `month` (zero based)
    pub fn monthly_full_fare_spend(&self, month: Months) -> Money {
        if month >= self.duration_months {
            return 0.0;
        }
        let periods_per_month = match self.frequency {
            FrequencyUnit::Weekly => WEEKS_PER_MONTH,
            FrequencyUnit::Monthly => 1.0,
        };
        self.trips * self.full_fare_cost() * periods_per_month
    }

    pub fn validate(&self) -> Result<(), FareError> {
        if !self.trips.is_finite() || self.trips < 0.0 {
            return Err(FareError::invalid_input(format!(
                "route '{}': trip count {} must be a non-negative number",
                self.name, self.trips
            )));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(FareError::invalid_input(format!(
                "route '{}': cost {} must be a non-negative amount",
                self.name, self.cost
            )));
        }
        if !(1..=MONTHS_PER_YEAR).contains(&self.duration_months) {
            return Err(FareError::invalid_input(format!(
                "route '{}': duration {} months outside 1..=12",
                self.name, self.duration_months
            )));
        }
        Ok(())
    }
}

/// Period an extra budget amount refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetUnit {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

/// Lump-sum travel spend not tied to a specific route, always spans a full year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraBudget {
    pub amount: Money,

    #[serde(default)]
    pub unit: BudgetUnit,

    #[serde(default)]
    pub half_fare_discounted: bool,

    #[serde(default)]
    pub night_covered: bool,
}

impl ExtraBudget {
    pub fn new(amount: Money, unit: BudgetUnit) -> Self {
        Self {
            amount,
            unit,
            half_fare_discounted: false,
            night_covered: false,
        }
    }

    pub fn annual_full_fare_spend(&self) -> Money {
        let full = if self.half_fare_discounted {
            self.amount * 2.0
        } else {
            self.amount
        };
        full * budget_periods_per_year(self.unit)
    }

    pub fn annual_half_fare_spend(&self) -> Money {
        let half = if self.half_fare_discounted {
            self.amount
        } else {
            self.amount / 2.0
        };
        half * budget_periods_per_year(self.unit)
    }

    pub fn monthly_full_fare_spend(&self) -> Money {
        self.annual_full_fare_spend() / MONTHS_PER_YEAR as f64
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0.0
    }

    pub fn validate(&self) -> Result<(), FareError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(FareError::invalid_input(format!(
                "extra budget {} must be a non-negative amount",
                self.amount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_route_annual_spend() {
        let route = Route::new("commute", 5.0, 89.0);
        assert!((route.annual_full_fare_spend() - 23140.0).abs() < 1e-6);
        assert!((route.annual_half_fare_spend() - 11570.0).abs() < 1e-6);
    }

    #[test]
    fn test_monthly_route_partial_year() {
        let route = Route::new("ski", 4.0, 30.0)
            .with_frequency(FrequencyUnit::Monthly)
            .with_duration(3);
        assert_eq!(route.annual_full_fare_spend(), 360.0);
        assert_eq!(route.monthly_full_fare_spend(0), 120.0);
        assert_eq!(route.monthly_full_fare_spend(2), 120.0);
        assert_eq!(route.monthly_full_fare_spend(3), 0.0);
    }

    #[test]
    fn test_half_fare_discounted_cost() {
        let route = Route::new("leisure", 2.0, 22.5).half_fare_discounted();
        assert_eq!(route.full_fare_cost(), 45.0);
        assert_eq!(route.half_fare_cost(), 22.5);
    }

    #[test]
    fn test_single_trip_price_for_return_fare() {
        let route = Route::new("return", 1.0, 40.0).with_fare_basis(FareBasis::Return);
        assert_eq!(route.single_trip_price(), 20.0);

        let discounted = Route::new("return", 1.0, 20.0)
            .with_fare_basis(FareBasis::Return)
            .half_fare_discounted();
        assert_eq!(discounted.single_trip_price(), 20.0);
    }

    #[test]
    fn test_route_validation() {
        assert!(Route::new("ok", 0.0, 0.0).validate().is_ok());
        assert!(Route::new("trips", -1.0, 10.0).validate().is_err());
        assert!(Route::new("cost", 1.0, -0.5).validate().is_err());
        assert!(Route::new("nan", f64::NAN, 1.0).validate().is_err());
        assert!(Route::new("zero", 1.0, 1.0)
            .with_duration(0)
            .validate()
            .is_err());
        assert!(Route::new("long", 1.0, 1.0)
            .with_duration(13)
            .validate()
            .is_err());
    }

    #[test]
    fn test_extra_budget_normalization() {
        assert_eq!(
            ExtraBudget::new(10.0, BudgetUnit::Weekly).annual_full_fare_spend(),
            520.0
        );
        assert_eq!(
            ExtraBudget::new(50.0, BudgetUnit::Monthly).annual_full_fare_spend(),
            600.0
        );
        let mut yearly = ExtraBudget::new(300.0, BudgetUnit::Yearly);
        yearly.half_fare_discounted = true;
        assert_eq!(yearly.annual_full_fare_spend(), 600.0);
        assert_eq!(yearly.annual_half_fare_spend(), 300.0);
        assert_eq!(yearly.monthly_full_fare_spend(), 50.0);
    }
}
