// Period helpers for annualizing trip frequencies

use crate::models::{BudgetUnit, FrequencyUnit, Months};

/// Months in a calculation year
pub const MONTHS_PER_YEAR: Months = 12;

/// Weeks counted in a calculation year
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Weeks counted per month, so that twelve months add up to exactly 52 weeks
pub const WEEKS_PER_MONTH: f64 = WEEKS_PER_YEAR / 12.0;

/// Number of frequency periods contained in `months` months of travel
pub fn periods_in(unit: FrequencyUnit, months: Months) -> f64 {
    match unit {
        FrequencyUnit::Weekly => WEEKS_PER_MONTH * months as f64,
        FrequencyUnit::Monthly => months as f64,
    }
}

/// Number of budget periods contained in a full year
pub fn budget_periods_per_year(unit: BudgetUnit) -> f64 {
    match unit {
        BudgetUnit::Weekly => WEEKS_PER_YEAR,
        BudgetUnit::Monthly => MONTHS_PER_YEAR as f64,
        BudgetUnit::Yearly => 1.0,
    }
}
