// Metered subscription billed per calendar month

use crate::models::{CalculationRequest, Money, Months, TravelPattern};
use crate::utils::period::MONTHS_PER_YEAR;

/// Ticket spend per calendar month at full fare
pub fn monthly_full_fare_spend(request: &CalculationRequest) -> Vec<Money> {
    let budget_share = request
        .extra_budget
        .as_ref()
        .map_or(0.0, |b| b.monthly_full_fare_spend());

    (0..MONTHS_PER_YEAR)
        .map(|month: Months| {
            let pattern_spend: Money = match &request.pattern {
                TravelPattern::Routes(routes) => {
                    routes.iter().map(|r| r.monthly_full_fare_spend(month)).sum()
                }
                TravelPattern::Direct {
                    annual_spend,
                    half_fare_discounted,
                } => {
                    let full = if *half_fare_discounted {
                        annual_spend * 2.0
                    } else {
                        *annual_spend
                    };
                    full / MONTHS_PER_YEAR as f64
                }
            };
            pattern_spend + budget_share
        })
        .collect()
}

/// Monthly bills of the metered plan and how many of them hit the cap
#[derive(Debug, Clone, PartialEq)]
pub struct MeteredBill {
    pub monthly_charges: Vec<Money>,
    pub capped_months: u32,
}

impl MeteredBill {
    pub fn total(&self) -> Money {
        self.monthly_charges.iter().sum()
    }
}

/// Applies the discount to each month's spend and caps the result at `monthly_cap`
pub fn metered_bill(monthly_spend: &[Money], discount_rate: f64, monthly_cap: Option<Money>) -> MeteredBill {
    let mut capped_months = 0;
    let monthly_charges = monthly_spend
        .iter()
        .map(|spend| {
            let charge = spend * (1.0 - discount_rate);
            match monthly_cap {
                Some(cap) if charge > cap => {
                    capped_months += 1;
                    cap
                }
                _ => charge,
            }
        })
        .collect();

    MeteredBill {
        monthly_charges,
        capped_months,
    }
}
