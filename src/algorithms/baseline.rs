// Baseline spend and the simple price comparisons

use crate::models::{CalculationRequest, Money, Months, TravelPattern, TravelcardPricing};

fn pattern_full_fare_spend(pattern: &TravelPattern) -> Money {
    match pattern {
        TravelPattern::Routes(routes) => routes.iter().map(|r| r.annual_full_fare_spend()).sum(),
        TravelPattern::Direct {
            annual_spend,
            half_fare_discounted,
        } => {
            if *half_fare_discounted {
                annual_spend * 2.0
            } else {
                *annual_spend
            }
        }
    }
}

/// Ticket spend at full fare, without add-on fees
pub fn full_fare_ticket_spend(request: &CalculationRequest) -> Money {
    let budget_spend = request
        .extra_budget
        .as_ref()
        .map_or(0.0, |b| b.annual_full_fare_spend());
    pattern_full_fare_spend(&request.pattern) + budget_spend
}

/// Annual cost without any subscription: full-fare tickets plus add-on fees
pub fn annual_baseline_spend(request: &CalculationRequest) -> Money {
    full_fare_ticket_spend(request) + request.profile.add_on_total()
}

/// Annual ticket cost when every trip is bought at half-fare price
pub fn half_fare_discounted_spend(request: &CalculationRequest) -> Money {
    let pattern_spend: Money = match &request.pattern {
        TravelPattern::Routes(routes) => routes.iter().map(|r| r.annual_half_fare_spend()).sum(),
        TravelPattern::Direct {
            annual_spend,
            half_fare_discounted,
        } => {
            if *half_fare_discounted {
                *annual_spend
            } else {
                annual_spend / 2.0
            }
        }
    };
    let budget_spend = request
        .extra_budget
        .as_ref()
        .map_or(0.0, |b| b.annual_half_fare_spend());
    pattern_spend + budget_spend
}

/// Whether any route or the extra budget is flagged as night-pass covered
pub fn has_night_covered_travel(request: &CalculationRequest) -> bool {
    let routes_covered = request
        .pattern
        .routes()
        .iter()
        .any(|r| r.night_covered);
    let budget_covered = request
        .active_extra_budget()
        .is_some_and(|b| b.night_covered);
    routes_covered || budget_covered
}

/// Full-fare spend on travel the night pass does not cover.
/// A direct annual figure carries no coverage flag and counts as uncovered.
pub fn uncovered_full_fare_spend(request: &CalculationRequest) -> Money {
    let pattern_spend: Money = match &request.pattern {
        TravelPattern::Routes(routes) => routes
            .iter()
            .filter(|r| !r.night_covered)
            .map(|r| r.annual_full_fare_spend())
            .sum(),
        direct @ TravelPattern::Direct { .. } => pattern_full_fare_spend(direct),
    };
    let budget_spend = request
        .extra_budget
        .as_ref()
        .filter(|b| !b.night_covered)
        .map_or(0.0, |b| b.annual_full_fare_spend());
    pattern_spend + budget_spend
}

/// Picks the cheaper of the annual price and paying month by month for `months`.
/// The annual price wins ties.
pub fn unlimited_travelcard_price(
    annual_price: Money,
    monthly_price: Money,
    months: Months,
) -> (Money, TravelcardPricing) {
    let monthly_total = monthly_price * months as f64;
    if monthly_total < annual_price {
        (
            monthly_total,
            TravelcardPricing::Monthly {
                months,
                monthly_price,
            },
        )
    } else {
        (annual_price, TravelcardPricing::Annual)
    }
}
