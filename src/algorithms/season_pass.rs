// Point-to-point season pass estimate per route

use crate::models::{Money, Route, SeasonPassAssessment};

/// Lowest single-trip price the estimate is fitted for
pub const MIN_SINGLE_TRIP_PRICE: Money = 4.0;

/// Highest single-trip price the estimate is fitted for
pub const MAX_SINGLE_TRIP_PRICE: Money = 50.0;

const LINEAR_COEFFICIENT: f64 = 173.5;
const QUADRATIC_COEFFICIENT: f64 = 2.44;

/// Empirical annual pass price for a route with one-way price `single_trip_price`.
/// Only meaningful inside the fitted range, see [`in_estimate_range`].
pub fn estimate_annual_price(single_trip_price: Money) -> Money {
    let p = single_trip_price;
    (LINEAR_COEFFICIENT * p - QUADRATIC_COEFFICIENT * p * p).max(0.0)
}

pub fn in_estimate_range(single_trip_price: Money) -> bool {
    (MIN_SINGLE_TRIP_PRICE..=MAX_SINGLE_TRIP_PRICE).contains(&single_trip_price)
}

/// Compares the estimated season pass against what the route costs at full fare
pub fn assess_route(route: &Route) -> SeasonPassAssessment {
    let single_trip_price = route.single_trip_price();
    let estimated_price = estimate_annual_price(single_trip_price);
    let in_range = in_estimate_range(single_trip_price);
    let route_spend = route.annual_full_fare_spend();

    SeasonPassAssessment {
        route: route.name.clone(),
        single_trip_price,
        estimated_price,
        in_range,
        route_spend,
        worthwhile: in_range && estimated_price < route_spend,
    }
}
