// Night pass combined with the cheapest product for uncovered travel

use crate::algorithms::reload::{apply_credit, half_fare_plus_cost};
use crate::models::{CreditPackage, Money, NightComplement};
use crate::utils::selection::first_min_index;

/// Cheapest night-pass strategy, add-on fees excluded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightPassQuote {
    pub cost: Money,
    pub complement: NightComplement,
}

/// Finds the cheapest way to pay for the travel a night pass leaves uncovered.
///
/// Candidates are compared in a fixed order: full-fare tickets, a half-fare
/// card, then a half-fare-plus package per tier. The first cheapest wins.
/// `packages` is empty when the traveler has no credit category.
pub fn best_night_pass(
    pass_price: Money,
    uncovered_spend: Money,
    card_price: Money,
    packages: &[CreditPackage],
    allow_reload: bool,
) -> NightPassQuote {
    if uncovered_spend <= 0.0 {
        return NightPassQuote {
            cost: pass_price,
            complement: NightComplement::Nothing,
        };
    }

    let half_fare_spend = uncovered_spend / 2.0;

    let mut candidates = vec![
        NightPassQuote {
            cost: pass_price + uncovered_spend,
            complement: NightComplement::FullFare,
        },
        NightPassQuote {
            cost: pass_price + card_price + half_fare_spend,
            complement: NightComplement::HalfFare,
        },
    ];

    for package in packages {
        let reload = apply_credit(half_fare_spend, package, allow_reload);
        candidates.push(NightPassQuote {
            cost: pass_price + half_fare_plus_cost(package, card_price, &reload),
            complement: NightComplement::HalfFarePlus {
                package: *package,
                reload,
            },
        });
    }

    let best = first_min_index(candidates.iter().map(|c| c.cost)).unwrap_or(0);
    candidates[best]
}
