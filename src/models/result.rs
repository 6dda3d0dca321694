// Calculation result and per-route season-pass assessments

use crate::models::{Money, OptionDetail, OptionKind, SubscriptionOption};
use serde::{Deserialize, Serialize};

/// Estimated point-to-point season pass for a single route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPassAssessment {
    pub route: String,

    /// Full-fare one-way price the estimate is based on
    pub single_trip_price: Money,

    /// Estimated annual pass price
    pub estimated_price: Money,

    /// The single-trip price lies inside the estimator's valid range
    pub in_range: bool,

    /// Full-fare spend on the route the pass would replace
    pub route_spend: Money,

    /// In range and strictly cheaper than the route spend
    pub worthwhile: bool,
}

impl SeasonPassAssessment {
    /// Amount saved against the route spend, if the pass is worthwhile
    pub fn saving(&self) -> Option<Money> {
        self.worthwhile
            .then(|| self.route_spend - self.estimated_price)
    }

    /// Turns a worthwhile assessment into a route-scoped recommendation
    pub fn as_option(&self) -> Option<SubscriptionOption> {
        if !self.worthwhile {
            return None;
        }
        Some(SubscriptionOption::new(
            OptionKind::PointToPointPass,
            self.estimated_price,
            OptionDetail::PointToPointPass {
                route: self.route.clone(),
                single_trip_price: self.single_trip_price,
            },
        ))
    }
}

/// Output of one fare comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Annual cost without any subscription, add-on fees included
    pub annual_baseline_spend: Money,

    /// Annual ticket cost when every trip is paid at half-fare price
    pub half_fare_ticket_spend: Money,

    /// All compared options in assembly order
    pub options: Vec<SubscriptionOption>,

    /// Index of the cheapest option, the first one on ties
    pub best_index: usize,

    /// One assessment per route, in input order
    pub season_passes: Vec<SeasonPassAssessment>,
}

impl CalculationResult {
    /// The cheapest option, none if `best_index` does not point into `options`
    pub fn best_option(&self) -> Option<&SubscriptionOption> {
        self.options.get(self.best_index)
    }

    /// Savings of the best option against traveling without a subscription
    pub fn best_saving(&self) -> Option<Money> {
        self.best_option()
            .map(|best| self.annual_baseline_spend - best.total)
    }

    /// Options of the given kind, in assembly order
    pub fn options_of(&self, kind: OptionKind) -> impl Iterator<Item = &SubscriptionOption> + '_ {
        self.options.iter().filter(move |o| o.kind == kind)
    }

    /// Season passes that beat the route spend
    pub fn worthwhile_season_passes(&self) -> Vec<SubscriptionOption> {
        self.season_passes
            .iter()
            .filter_map(SeasonPassAssessment::as_option)
            .collect()
    }
}
