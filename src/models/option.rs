// Subscription option models produced by the calculator

use crate::models::{CreditPackage, Money, Months};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the strategies compared by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    None,
    HalfFare,
    HalfFarePlus,
    UnlimitedTravelcard,
    NightPass,
    PointToPointPass,
    MeteredPlan,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::None => "none",
            OptionKind::HalfFare => "half-fare",
            OptionKind::HalfFarePlus => "half-fare-plus",
            OptionKind::UnlimitedTravelcard => "unlimited-travelcard",
            OptionKind::NightPass => "night-pass",
            OptionKind::PointToPointPass => "point-to-point-pass",
            OptionKind::MeteredPlan => "metered-plan",
        };
        f.write_str(name)
    }
}

/// How a half-fare-plus credit covered the ticket spend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReloadOutcome {
    /// Ticket spend paid out of credit, initial package and reloads together
    pub credit_used: Money,

    /// Additional packages bought after the initial one
    pub reload_count: u32,

    /// Price paid for all reloads, the last one prorated
    pub reload_cost: Money,

    /// Share of the last reload's credit actually used, 0 without reloads
    pub last_reload_ratio: f64,

    /// Spend paid at half-fare ticket price once the credit ran out
    pub tickets_after_credit: Money,
}

impl ReloadOutcome {
    /// Everything paid beyond the initial package
    pub fn extra_cost(&self) -> Money {
        self.reload_cost + self.tickets_after_credit
    }
}

/// Product covering the trips a night pass does not cover
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NightComplement {
    /// Everything is covered by the night pass
    Nothing,
    /// Uncovered trips are paid at full fare
    FullFare,
    /// A half-fare card for the uncovered trips
    HalfFare,
    /// A half-fare-plus package for the uncovered trips
    HalfFarePlus {
        package: CreditPackage,
        reload: ReloadOutcome,
    },
}

/// Billing mode picked for the unlimited travelcard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum TravelcardPricing {
    Annual,
    Monthly { months: Months, monthly_price: Money },
}

/// Kind-specific supporting figures of an option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "detail", rename_all = "kebab-case")]
pub enum OptionDetail {
    NoSubscription {
        ticket_spend: Money,
    },
    HalfFare {
        card_price: Money,
        ticket_spend: Money,
    },
    HalfFarePlus {
        package: CreditPackage,
        card_price: Money,
        reload: ReloadOutcome,
    },
    NightPass {
        pass_price: Money,
        uncovered_spend: Money,
        card_price: Money,
        complement: NightComplement,
    },
    UnlimitedTravelcard {
        price: Money,
        pricing: TravelcardPricing,
    },
    PointToPointPass {
        route: String,
        single_trip_price: Money,
    },
    MeteredPlan {
        monthly_charges: Vec<Money>,
        capped_months: u32,
    },
}

/// One priced strategy, built fresh for every calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionOption {
    pub kind: OptionKind,

    /// Total annual cost, add-on fees included
    pub total: Money,

    pub detail: OptionDetail,
}

impl SubscriptionOption {
    pub fn new(kind: OptionKind, total: Money, detail: OptionDetail) -> Self {
        Self {
            kind,
            total,
            detail,
        }
    }

    /// Credit package of a half-fare-plus option
    pub fn package(&self) -> Option<CreditPackage> {
        match &self.detail {
            OptionDetail::HalfFarePlus { package, .. } => Some(*package),
            _ => None,
        }
    }

    /// Reload outcome of a half-fare-plus option
    pub fn reload(&self) -> Option<ReloadOutcome> {
        match &self.detail {
            OptionDetail::HalfFarePlus { reload, .. } => Some(*reload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_matches_serde() {
        for kind in [
            OptionKind::None,
            OptionKind::HalfFare,
            OptionKind::HalfFarePlus,
            OptionKind::UnlimitedTravelcard,
            OptionKind::NightPass,
            OptionKind::PointToPointPass,
            OptionKind::MeteredPlan,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_package_accessor() {
        let package = CreditPackage::new(1000.0, 600.0);
        let option = SubscriptionOption::new(
            OptionKind::HalfFarePlus,
            790.0,
            OptionDetail::HalfFarePlus {
                package,
                card_price: 190.0,
                reload: ReloadOutcome {
                    credit_used: 800.0,
                    reload_count: 0,
                    reload_cost: 0.0,
                    last_reload_ratio: 0.0,
                    tickets_after_credit: 0.0,
                },
            },
        );
        assert_eq!(option.package(), Some(package));
        assert_eq!(option.reload().map(|r| r.extra_cost()), Some(0.0));

        let plain = SubscriptionOption::new(
            OptionKind::None,
            100.0,
            OptionDetail::NoSubscription { ticket_spend: 100.0 },
        );
        assert_eq!(plain.package(), None);
    }
}
