// Half-fare-plus credit consumption and reload schedule

use crate::models::{CreditPackage, Money, ReloadOutcome};

/// Spend within this fraction of a package's credit from an exact multiple
/// counts as using whole packages only
const EXACT_MULTIPLE_TOLERANCE: f64 = 1e-9;

/// Works out how a half-fare ticket `spend` is paid once `package` has been bought.
///
/// Spend up to the package credit is covered entirely. Beyond that, with
/// `allow_reload` set, further packages are bought until the spend is covered:
/// every reload but the last costs the full package price, the last one is
/// prorated by the share of its credit actually used. An exact multiple of the
/// credit ends on a fully used package, never on an empty one. Without reloads
/// the rest is paid at half-fare ticket price.
pub fn apply_credit(spend: Money, package: &CreditPackage, allow_reload: bool) -> ReloadOutcome {
    if spend <= package.credit * (1.0 + EXACT_MULTIPLE_TOLERANCE) {
        return ReloadOutcome {
            credit_used: spend.min(package.credit),
            reload_count: 0,
            reload_cost: 0.0,
            last_reload_ratio: 0.0,
            tickets_after_credit: 0.0,
        };
    }

    let remaining = spend - package.credit;

    if !allow_reload {
        return ReloadOutcome {
            credit_used: package.credit,
            reload_count: 0,
            reload_cost: 0.0,
            last_reload_ratio: 0.0,
            tickets_after_credit: remaining,
        };
    }

    let packages_needed = remaining / package.credit;
    let whole = packages_needed.round();
    let (reload_count, last_usage) = if (packages_needed - whole).abs() < EXACT_MULTIPLE_TOLERANCE {
        (whole, package.credit)
    } else {
        let full_reloads = packages_needed.floor();
        (full_reloads + 1.0, remaining - full_reloads * package.credit)
    };

    let last_reload_ratio = last_usage / package.credit;
    let reload_cost = (reload_count - 1.0) * package.cost + package.cost * last_reload_ratio;

    log::debug!(
        "credit {} covers {}: {} reloads, last at {:.3}, reload cost {:.2}",
        package.credit,
        spend,
        reload_count,
        last_reload_ratio,
        reload_cost
    );

    ReloadOutcome {
        credit_used: spend,
        reload_count: reload_count as u32,
        reload_cost,
        last_reload_ratio,
        tickets_after_credit: 0.0,
    }
}

/// Total paid for one half-fare-plus strategy, add-on fees excluded
pub fn half_fare_plus_cost(package: &CreditPackage, card_price: Money, outcome: &ReloadOutcome) -> Money {
    package.cost + card_price + outcome.extra_cost()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn youth_tier() -> CreditPackage {
        CreditPackage::new(1000.0, 600.0)
    }

    #[test]
    fn test_spend_within_credit() {
        let outcome = apply_credit(750.0, &youth_tier(), true);
        assert_eq!(outcome.reload_count, 0);
        assert_eq!(outcome.credit_used, 750.0);
        assert_eq!(outcome.extra_cost(), 0.0);
        assert_eq!(half_fare_plus_cost(&youth_tier(), 190.0, &outcome), 790.0);
    }

    #[test]
    fn test_spend_equal_to_credit() {
        let outcome = apply_credit(1000.0, &youth_tier(), true);
        assert_eq!(outcome.reload_count, 0);
        assert_eq!(outcome.reload_cost, 0.0);
    }

    #[test]
    fn test_partial_last_reload() {
        let outcome = apply_credit(2500.0, &youth_tier(), true);
        assert_eq!(outcome.reload_count, 2);
        assert!((outcome.last_reload_ratio - 0.5).abs() < 1e-12);
        assert!((outcome.reload_cost - 900.0).abs() < 1e-9);
        assert!((half_fare_plus_cost(&youth_tier(), 190.0, &outcome) - 1690.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_double_uses_one_full_reload() {
        let outcome = apply_credit(2000.0, &youth_tier(), true);
        assert_eq!(outcome.reload_count, 1);
        assert_eq!(outcome.last_reload_ratio, 1.0);
        assert_eq!(outcome.reload_cost, 600.0);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_reload() {
        let outcome = apply_credit(4000.0, &youth_tier(), true);
        assert_eq!(outcome.reload_count, 3);
        assert_eq!(outcome.last_reload_ratio, 1.0);
        assert_eq!(outcome.reload_cost, 1800.0);
    }

    #[test]
    fn test_float_noise_near_multiple() {
        let outcome = apply_credit(2000.0 + 1e-10, &youth_tier(), true);
        assert_eq!(outcome.reload_count, 1);
        assert_eq!(outcome.last_reload_ratio, 1.0);
    }

    #[test]
    fn test_without_reload_pays_tickets() {
        let outcome = apply_credit(2500.0, &youth_tier(), false);
        assert_eq!(outcome.reload_count, 0);
        assert_eq!(outcome.reload_cost, 0.0);
        assert_eq!(outcome.tickets_after_credit, 1500.0);
        assert_eq!(outcome.credit_used, 1000.0);
        assert_eq!(half_fare_plus_cost(&youth_tier(), 190.0, &outcome), 2290.0);
    }
}
