// Plain-text summary of a calculation result

use std::fmt;

use crate::models::{
    CalculationResult, NightComplement, OptionDetail, SubscriptionOption, TravelcardPricing,
};

fn describe(option: &SubscriptionOption) -> String {
    match &option.detail {
        OptionDetail::HalfFarePlus {
            package, reload, ..
        } => {
            if reload.reload_count > 0 {
                format!(
                    "{} ({:.0} credit, {} reloads, last at {:.0}%)",
                    option.kind,
                    package.credit,
                    reload.reload_count,
                    reload.last_reload_ratio * 100.0
                )
            } else if reload.tickets_after_credit > 0.0 {
                format!(
                    "{} ({:.0} credit, {:.2} in tickets after credit)",
                    option.kind, package.credit, reload.tickets_after_credit
                )
            } else {
                format!("{} ({:.0} credit)", option.kind, package.credit)
            }
        }
        OptionDetail::UnlimitedTravelcard {
            pricing: TravelcardPricing::Monthly { months, .. },
            ..
        } => format!("{} ({} months)", option.kind, months),
        OptionDetail::NightPass { complement, .. } => {
            let complement = match complement {
                NightComplement::Nothing => "nothing else".to_string(),
                NightComplement::FullFare => "full-fare tickets".to_string(),
                NightComplement::HalfFare => "half-fare card".to_string(),
                NightComplement::HalfFarePlus { package, .. } => {
                    format!("half-fare-plus {:.0}", package.credit)
                }
            };
            format!("{} (+ {})", option.kind, complement)
        }
        _ => option.kind.to_string(),
    }
}

/// Plain-text view of a result: the option list, the best option and
/// worthwhile season passes
pub struct ResultReport<'a>(pub &'a CalculationResult);

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Baseline spend:        {:>10.2}", result.annual_baseline_spend)?;
        writeln!(f, "Half-fare ticket cost: {:>10.2}", result.half_fare_ticket_spend)?;
        writeln!(f, "------------------------------------------")?;

        for (i, option) in result.options.iter().enumerate() {
            let marker = if i == result.best_index { "*" } else { " " };
            writeln!(f, "{} {:<48} {:>10.2}", marker, describe(option), option.total)?;
        }

        if let Some(best) = result.best_option() {
            writeln!(
                f,
                "Best option: {} at {:.2} (saves {:.2})",
                describe(best),
                best.total,
                result.annual_baseline_spend - best.total
            )?;
        }

        for assessment in result.season_passes.iter().filter(|a| a.worthwhile) {
            writeln!(
                f,
                "Season pass for {}: about {:.2} instead of {:.2}",
                assessment.route, assessment.estimated_price, assessment.route_spend
            )?;
        }
        Ok(())
    }
}

/// Renders a result as text, see [`ResultReport`]
pub fn render_result(result: &CalculationResult) -> String {
    ResultReport(result).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::FareSolver;
    use crate::models::{AgeBracket, CalculationRequest, Route, TravelerProfile};
    use crate::FareCalculator;

    #[test]
    fn test_render_marks_best_option() {
        let request = CalculationRequest::with_routes(
            TravelerProfile::new(AgeBracket::Adult),
            vec![Route::new("Zurich - Bern", 5.0, 89.0)],
        );
        let result = FareCalculator::default().calculate(&request).unwrap();
        let text = render_result(&result);

        assert!(text.contains("Best option: unlimited-travelcard at 3995.00"));
        let starred: Vec<&str> = text.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(starred.len(), 1);
        assert!(starred[0].contains("unlimited-travelcard"));
    }

    #[test]
    fn test_report_without_valid_best_index() {
        let request = CalculationRequest::with_routes(
            TravelerProfile::new(AgeBracket::Adult),
            vec![Route::new("Zurich - Bern", 5.0, 89.0)],
        );
        let mut result = FareCalculator::default().calculate(&request).unwrap();
        result.best_index = result.options.len();
        let text = ResultReport(&result).to_string();

        assert!(!text.contains("Best option"));
        assert!(!text.lines().any(|l| l.starts_with('*')));
        assert_eq!(text.lines().count(), 3 + result.options.len());
    }
}
