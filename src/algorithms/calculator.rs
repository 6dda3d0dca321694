use std::sync::Arc;

use rayon::prelude::*;

use crate::algorithms::baseline::{
    annual_baseline_spend, full_fare_ticket_spend, half_fare_discounted_spend,
    has_night_covered_travel, uncovered_full_fare_spend, unlimited_travelcard_price,
};
use crate::algorithms::metered::{metered_bill, monthly_full_fare_spend};
use crate::algorithms::night_pass::best_night_pass;
use crate::algorithms::reload::{apply_credit, half_fare_plus_cost};
use crate::algorithms::season_pass::assess_route;
use crate::algorithms::FareSolver;
use crate::error::FareError;
use crate::models::{
    CalculationRequest, CalculationResult, CreditPackage, Money, OptionDetail, OptionKind,
    SeasonPassAssessment, SubscriptionOption,
};
use crate::pricing::PricingTable;
use crate::utils::selection::first_min_index;

/// Fare calculator comparing every subscription strategy for a request
#[derive(Clone, Debug)]
pub struct FareCalculator {
    /// Price table shared read-only between calculations
    pricing: Arc<PricingTable>,
}

impl FareCalculator {
    /// Creates a calculator over the given price table, rejecting a table
    /// that breaks its invariants
    pub fn new(pricing: PricingTable) -> Result<Self, FareError> {
        Self::new_with_shared_pricing(Arc::new(pricing))
    }

    pub fn new_with_shared_pricing(pricing: Arc<PricingTable>) -> Result<Self, FareError> {
        pricing.validate()?;
        Ok(Self { pricing })
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Half-fare card price the traveler has to pay, zero if owned or free
    pub fn card_price(&self, request: &CalculationRequest) -> Result<Money, FareError> {
        let profile = &request.profile;
        if !profile.pays_half_fare_card() {
            return Ok(0.0);
        }
        self.pricing
            .half_fare_price(profile.age_bracket, profile.new_customer)
    }

    /// Half-fare-plus packages available to the traveler, empty without a credit category
    pub fn packages_for(&self, request: &CalculationRequest) -> Result<&[CreditPackage], FareError> {
        match self.pricing.credit_category(request.profile.age_bracket)? {
            Some(category) => self.pricing.credit_packages(category),
            None => Ok(&[]),
        }
    }

    pub fn no_subscription_option(&self, request: &CalculationRequest) -> SubscriptionOption {
        SubscriptionOption::new(
            OptionKind::None,
            annual_baseline_spend(request),
            OptionDetail::NoSubscription {
                ticket_spend: full_fare_ticket_spend(request),
            },
        )
    }

    pub fn half_fare_option(&self, request: &CalculationRequest) -> Result<SubscriptionOption, FareError> {
        let card_price = self.card_price(request)?;
        let ticket_spend = half_fare_discounted_spend(request);
        Ok(SubscriptionOption::new(
            OptionKind::HalfFare,
            ticket_spend + card_price + request.profile.add_on_total(),
            OptionDetail::HalfFare {
                card_price,
                ticket_spend,
            },
        ))
    }

    /// One option per half-fare-plus tier, in ascending credit order
    pub fn half_fare_plus_options(
        &self,
        request: &CalculationRequest,
    ) -> Result<Vec<SubscriptionOption>, FareError> {
        let card_price = self.card_price(request)?;
        let spend = half_fare_discounted_spend(request);
        let add_ons = request.profile.add_on_total();

        let options = self
            .packages_for(request)?
            .iter()
            .map(|package| {
                let reload = apply_credit(spend, package, request.allow_reload);
                SubscriptionOption::new(
                    OptionKind::HalfFarePlus,
                    half_fare_plus_cost(package, card_price, &reload) + add_ons,
                    OptionDetail::HalfFarePlus {
                        package: *package,
                        card_price,
                        reload,
                    },
                )
            })
            .collect();
        Ok(options)
    }

    /// Night pass with its cheapest complement, if the traveler is eligible
    /// and some travel is covered by it
    pub fn night_pass_option(
        &self,
        request: &CalculationRequest,
    ) -> Result<Option<SubscriptionOption>, FareError> {
        let profile = &request.profile;
        if !self
            .pricing
            .is_night_pass_eligible(profile.age_bracket, profile.travel_class)
            || !has_night_covered_travel(request)
        {
            return Ok(None);
        }

        let pass_price = self.pricing.night_pass_price();
        let uncovered_spend = uncovered_full_fare_spend(request);
        let card_price = self.card_price(request)?;
        let quote = best_night_pass(
            pass_price,
            uncovered_spend,
            card_price,
            self.packages_for(request)?,
            request.allow_reload,
        );

        Ok(Some(SubscriptionOption::new(
            OptionKind::NightPass,
            quote.cost + profile.add_on_total(),
            OptionDetail::NightPass {
                pass_price,
                uncovered_spend,
                card_price,
                complement: quote.complement,
            },
        )))
    }

    pub fn unlimited_travelcard_option(
        &self,
        request: &CalculationRequest,
    ) -> Result<SubscriptionOption, FareError> {
        let profile = &request.profile;
        let annual = self
            .pricing
            .unlimited_travelcard_price(profile.age_bracket, profile.travel_class)?;
        let monthly = self
            .pricing
            .monthly_unlimited_travelcard_price(profile.age_bracket, profile.travel_class)?;
        let (price, pricing) = unlimited_travelcard_price(annual, monthly, request.travel_months());

        Ok(SubscriptionOption::new(
            OptionKind::UnlimitedTravelcard,
            price + profile.add_on_total(),
            OptionDetail::UnlimitedTravelcard { price, pricing },
        ))
    }

    /// Metered plan, if the price table carries its terms.
    /// Bills at half-fare rates when the traveler holds the card at no cost.
    pub fn metered_option(
        &self,
        request: &CalculationRequest,
    ) -> Result<Option<SubscriptionOption>, FareError> {
        let terms = match self.pricing.metered_terms() {
            Some(terms) => terms,
            None => return Ok(None),
        };
        let profile = &request.profile;

        let rate = if profile.pays_half_fare_card() { 1.0 } else { 0.5 };
        let spend: Vec<Money> = monthly_full_fare_spend(request)
            .into_iter()
            .map(|s| s * rate)
            .collect();

        let cap = if terms.cap_at_monthly_travelcard {
            Some(
                self.pricing
                    .monthly_unlimited_travelcard_price(profile.age_bracket, profile.travel_class)?,
            )
        } else {
            None
        };

        let bill = metered_bill(&spend, terms.discount_rate, cap);
        Ok(Some(SubscriptionOption::new(
            OptionKind::MeteredPlan,
            bill.total() + profile.add_on_total(),
            OptionDetail::MeteredPlan {
                monthly_charges: bill.monthly_charges,
                capped_months: bill.capped_months,
            },
        )))
    }

    /// Season-pass estimate for every route, in input order
    pub fn season_pass_assessments(&self, request: &CalculationRequest) -> Vec<SeasonPassAssessment> {
        request.pattern.routes().iter().map(assess_route).collect()
    }

    /// Builds the option list in comparison order: none, half-fare, half-fare-plus
    /// tiers, night pass, unlimited travelcard, metered plan
    pub fn assemble_options(
        &self,
        request: &CalculationRequest,
    ) -> Result<Vec<SubscriptionOption>, FareError> {
        let mut options = vec![
            self.no_subscription_option(request),
            self.half_fare_option(request)?,
        ];
        options.extend(self.half_fare_plus_options(request)?);
        options.extend(self.night_pass_option(request)?);
        options.push(self.unlimited_travelcard_option(request)?);
        options.extend(self.metered_option(request)?);

        for option in &options {
            log::debug!("{}: {:.2}", option.kind, option.total);
        }
        Ok(options)
    }

    /// Evaluates independent requests in parallel, results keep the input order
    pub fn calculate_batch(
        &self,
        requests: &[CalculationRequest],
    ) -> Vec<Result<CalculationResult, FareError>> {
        requests
            .par_iter()
            .map(|request| self.calculate(request))
            .collect()
    }
}

impl Default for FareCalculator {
    /// Calculator over the built-in price table
    fn default() -> Self {
        Self {
            pricing: Arc::new(PricingTable::default()),
        }
    }
}

impl FareSolver for FareCalculator {
    fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult, FareError> {
        request.validate()?;

        let options = self.assemble_options(request)?;
        let best_index = first_min_index(options.iter().map(|o| o.total))
            .ok_or_else(|| FareError::configuration("no option with a finite total"))?;

        log::info!(
            "best option for {} traveler: {} at {:.2}",
            request.profile.age_bracket,
            options[best_index].kind,
            options[best_index].total
        );

        Ok(CalculationResult {
            annual_baseline_spend: annual_baseline_spend(request),
            half_fare_ticket_spend: half_fare_discounted_spend(request),
            options,
            best_index,
            season_passes: self.season_pass_assessments(request),
        })
    }

    fn annual_baseline_spend(&self, request: &CalculationRequest) -> Money {
        annual_baseline_spend(request)
    }

    fn half_fare_discounted_spend(&self, request: &CalculationRequest) -> Money {
        half_fare_discounted_spend(request)
    }
}
