// Calculation request, the normalized input of the fare calculator

use crate::error::FareError;
use crate::models::{ExtraBudget, Money, Months, Route, TravelerProfile};
use crate::utils::period::MONTHS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// How the traveler's spend is described
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelPattern {
    /// Individual recurring routes
    Routes(Vec<Route>),

    /// A single aggregate annual spend, e.g. extracted from a receipt
    Direct {
        annual_spend: Money,
        #[serde(default)]
        half_fare_discounted: bool,
    },
}

impl TravelPattern {
    pub fn routes(&self) -> &[Route] {
        match self {
            TravelPattern::Routes(routes) => routes,
            TravelPattern::Direct { .. } => &[],
        }
    }
}

/// Everything the calculator needs for one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub profile: TravelerProfile,

    pub pattern: TravelPattern,

    /// Spend not tied to any route
    #[serde(default)]
    pub extra_budget: Option<ExtraBudget>,

    /// Buy further half-fare-plus packages once the credit is used up
    #[serde(default = "default_allow_reload")]
    pub allow_reload: bool,
}

fn default_allow_reload() -> bool {
    true
}

impl CalculationRequest {
    pub fn with_routes(profile: TravelerProfile, routes: Vec<Route>) -> Self {
        Self {
            profile,
            pattern: TravelPattern::Routes(routes),
            extra_budget: None,
            allow_reload: true,
        }
    }

    pub fn direct(profile: TravelerProfile, annual_spend: Money) -> Self {
        Self {
            profile,
            pattern: TravelPattern::Direct {
                annual_spend,
                half_fare_discounted: false,
            },
            extra_budget: None,
            allow_reload: true,
        }
    }

    pub fn with_extra_budget(mut self, extra_budget: ExtraBudget) -> Self {
        self.extra_budget = Some(extra_budget);
        self
    }

    pub fn with_reload(mut self, allow_reload: bool) -> Self {
        self.allow_reload = allow_reload;
        self
    }

    /// Extra budget, ignoring an empty one
    pub fn active_extra_budget(&self) -> Option<&ExtraBudget> {
        self.extra_budget.as_ref().filter(|b| !b.is_empty())
    }

    /// Number of months the traveler needs a subscription for
    pub fn travel_months(&self) -> Months {
        match &self.pattern {
            TravelPattern::Direct { .. } => MONTHS_PER_YEAR,
            TravelPattern::Routes(routes) => {
                if routes.is_empty() || self.active_extra_budget().is_some() {
                    MONTHS_PER_YEAR
                } else {
                    routes
                        .iter()
                        .map(|r| r.duration_months)
                        .max()
                        .unwrap_or(MONTHS_PER_YEAR)
                }
            }
        }
    }

    /// Checks every numeric input, failing on the first offending value
    pub fn validate(&self) -> Result<(), FareError> {
        self.profile.validate()?;
        match &self.pattern {
            TravelPattern::Routes(routes) => {
                for route in routes {
                    route.validate()?;
                }
            }
            TravelPattern::Direct { annual_spend, .. } => {
                if !annual_spend.is_finite() || *annual_spend < 0.0 {
                    return Err(FareError::invalid_input(format!(
                        "direct annual spend {} must be a non-negative amount",
                        annual_spend
                    )));
                }
            }
        }
        if let Some(budget) = &self.extra_budget {
            budget.validate()?;
        }
        Ok(())
    }
}
