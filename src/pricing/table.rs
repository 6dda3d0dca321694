// Static price table for half-fare, half-fare-plus, travelcards and the night pass

use crate::error::FareError;
use crate::models::{AgeBracket, CreditCategory, CreditPackage, Money, TravelClass};
use serde::{Deserialize, Serialize};

/// Prices of one age bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketPrices {
    pub bracket: AgeBracket,

    /// Half-fare card, first purchase
    pub half_fare_new: Money,

    /// Half-fare card, renewal by an existing customer
    pub half_fare_loyalty: Money,

    pub unlimited_second: Money,
    pub unlimited_first: Money,

    /// Unlimited travelcard billed per month
    pub monthly_second: Money,
    pub monthly_first: Money,

    /// Half-fare-plus package table this bracket buys from, none if not offered
    #[serde(default)]
    pub credit_category: Option<CreditCategory>,
}

/// Half-fare-plus packages of one credit category, ordered by credit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPackages {
    pub category: CreditCategory,
    pub packages: Vec<CreditPackage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightPassTerms {
    pub price: Money,
    pub eligible_brackets: Vec<AgeBracket>,
    #[serde(default = "default_second_class_only")]
    pub second_class_only: bool,
}

fn default_second_class_only() -> bool {
    true
}

/// Terms of the third-party metered subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteredTerms {
    /// Share taken off the metered ticket spend
    pub discount_rate: f64,

    /// Cap each month's bill at the monthly unlimited travelcard price
    #[serde(default = "default_cap")]
    pub cap_at_monthly_travelcard: bool,
}

fn default_cap() -> bool {
    true
}

/// Read-only lookup of every price the calculator needs.
///
/// The table is plain data: one row per age bracket, one package list per
/// credit category and the night pass / metered plan terms. Lookups only
/// fail when a row is missing, which `validate` rules out for loaded tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub brackets: Vec<BracketPrices>,
    pub credit_packages: Vec<CategoryPackages>,
    pub night_pass: NightPassTerms,
    #[serde(default)]
    pub metered: Option<MeteredTerms>,
}

impl PricingTable {
    /// Parses and validates a table from TOML
    pub fn from_toml_str(source: &str) -> Result<Self, FareError> {
        let table: PricingTable = toml::from_str(source)
            .map_err(|e| FareError::configuration(format!("unreadable pricing table: {}", e)))?;
        table.validate()?;
        if table.metered.is_none() {
            log::warn!("pricing table has no metered plan terms, metered plan will not be compared");
        }
        Ok(table)
    }

    pub fn to_toml_string(&self) -> Result<String, FareError> {
        toml::to_string_pretty(self)
            .map_err(|e| FareError::configuration(format!("cannot serialize pricing table: {}", e)))
    }

    fn row(&self, bracket: AgeBracket) -> Result<&BracketPrices, FareError> {
        self.brackets
            .iter()
            .find(|row| row.bracket == bracket)
            .ok_or_else(|| FareError::configuration(format!("no price row for bracket {}", bracket)))
    }

    /// Half-fare card price, the new-customer price when `new_customer` is set
    pub fn half_fare_price(&self, bracket: AgeBracket, new_customer: bool) -> Result<Money, FareError> {
        let row = self.row(bracket)?;
        Ok(if new_customer {
            row.half_fare_new
        } else {
            row.half_fare_loyalty
        })
    }

    /// Annual unlimited travelcard price
    pub fn unlimited_travelcard_price(
        &self,
        bracket: AgeBracket,
        class: TravelClass,
    ) -> Result<Money, FareError> {
        let row = self.row(bracket)?;
        Ok(match class {
            TravelClass::First => row.unlimited_first,
            TravelClass::Second => row.unlimited_second,
        })
    }

    /// Unlimited travelcard price for a single month
    pub fn monthly_unlimited_travelcard_price(
        &self,
        bracket: AgeBracket,
        class: TravelClass,
    ) -> Result<Money, FareError> {
        let row = self.row(bracket)?;
        Ok(match class {
            TravelClass::First => row.monthly_first,
            TravelClass::Second => row.monthly_second,
        })
    }

    /// Credit category the bracket buys half-fare-plus packages in
    pub fn credit_category(&self, bracket: AgeBracket) -> Result<Option<CreditCategory>, FareError> {
        Ok(self.row(bracket)?.credit_category)
    }

    /// Packages of a credit category, ordered by increasing credit
    pub fn credit_packages(&self, category: CreditCategory) -> Result<&[CreditPackage], FareError> {
        self.credit_packages
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.packages.as_slice())
            .ok_or_else(|| {
                FareError::configuration(format!("no credit packages for category {}", category))
            })
    }

    pub fn night_pass_price(&self) -> Money {
        self.night_pass.price
    }

    pub fn is_night_pass_eligible(&self, bracket: AgeBracket, class: TravelClass) -> bool {
        if self.night_pass.second_class_only && class.is_first() {
            return false;
        }
        self.night_pass.eligible_brackets.contains(&bracket)
    }

    pub fn metered_terms(&self) -> Option<&MeteredTerms> {
        self.metered.as_ref()
    }

    /// Checks the invariants the calculator relies on
    pub fn validate(&self) -> Result<(), FareError> {
        for bracket in AgeBracket::ALL {
            let row = self.row(bracket)?;
            let prices = [
                row.half_fare_new,
                row.half_fare_loyalty,
                row.unlimited_second,
                row.unlimited_first,
                row.monthly_second,
                row.monthly_first,
            ];
            if prices.iter().any(|p| !p.is_finite() || *p < 0.0) {
                return Err(FareError::configuration(format!(
                    "bracket {} has a negative or non-finite price",
                    bracket
                )));
            }
            if row.half_fare_new < row.half_fare_loyalty {
                return Err(FareError::configuration(format!(
                    "bracket {}: new-customer half-fare price below loyalty price",
                    bracket
                )));
            }
            if row.unlimited_first <= row.unlimited_second || row.monthly_first <= row.monthly_second {
                return Err(FareError::configuration(format!(
                    "bracket {}: first class must cost more than second class",
                    bracket
                )));
            }
            if let Some(category) = row.credit_category {
                self.credit_packages(category)?;
            }
        }

        for category in &self.credit_packages {
            validate_packages(category)?;
        }

        let youth = self.credit_packages(CreditCategory::Youth).ok();
        let adult = self.credit_packages(CreditCategory::Adult).ok();
        if let (Some(youth), Some(adult)) = (youth, adult) {
            if youth.len() != adult.len() {
                return Err(FareError::configuration(format!(
                    "youth and adult categories must offer the same tiers, got {} and {}",
                    youth.len(),
                    adult.len()
                )));
            }
            for (tier, (y, a)) in youth.iter().zip(adult.iter()).enumerate() {
                if y.credit != a.credit {
                    return Err(FareError::configuration(format!(
                        "tier {}: youth credit {} differs from adult credit {}",
                        tier + 1,
                        y.credit,
                        a.credit
                    )));
                }
                if y.cost >= a.cost {
                    return Err(FareError::configuration(format!(
                        "youth package for {} credit must be cheaper than the adult one",
                        y.credit
                    )));
                }
            }
        }

        if !self.night_pass.price.is_finite() || self.night_pass.price < 0.0 {
            return Err(FareError::configuration("night pass price must be non-negative"));
        }

        if let Some(metered) = &self.metered {
            if !(0.0..1.0).contains(&metered.discount_rate) {
                return Err(FareError::configuration(format!(
                    "metered discount rate {} outside [0, 1)",
                    metered.discount_rate
                )));
            }
        }

        Ok(())
    }
}

fn validate_packages(category: &CategoryPackages) -> Result<(), FareError> {
    if category.packages.is_empty() {
        return Err(FareError::configuration(format!(
            "credit category {} has no packages",
            category.category
        )));
    }
    for package in &category.packages {
        if !(package.cost > 0.0 && package.credit > package.cost) {
            return Err(FareError::configuration(format!(
                "{} package {}: credit must exceed a positive cost",
                category.category, package.credit
            )));
        }
    }
    for pair in category.packages.windows(2) {
        if pair[1].credit <= pair[0].credit || pair[1].cost <= pair[0].cost {
            return Err(FareError::configuration(format!(
                "{} packages must increase in credit and cost",
                category.category
            )));
        }
    }
    Ok(())
}

impl Default for PricingTable {
    /// Swiss prices in CHF
    fn default() -> Self {
        use AgeBracket::*;
        use CreditCategory::{Adult as AdultCredit, Youth as YouthCredit};

        let row = |bracket, hf_new, hf_loyalty, ga2, ga1, m2, m1, category| BracketPrices {
            bracket,
            half_fare_new: hf_new,
            half_fare_loyalty: hf_loyalty,
            unlimited_second: ga2,
            unlimited_first: ga1,
            monthly_second: m2,
            monthly_first: m1,
            credit_category: Some(category),
        };

        Self {
            brackets: vec![
                row(Child, 33.0, 33.0, 1720.0, 2830.0, 160.0, 265.0, YouthCredit),
                row(Youth, 100.0, 100.0, 2780.0, 4690.0, 260.0, 440.0, YouthCredit),
                row(TwentyFive, 190.0, 170.0, 3350.0, 5520.0, 315.0, 515.0, AdultCredit),
                row(Adult, 190.0, 170.0, 3995.0, 6520.0, 365.0, 595.0, AdultCredit),
                row(Senior, 190.0, 170.0, 3040.0, 4960.0, 285.0, 465.0, AdultCredit),
                row(Disability, 190.0, 170.0, 2760.0, 4490.0, 260.0, 420.0, AdultCredit),
            ],
            credit_packages: vec![
                CategoryPackages {
                    category: YouthCredit,
                    packages: vec![
                        CreditPackage::new(1000.0, 600.0),
                        CreditPackage::new(2000.0, 1100.0),
                        CreditPackage::new(3000.0, 1500.0),
                    ],
                },
                CategoryPackages {
                    category: AdultCredit,
                    packages: vec![
                        CreditPackage::new(1000.0, 800.0),
                        CreditPackage::new(2000.0, 1500.0),
                        CreditPackage::new(3000.0, 2100.0),
                    ],
                },
            ],
            night_pass: NightPassTerms {
                price: 99.0,
                eligible_brackets: vec![Youth, TwentyFive],
                second_class_only: true,
            },
            metered: Some(MeteredTerms {
                discount_rate: 0.1,
                cap_at_monthly_travelcard: true,
            }),
        }
    }
}
