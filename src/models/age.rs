// Age bracket, credit category and travel class

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bracket of a traveler, selects the price row in the pricing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeBracket {
    Child,
    Youth,
    TwentyFive,
    Adult,
    Senior,
    Disability,
}

impl AgeBracket {
    /// Every bracket, in table order
    pub const ALL: [AgeBracket; 6] = [
        AgeBracket::Child,
        AgeBracket::Youth,
        AgeBracket::TwentyFive,
        AgeBracket::Adult,
        AgeBracket::Senior,
        AgeBracket::Disability,
    ];

    /// The credit category this bracket falls into for half-fare-plus packages.
    /// Child and youth share the youth packages, every other bracket buys adult ones.
    pub fn default_credit_category(self) -> Option<CreditCategory> {
        match self {
            AgeBracket::Child | AgeBracket::Youth => Some(CreditCategory::Youth),
            AgeBracket::TwentyFive
            | AgeBracket::Adult
            | AgeBracket::Senior
            | AgeBracket::Disability => Some(CreditCategory::Adult),
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgeBracket::Child => "child",
            AgeBracket::Youth => "youth",
            AgeBracket::TwentyFive => "twenty-five",
            AgeBracket::Adult => "adult",
            AgeBracket::Senior => "senior",
            AgeBracket::Disability => "disability",
        };
        f.write_str(name)
    }
}

/// Bucket deciding which half-fare-plus package table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreditCategory {
    Youth,
    Adult,
}

impl fmt::Display for CreditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditCategory::Youth => f.write_str("youth"),
            CreditCategory::Adult => f.write_str("adult"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelClass {
    First,
    #[default]
    Second,
}

impl TravelClass {
    pub fn is_first(self) -> bool {
        self == TravelClass::First
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_category_mapping() {
        assert_eq!(
            AgeBracket::Child.default_credit_category(),
            Some(CreditCategory::Youth)
        );
        assert_eq!(
            AgeBracket::Youth.default_credit_category(),
            Some(CreditCategory::Youth)
        );
        for bracket in [
            AgeBracket::TwentyFive,
            AgeBracket::Adult,
            AgeBracket::Senior,
            AgeBracket::Disability,
        ] {
            assert_eq!(
                bracket.default_credit_category(),
                Some(CreditCategory::Adult),
                "{} should buy adult packages",
                bracket
            );
        }
    }

    #[test]
    fn test_bracket_serde_names() {
        let json = serde_json::to_string(&AgeBracket::TwentyFive).unwrap();
        assert_eq!(json, "\"twenty-five\"");
        let parsed: AgeBracket = serde_json::from_str("\"disability\"").unwrap();
        assert_eq!(parsed, AgeBracket::Disability);
    }
}
