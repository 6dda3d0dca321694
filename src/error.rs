// Error types for fare calculation

use thiserror::Error;

/// Errors raised by the pricing table and the fare calculator
#[derive(Error, Debug, Clone, PartialEq)]
#[allow(clippy::enum_variant_names)]
pub enum FareError {
    /// The pricing table has no entry for the requested combination, or the
    /// table itself breaks one of its invariants
    #[error("pricing configuration error: {0}")]
    ConfigurationError(String),

    /// A request carried a value the calculator refuses to work with
    #[error("invalid input: {0}")]
    InvalidInputError(String),
}

impl FareError {
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        FareError::ConfigurationError(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        FareError::InvalidInputError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FareError::configuration("no row for bracket senior");
        assert_eq!(
            err.to_string(),
            "pricing configuration error: no row for bracket senior"
        );

        let err = FareError::invalid_input("route 'commute': duration 13 outside 1..=12");
        assert!(err.to_string().starts_with("invalid input:"));
    }
}
