use crate::error::FareError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("fare calculation failed: {source}")]
    Fare {
        #[from]
        source: FareError,
    },
    #[error("failure reading file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
