mod app_error;
mod cli;
pub mod report;
pub mod scenario;

pub use app_error::AppError;
pub use cli::{FareCliArguments, FareOperation};
