pub mod period;
pub mod selection;
