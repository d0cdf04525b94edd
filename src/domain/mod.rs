pub mod errors;
pub mod insurance;
pub mod ml;
