pub mod ml;
pub mod prediction_service;
