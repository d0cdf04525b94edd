//! The single entity of the system and the outcome of querying it.

mod record;
mod result;

pub use record::{
    AGE_RANGE, BMI_RANGE, CHILDREN_RANGE, InputRecord, PredictionRequest, Region, Sex, Smoker,
};
pub use result::PredictionResult;
