use crate::domain::errors::PredictionError;
use crate::domain::insurance::InputRecord;

/// Interface for a trained charge-estimation pipeline.
///
/// Implementations own their feature encoding; callers only ever hand over
/// validated records. Loaded once and shared read-only across requests.
pub trait ChargePredictor: Send + Sync {
    /// Predict one charge per record, in input order.
    fn predict(&self, records: &[InputRecord]) -> Result<Vec<f64>, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
