use crate::application::ml::predictor::ChargePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::insurance::{InputRecord, PredictionRequest, PredictionResult};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one set of form values into a prediction result.
///
/// Holds only a shared handle to the predictor, so clones are cheap and
/// requests are independent. No error escapes `predict`: every failure is
/// reported through `PredictionResult::Failure`.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn ChargePredictor>,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn ChargePredictor>) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &Arc<dyn ChargePredictor> {
        &self.predictor
    }

    /// Re-validates raw form values, then predicts.
    pub fn predict(&self, request: &PredictionRequest) -> PredictionResult {
        let outcome = InputRecord::try_from(request).and_then(|record| self.run(&record));
        self.finish(outcome)
    }

    pub fn predict_record(&self, record: &InputRecord) -> PredictionResult {
        let outcome = self.run(record);
        self.finish(outcome)
    }

    fn run(&self, record: &InputRecord) -> Result<f64, PredictionError> {
        let batch = std::slice::from_ref(record);

        // The predictor is a black box; a panic inside it is one more failed request.
        let predictions = panic::catch_unwind(AssertUnwindSafe(|| self.predictor.predict(batch)))
            .map_err(|payload| PredictionError::inference(panic_message(payload.as_ref())))??;

        let charges = predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::inference("No prediction returned"))?;

        if !charges.is_finite() {
            return Err(PredictionError::inference(format!(
                "model returned a non-finite estimate ({})",
                charges
            )));
        }
        Ok(charges)
    }

    fn finish(&self, outcome: Result<f64, PredictionError>) -> PredictionResult {
        match &outcome {
            Ok(charges) => debug!("Predicted charges {:.2} with {}", charges, self.predictor.name()),
            Err(e) => warn!("Prediction failed with {}: {}", self.predictor.name(), e),
        }
        PredictionResult::from(outcome)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("predictor panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("predictor panicked: {}", msg)
    } else {
        "predictor panicked".to_string()
    }
}
