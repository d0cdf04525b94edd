use crate::domain::errors::PredictionError;
use serde::Serialize;

/// Outcome of one prediction attempt. Exactly one side is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionResult {
    Success { charges: f64 },
    Failure { message: String },
}

impl PredictionResult {
    pub fn success(charges: f64) -> Self {
        Self::Success { charges }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn charges(&self) -> Option<f64> {
        match self {
            Self::Success { charges } => Some(*charges),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

impl From<Result<f64, PredictionError>> for PredictionResult {
    fn from(outcome: Result<f64, PredictionError>) -> Self {
        match outcome {
            Ok(charges) => Self::success(charges),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
