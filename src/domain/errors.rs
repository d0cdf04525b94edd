use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the serialized pipeline artifact.
///
/// These are fatal: without a loaded model the process cannot serve any
/// prediction, so callers propagate them instead of recovering.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("Model artifact not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model artifact {path:?}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Inconsistent model artifact {path:?}: encoder produces {encoded} features, regressor was fit on {fitted}"
    )]
    WidthMismatch {
        path: PathBuf,
        encoded: usize,
        fitted: usize,
    },

    #[error("Unsupported artifact format in {path:?}: version {found}, expected {expected}")]
    UnsupportedFormat {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// Errors raised while assembling a record or running inference.
///
/// Every variant is per-request: the prediction service turns them into a
/// failure result and later requests are unaffected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Schema mismatch: {reason}")]
    SchemaMismatch { reason: String },

    #[error("Invalid {field}: {value} (allowed: {allowed})")]
    InvalidInput {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },
}

impl PredictionError {
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            reason: reason.into(),
        }
    }

    pub fn inference(reason: impl Into<String>) -> Self {
        Self::Inference {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_error_formatting() {
        let error = ArtifactLoadError::UnsupportedFormat {
            path: PathBuf::from("models/insurance_model.json"),
            found: 7,
            expected: 1,
        };

        let msg = error.to_string();
        assert!(msg.contains("insurance_model.json"));
        assert!(msg.contains("version 7"));
        assert!(msg.contains("expected 1"));
    }

    #[test]
    fn test_width_mismatch_formatting() {
        let error = ArtifactLoadError::WidthMismatch {
            path: PathBuf::from("models/insurance_model.json"),
            encoded: 12,
            fitted: 11,
        };

        let msg = error.to_string();
        assert!(msg.contains("produces 12 features"));
        assert!(msg.contains("fit on 11"));
    }

    #[test]
    fn test_invalid_input_formatting() {
        let error = PredictionError::InvalidInput {
            field: "region",
            value: "unknown".to_string(),
            allowed: "northeast, northwest, southeast, southwest".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("region"));
        assert!(msg.contains("unknown"));
        assert!(msg.contains("southwest"));
    }
}
