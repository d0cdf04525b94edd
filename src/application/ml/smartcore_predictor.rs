use super::encoder::OneHotEncoder;
use super::predictor::ChargePredictor;
use crate::domain::errors::{ArtifactLoadError, PredictionError};
use crate::domain::insurance::InputRecord;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Artifact layout version understood by this build.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

pub type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Serialized form of a complete pipeline: column encoding plus regressor.
#[derive(Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub format_version: u32,
    pub encoder: OneHotEncoder,
    /// Encoded width the regressor was fit on.
    pub n_features: usize,
    pub model: Forest,
}

impl PipelineArtifact {
    /// `n_features` is the column count of the matrix `model` was fit on.
    pub fn new(encoder: OneHotEncoder, model: Forest, n_features: usize) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            encoder,
            n_features,
            model,
        }
    }
}

pub struct SmartCorePredictor {
    artifact: PipelineArtifact,
    model_path: Option<PathBuf>,
}

impl SmartCorePredictor {
    pub fn load(model_path: &Path) -> Result<Self, ArtifactLoadError> {
        if !model_path.exists() {
            return Err(ArtifactLoadError::NotFound {
                path: model_path.to_path_buf(),
            });
        }

        let file = File::open(model_path).map_err(|source| ArtifactLoadError::Io {
            path: model_path.to_path_buf(),
            source,
        })?;

        let artifact: PipelineArtifact =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                if source.is_io() {
                    ArtifactLoadError::Io {
                        path: model_path.to_path_buf(),
                        source: source.into(),
                    }
                } else {
                    ArtifactLoadError::Deserialize {
                        path: model_path.to_path_buf(),
                        source,
                    }
                }
            })?;

        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactLoadError::UnsupportedFormat {
                path: model_path.to_path_buf(),
                found: artifact.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }

        if artifact.encoder.output_width() != artifact.n_features {
            return Err(ArtifactLoadError::WidthMismatch {
                path: model_path.to_path_buf(),
                encoded: artifact.encoder.output_width(),
                fitted: artifact.n_features,
            });
        }

        info!(
            "Loaded pipeline from {:?} ({} columns, {} encoded features)",
            model_path,
            artifact.encoder.columns().len(),
            artifact.n_features
        );

        Ok(Self {
            artifact,
            model_path: Some(model_path.to_path_buf()),
        })
    }

    pub fn from_artifact(artifact: PipelineArtifact) -> Self {
        Self {
            artifact,
            model_path: None,
        }
    }

    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    fn encode(&self, records: &[InputRecord]) -> Result<Vec<Vec<f64>>, PredictionError> {
        let encoder = &self.artifact.encoder;
        if encoder.output_width() != self.artifact.n_features {
            return Err(PredictionError::schema(format!(
                "encoder produces {} features but the regressor was fit on {}",
                encoder.output_width(),
                self.artifact.n_features
            )));
        }

        records.iter().map(|r| encoder.transform(r)).collect()
    }
}

impl ChargePredictor for SmartCorePredictor {
    fn predict(&self, records: &[InputRecord]) -> Result<Vec<f64>, PredictionError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self.encode(records)?;
        let input_matrix = DenseMatrix::from_2d_vec(&rows)
            .map_err(|e| PredictionError::inference(format!("Matrix creation failed: {}", e)))?;

        let predictions = self
            .artifact
            .model
            .predict(&input_matrix)
            .map_err(|e| PredictionError::inference(e.to_string()))?;

        if predictions.len() != records.len() {
            return Err(PredictionError::inference(format!(
                "expected {} predictions, model returned {}",
                records.len(),
                predictions.len()
            )));
        }
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest Pipeline"
    }

    fn version(&self) -> &str {
        "v1"
    }
}
