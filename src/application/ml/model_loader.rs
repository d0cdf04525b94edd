use super::predictor::ChargePredictor;
use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::ArtifactLoadError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{error, info};

type LoadFn = dyn Fn(&Path) -> Result<Arc<dyn ChargePredictor>, ArtifactLoadError> + Send + Sync;

/// Resolves the artifact at a fixed path into a shared predictor.
///
/// The artifact is deserialized at most once per loader: the first
/// successful `load` caches the predictor and every later call gets the same
/// `Arc`. A failed load leaves the loader empty.
pub struct ModelLoader {
    model_path: PathBuf,
    load_fn: Box<LoadFn>,
    predictor: OnceLock<Arc<dyn ChargePredictor>>,
    init_lock: Mutex<()>,
}

impl ModelLoader {
    /// Loader for a smartcore pipeline artifact.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self::with_loader(model_path, |path| {
            let predictor: Arc<dyn ChargePredictor> = Arc::new(SmartCorePredictor::load(path)?);
            Ok(predictor)
        })
    }

    /// Loader with a custom deserializer, for other predictor backends.
    pub fn with_loader<F>(model_path: impl Into<PathBuf>, load_fn: F) -> Self
    where
        F: Fn(&Path) -> Result<Arc<dyn ChargePredictor>, ArtifactLoadError> + Send + Sync + 'static,
    {
        Self {
            model_path: model_path.into(),
            load_fn: Box::new(load_fn),
            predictor: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn is_loaded(&self) -> bool {
        self.predictor.get().is_some()
    }

    pub fn load(&self) -> Result<Arc<dyn ChargePredictor>, ArtifactLoadError> {
        if let Some(predictor) = self.predictor.get() {
            return Ok(Arc::clone(predictor));
        }

        // Serialize first loads so concurrent callers never deserialize twice.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(predictor) = self.predictor.get() {
            return Ok(Arc::clone(predictor));
        }

        match (self.load_fn)(&self.model_path) {
            Ok(predictor) => {
                info!(
                    "Model ready: {} {} ({:?})",
                    predictor.name(),
                    predictor.version(),
                    self.model_path
                );
                Ok(Arc::clone(self.predictor.get_or_init(|| predictor)))
            }
            Err(e) => {
                error!("Failed to load model: {}", e);
                Err(e)
            }
        }
    }
}
