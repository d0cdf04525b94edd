pub mod encoder;
pub mod model_loader;
pub mod predictor;
pub mod smartcore_predictor;
