//! Configuration loading from environment variables.
//!
//! The model location is a deployment-level setting, never part of a
//! prediction request.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_MODEL_PATH: &str = "models/insurance_model.json";

/// How the front end prints a prediction result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid OUTPUT_FORMAT: {}. Must be 'text' or 'json'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            output_format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let output_format_str = env::var("OUTPUT_FORMAT").unwrap_or_else(|_| "text".to_string());
        let output_format = OutputFormat::from_str(&output_format_str)?;

        Ok(Self {
            model_path,
            output_format,
        })
    }
}
