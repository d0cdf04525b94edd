//! Insurance charge predictor - command-line front end
//!
//! Collects the six record fields (flags, or prompts on stderr with `--interactive`),
//! runs them through the pre-trained pipeline and prints the estimate.
//!
//! # Usage
//! ```sh
//! insurance-predictor --age 52 --bmi 33.1 --smoker yes --region southwest
//! MODEL_PATH=models/insurance_model.json insurance-predictor --interactive
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Pipeline artifact location (default: models/insurance_model.json)
//! - `OUTPUT_FORMAT` - `text` or `json` (default: text)
//! - `RUST_LOG` - Log filter (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use insurance_predictor::application::ml::model_loader::ModelLoader;
use insurance_predictor::application::prediction_service::PredictionService;
use insurance_predictor::config::{AppConfig, OutputFormat};
use insurance_predictor::domain::errors::PredictionError;
use insurance_predictor::domain::insurance::{Region, Sex, Smoker};
use insurance_predictor::interfaces::form::PredictionForm;
use insurance_predictor::interfaces::prompt::prompt_form;
use insurance_predictor::interfaces::render::{ABOUT_TEXT, render_text};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate insurance charges from six personal attributes")]
struct Args {
    /// Age in whole years (0-120, default 35)
    #[arg(long, allow_negative_numbers = true)]
    age: Option<i64>,

    /// Body-mass index (10.0-60.0, default 28.5)
    #[arg(long, allow_negative_numbers = true)]
    bmi: Option<f64>,

    /// Number of children (0-10, default 1)
    #[arg(long, allow_negative_numbers = true)]
    children: Option<i64>,

    /// male or female (default male)
    #[arg(long, value_parser = vocabulary::<Sex>)]
    sex: Option<Sex>,

    /// yes or no (default no)
    #[arg(long, value_parser = vocabulary::<Smoker>)]
    smoker: Option<Smoker>,

    /// northeast, northwest, southeast or southwest (default northeast)
    #[arg(long, value_parser = vocabulary::<Region>)]
    region: Option<Region>,

    /// Prompt for each field on stdin, pre-filled from the flags
    #[arg(short, long)]
    interactive: bool,

    /// Path to the pipeline artifact (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print the result as JSON (overrides OUTPUT_FORMAT)
    #[arg(long)]
    json: bool,

    /// Explain how the estimate is produced and exit
    #[arg(long)]
    about: bool,
}

fn vocabulary<T: FromStr<Err = PredictionError>>(s: &str) -> Result<T, String> {
    s.parse().map_err(|e: PredictionError| e.to_string())
}

fn main() -> Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    if args.about {
        println!("{}", ABOUT_TEXT);
        return Ok(ExitCode::SUCCESS);
    }

    // Logs go to stderr, stdout carries the rendered result
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let mut config = AppConfig::from_env()?;
    if let Some(model) = args.model.clone() {
        config.model_path = model;
    }
    if args.json {
        config.output_format = OutputFormat::Json;
    }
    info!("Configuration loaded: model={:?}", config.model_path);

    // No request is accepted until the model is ready
    let loader = ModelLoader::new(config.model_path.clone());
    let predictor = loader
        .load()
        .with_context(|| format!("Cannot start without a model ({:?})", loader.model_path()))?;
    let service = PredictionService::new(predictor);

    let mut form = PredictionForm {
        age: args.age,
        bmi: args.bmi,
        children: args.children,
        sex: args.sex,
        smoker: args.smoker,
        region: args.region,
    };
    // Prompts go to stderr so stdout only ever holds the result
    if args.interactive {
        let stdin = std::io::stdin();
        form = prompt_form(&mut stdin.lock(), &mut std::io::stderr(), &form)?;
    }

    let result = service.predict(&form.submit());

    match config.output_format {
        OutputFormat::Text => println!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
