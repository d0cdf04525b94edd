#![allow(dead_code)]

use insurance_predictor::application::ml::encoder::OneHotEncoder;
use insurance_predictor::application::ml::smartcore_predictor::{Forest, PipelineArtifact};
use insurance_predictor::domain::insurance::{InputRecord, Region, Sex, Smoker};
use insurance_predictor::domain::ml::feature_registry::default_columns;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Synthetic charges: rise with age, bmi and children, jump for smokers.
pub fn synthetic_charges(record: &InputRecord) -> f64 {
    let mut charges = 1500.0
        + 260.0 * f64::from(record.age())
        + 320.0 * (record.bmi() - 10.0)
        + 475.0 * f64::from(record.children());
    if record.smoker() == Smoker::Yes {
        charges += 23_000.0;
    }
    if record.sex() == Sex::Male {
        charges += 150.0;
    }
    charges
        + match record.region() {
            Region::Northeast => 900.0,
            Region::Northwest => 450.0,
            Region::Southeast => 300.0,
            Region::Southwest => 0.0,
        }
}

pub fn training_records() -> Vec<InputRecord> {
    let mut records = Vec::new();
    for (i, age) in (18..=64).step_by(3).enumerate() {
        for &sex in Sex::ALL {
            for &smoker in Smoker::ALL {
                for (j, &region) in Region::ALL.iter().enumerate() {
                    let bmi = 18.0 + ((i * 7 + j * 5) % 25) as f64;
                    let children = ((i + j) % 5) as u32;
                    records.push(
                        InputRecord::new(age, bmi, children, sex, smoker, region).unwrap(),
                    );
                }
            }
        }
    }
    records
}

/// Fits a small forest over the default column layout.
pub fn fit_artifact() -> PipelineArtifact {
    let encoder = OneHotEncoder::new(default_columns());
    let records = training_records();

    let x: Vec<Vec<f64>> = records
        .iter()
        .map(|r| encoder.transform(r).unwrap())
        .collect();
    let y: Vec<f64> = records.iter().map(synthetic_charges).collect();
    let n_features = x[0].len();

    let matrix = DenseMatrix::from_2d_vec(&x).unwrap();
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(10)
        .with_max_depth(8);
    let model = Forest::fit(&matrix, &y, params).unwrap();

    PipelineArtifact::new(encoder, model, n_features)
}

pub fn write_artifact(dir: &Path, artifact: &PipelineArtifact) -> PathBuf {
    let path = dir.join("insurance_model.json");
    let file = File::create(&path).unwrap();
    serde_json::to_writer(file, artifact).unwrap();
    path
}
