use crate::domain::errors::PredictionError;
use crate::domain::insurance::InputRecord;
use crate::domain::ml::feature_registry::{
    ColumnKind, ColumnSpec, FEATURE_NAMES, FeatureValue, record_features,
};
use serde::{Deserialize, Serialize};

/// Column transformer stored inside a pipeline artifact.
///
/// Numeric columns pass through unchanged, categorical columns expand to one
/// 0/1 indicator per trained category. Output order follows the declared
/// column order, which is the order the regressor was fit on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OneHotEncoder {
    columns: Vec<ColumnSpec>,
}

impl OneHotEncoder {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Length of the encoded vector.
    pub fn output_width(&self) -> usize {
        self.columns.iter().map(ColumnSpec::width).sum()
    }

    /// Checks that the declared columns are exactly the record fields.
    pub fn check_schema(&self) -> Result<(), PredictionError> {
        let mut declared: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        declared.sort_unstable();

        let mut expected = FEATURE_NAMES.to_vec();
        expected.sort_unstable();

        if declared != expected {
            return Err(PredictionError::schema(format!(
                "pipeline expects columns [{}], record provides [{}]",
                declared.join(", "),
                expected.join(", ")
            )));
        }
        Ok(())
    }

    pub fn transform(&self, record: &InputRecord) -> Result<Vec<f64>, PredictionError> {
        self.check_schema()?;

        let features = record_features(record);
        let mut encoded = Vec::with_capacity(self.output_width());

        for column in &self.columns {
            let value = features
                .iter()
                .find(|(name, _)| *name == column.name)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    PredictionError::schema(format!("missing column '{}'", column.name))
                })?;

            match (&column.kind, value) {
                (ColumnKind::Numeric, FeatureValue::Numeric(x)) => encoded.push(x),
                (ColumnKind::Categorical { categories }, FeatureValue::Category(label)) => {
                    if !categories.iter().any(|c| c == label) {
                        return Err(PredictionError::schema(format!(
                            "unknown category '{}' for column '{}' (trained on: {})",
                            label,
                            column.name,
                            categories.join(", ")
                        )));
                    }
                    encoded.extend(
                        categories
                            .iter()
                            .map(|c| if c == label { 1.0 } else { 0.0 }),
                    );
                }
                (ColumnKind::Numeric, FeatureValue::Category(_)) => {
                    return Err(PredictionError::schema(format!(
                        "column '{}' is numeric in the pipeline but categorical in the record",
                        column.name
                    )));
                }
                (ColumnKind::Categorical { .. }, FeatureValue::Numeric(_)) => {
                    return Err(PredictionError::schema(format!(
                        "column '{}' is categorical in the pipeline but numeric in the record",
                        column.name
                    )));
                }
            }
        }

        Ok(encoded)
    }
}
