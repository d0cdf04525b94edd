use crate::domain::insurance::{InputRecord, Region, Sex, Smoker};
use serde::{Deserialize, Serialize};

/// Column names of the training table, in training order.
/// A pipeline artifact must declare exactly this set of columns.
pub const FEATURE_NAMES: &[&str] = &["age", "sex", "bmi", "children", "smoker", "region"];

/// A single cell of the one-row table handed to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Category(&'static str),
}

/// Declared layout of one input column of a pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    /// Expanded to one indicator per category, in the listed order.
    Categorical { categories: Vec<String> },
}

impl ColumnSpec {
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Numeric,
        }
    }

    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Categorical {
                categories: categories.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Number of model inputs this column expands to.
    pub fn width(&self) -> usize {
        match &self.kind {
            ColumnKind::Numeric => 1,
            ColumnKind::Categorical { categories } => categories.len(),
        }
    }
}

/// Named cells of a record, in `FEATURE_NAMES` order.
pub fn record_features(record: &InputRecord) -> [(&'static str, FeatureValue); 6] {
    [
        ("age", FeatureValue::Numeric(f64::from(record.age()))),
        ("sex", FeatureValue::Category(record.sex().label())),
        ("bmi", FeatureValue::Numeric(record.bmi())),
        ("children", FeatureValue::Numeric(f64::from(record.children()))),
        ("smoker", FeatureValue::Category(record.smoker().label())),
        ("region", FeatureValue::Category(record.region().label())),
    ]
}

/// The column layout matching the record vocabulary.
/// Categories are sorted, the order a one-hot encoder learns them in.
pub fn default_columns() -> Vec<ColumnSpec> {
    let sorted = |mut labels: Vec<&'static str>| {
        labels.sort_unstable();
        labels
    };

    vec![
        ColumnSpec::numeric("age"),
        ColumnSpec::categorical("sex", sorted(Sex::ALL.iter().map(|s| s.label()).collect())),
        ColumnSpec::numeric("bmi"),
        ColumnSpec::numeric("children"),
        ColumnSpec::categorical(
            "smoker",
            sorted(Smoker::ALL.iter().map(|s| s.label()).collect()),
        ),
        ColumnSpec::categorical(
            "region",
            sorted(Region::ALL.iter().map(|r| r.label()).collect()),
        ),
    ]
}
