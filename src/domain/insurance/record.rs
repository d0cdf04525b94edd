use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const AGE_RANGE: RangeInclusive<u32> = 0..=120;
pub const BMI_RANGE: RangeInclusive<f64> = 10.0..=60.0;
pub const CHILDREN_RANGE: RangeInclusive<u32> = 0..=10;

/// Declares a fixed-vocabulary categorical field.
///
/// The lowercase label is what the pipeline was trained on, so it doubles as
/// the serde name and the value looked up by the encoder.
macro_rules! vocabulary {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn allowed() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = PredictionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label => Ok($name::$variant),)+
                    _ => Err(PredictionError::InvalidInput {
                        field: $field,
                        value: s.to_string(),
                        allowed: Self::allowed(),
                    }),
                }
            }
        }
    };
}

vocabulary!(Sex, "sex", {
    Male => "male",
    Female => "female",
});

vocabulary!(Smoker, "smoker", {
    Yes => "yes",
    No => "no",
});

vocabulary!(Region, "region", {
    Northeast => "northeast",
    Northwest => "northwest",
    Southeast => "southeast",
    Southwest => "southwest",
});

/// One validated query to the predictor.
///
/// Fields are private so a record can only exist with every value inside
/// its domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputRecord {
    age: u32,
    bmi: f64,
    children: u32,
    sex: Sex,
    smoker: Smoker,
    region: Region,
}

impl InputRecord {
    pub fn new(
        age: u32,
        bmi: f64,
        children: u32,
        sex: Sex,
        smoker: Smoker,
        region: Region,
    ) -> Result<Self, PredictionError> {
        if !AGE_RANGE.contains(&age) {
            return Err(out_of_range("age", age, &AGE_RANGE));
        }
        if !bmi.is_finite() || !BMI_RANGE.contains(&bmi) {
            return Err(PredictionError::InvalidInput {
                field: "bmi",
                value: bmi.to_string(),
                allowed: format!("{:.1}..={:.1}", BMI_RANGE.start(), BMI_RANGE.end()),
            });
        }
        if !CHILDREN_RANGE.contains(&children) {
            return Err(out_of_range("children", children, &CHILDREN_RANGE));
        }

        Ok(Self {
            age,
            bmi,
            children,
            sex,
            smoker,
            region,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn smoker(&self) -> Smoker {
        self.smoker
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

fn out_of_range<T: fmt::Display>(
    field: &'static str,
    value: T,
    range: &RangeInclusive<T>,
) -> PredictionError {
    PredictionError::InvalidInput {
        field,
        value: value.to_string(),
        allowed: format!("{}..={}", range.start(), range.end()),
    }
}

/// Raw values as submitted by an input surface, before any validation.
///
/// Numeric fields are signed so that negative input reaches validation
/// instead of being rejected by the type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub age: i64,
    pub bmi: f64,
    pub children: i64,
    pub sex: String,
    pub smoker: String,
    pub region: String,
}

impl TryFrom<&PredictionRequest> for InputRecord {
    type Error = PredictionError;

    fn try_from(req: &PredictionRequest) -> Result<Self, Self::Error> {
        let age =
            u32::try_from(req.age).map_err(|_| out_of_range_i64("age", req.age, &AGE_RANGE))?;
        let children = u32::try_from(req.children)
            .map_err(|_| out_of_range_i64("children", req.children, &CHILDREN_RANGE))?;

        InputRecord::new(
            age,
            req.bmi,
            children,
            req.sex.parse()?,
            req.smoker.parse()?,
            req.region.parse()?,
        )
    }
}

impl From<&InputRecord> for PredictionRequest {
    fn from(record: &InputRecord) -> Self {
        Self {
            age: i64::from(record.age),
            bmi: record.bmi,
            children: i64::from(record.children),
            sex: record.sex.label().to_string(),
            smoker: record.smoker.label().to_string(),
            region: record.region.label().to_string(),
        }
    }
}

fn out_of_range_i64(
    field: &'static str,
    value: i64,
    range: &RangeInclusive<u32>,
) -> PredictionError {
    PredictionError::InvalidInput {
        field,
        value: value.to_string(),
        allowed: format!("{}..={}", range.start(), range.end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PredictionRequest {
        PredictionRequest {
            age: 35,
            bmi: 28.5,
            children: 1,
            sex: "male".to_string(),
            smoker: "no".to_string(),
            region: "northeast".to_string(),
        }
    }

    #[test]
    fn test_vocabulary_parsing_is_case_insensitive() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" YES ".parse::<Smoker>().unwrap(), Smoker::Yes);
        assert_eq!("southWest".parse::<Region>().unwrap(), Region::Southwest);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "unknown".parse::<Region>().unwrap_err();
        match err {
            PredictionError::InvalidInput { field, value, allowed } => {
                assert_eq!(field, "region");
                assert_eq!(value, "unknown");
                assert_eq!(allowed, "northeast, northwest, southeast, southwest");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_record_accepts_domain_bounds() {
        assert!(InputRecord::new(0, 10.0, 0, Sex::Female, Smoker::No, Region::Southwest).is_ok());
        assert!(InputRecord::new(120, 60.0, 10, Sex::Male, Smoker::Yes, Region::Northeast).is_ok());
    }

    #[test]
    fn test_record_rejects_out_of_domain() {
        assert!(InputRecord::new(121, 28.5, 1, Sex::Male, Smoker::No, Region::Northeast).is_err());
        assert!(InputRecord::new(35, 9.9, 1, Sex::Male, Smoker::No, Region::Northeast).is_err());
        assert!(InputRecord::new(35, 60.1, 1, Sex::Male, Smoker::No, Region::Northeast).is_err());
        assert!(InputRecord::new(35, f64::NAN, 1, Sex::Male, Smoker::No, Region::Northeast).is_err());
        assert!(InputRecord::new(35, 28.5, 11, Sex::Male, Smoker::No, Region::Northeast).is_err());
    }

    #[test]
    fn test_bmi_error_lists_decimal_bounds() {
        let err =
            InputRecord::new(35, 61.0, 1, Sex::Male, Smoker::No, Region::Northeast).unwrap_err();
        match err {
            PredictionError::InvalidInput { field, value, allowed } => {
                assert_eq!(field, "bmi");
                assert_eq!(value, "61");
                assert_eq!(allowed, "10.0..=60.0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_request_conversion() {
        let record = InputRecord::try_from(&request()).unwrap();
        assert_eq!(record.age(), 35);
        assert_eq!(record.sex(), Sex::Male);
        assert_eq!(record.region(), Region::Northeast);
        assert_eq!(PredictionRequest::from(&record), request());
    }

    #[test]
    fn test_request_negative_values_rejected() {
        let req = PredictionRequest {
            age: -1,
            ..request()
        };
        let err = InputRecord::try_from(&req).unwrap_err();
        assert!(err.to_string().contains("age"));
        assert!(err.to_string().contains("-1"));

        let req = PredictionRequest {
            children: -3,
            ..request()
        };
        assert!(InputRecord::try_from(&req).is_err());
    }
}
