use crate::domain::insurance::{
    AGE_RANGE, BMI_RANGE, CHILDREN_RANGE, PredictionRequest, Region, Sex, Smoker,
};

pub const DEFAULT_AGE: i64 = 35;
pub const DEFAULT_BMI: f64 = 28.5;
pub const DEFAULT_CHILDREN: i64 = 1;
pub const DEFAULT_SEX: Sex = Sex::Male;
pub const DEFAULT_SMOKER: Smoker = Smoker::No;
pub const DEFAULT_REGION: Region = Region::Northeast;

/// Input widget state: any field left empty falls back to its default.
///
/// Submitting behaves like bounded number inputs and select boxes: numbers
/// are clamped into their domain and bmi snaps to one decimal, categories
/// can only hold vocabulary values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub age: Option<i64>,
    pub bmi: Option<f64>,
    pub children: Option<i64>,
    pub sex: Option<Sex>,
    pub smoker: Option<Smoker>,
    pub region: Option<Region>,
}

impl PredictionForm {
    pub fn submit(&self) -> PredictionRequest {
        let age = self
            .age
            .unwrap_or(DEFAULT_AGE)
            .clamp(i64::from(*AGE_RANGE.start()), i64::from(*AGE_RANGE.end()));

        let bmi = self
            .bmi
            .filter(|b| b.is_finite())
            .unwrap_or(DEFAULT_BMI)
            .clamp(*BMI_RANGE.start(), *BMI_RANGE.end());
        let bmi = (bmi * 10.0).round() / 10.0;

        let children = self.children.unwrap_or(DEFAULT_CHILDREN).clamp(
            i64::from(*CHILDREN_RANGE.start()),
            i64::from(*CHILDREN_RANGE.end()),
        );

        PredictionRequest {
            age,
            bmi,
            children,
            sex: self.sex.unwrap_or(DEFAULT_SEX).label().to_string(),
            smoker: self.smoker.unwrap_or(DEFAULT_SMOKER).label().to_string(),
            region: self.region.unwrap_or(DEFAULT_REGION).label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_uses_defaults() {
        let req = PredictionForm::default().submit();
        assert_eq!(req.age, 35);
        assert_eq!(req.bmi, 28.5);
        assert_eq!(req.children, 1);
        assert_eq!(req.sex, "male");
        assert_eq!(req.smoker, "no");
        assert_eq!(req.region, "northeast");
    }

    #[test]
    fn test_numbers_are_clamped() {
        let form = PredictionForm {
            age: Some(200),
            bmi: Some(3.0),
            children: Some(-2),
            ..Default::default()
        };
        let req = form.submit();
        assert_eq!(req.age, 120);
        assert_eq!(req.bmi, 10.0);
        assert_eq!(req.children, 0);

        let form = PredictionForm {
            age: Some(-5),
            bmi: Some(99.9),
            children: Some(14),
            ..Default::default()
        };
        let req = form.submit();
        assert_eq!(req.age, 0);
        assert_eq!(req.bmi, 60.0);
        assert_eq!(req.children, 10);
    }

    #[test]
    fn test_bmi_snaps_to_one_decimal() {
        let form = PredictionForm {
            bmi: Some(27.46),
            ..Default::default()
        };
        assert_eq!(form.submit().bmi, 27.5);

        let form = PredictionForm {
            bmi: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(form.submit().bmi, DEFAULT_BMI);
    }

    #[test]
    fn test_selected_categories() {
        let form = PredictionForm {
            sex: Some(Sex::Female),
            smoker: Some(Smoker::Yes),
            region: Some(Region::Southwest),
            ..Default::default()
        };
        let req = form.submit();
        assert_eq!(req.sex, "female");
        assert_eq!(req.smoker, "yes");
        assert_eq!(req.region, "southwest");
    }
}
