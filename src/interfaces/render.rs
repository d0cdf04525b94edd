use crate::domain::insurance::PredictionResult;

pub const SUCCESS_CAPTION: &str = "This is a model estimate based on your inputs.";
pub const FAILURE_HEADLINE: &str =
    "Prediction failed. Make sure the model file matches these inputs.";

pub const ABOUT_TEXT: &str = "\
How this works

The model is a pipeline that one-hot encodes the categorical columns
(sex, smoker, region) and feeds them, together with age, bmi and
children, to a random forest regressor trained on the insurance charges
dataset to predict charges.";

/// Formats an amount as dollars with thousands separators, e.g. `$12,345.67`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

pub fn render_text(result: &PredictionResult) -> String {
    match result {
        PredictionResult::Success { charges } => format!(
            "Estimated Charges: {}\n{}",
            format_currency(*charges),
            SUCCESS_CAPTION
        ),
        PredictionResult::Failure { message } => format!("{}\n{}", FAILURE_HEADLINE, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(12345.678), "$12,345.68");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-2500.0), "-$2,500.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_render_success() {
        let text = render_text(&PredictionResult::success(8240.589));
        assert_eq!(
            text,
            "Estimated Charges: $8,240.59\nThis is a model estimate based on your inputs."
        );
    }

    #[test]
    fn test_render_failure_keeps_underlying_error() {
        let text = render_text(&PredictionResult::failure("Schema mismatch: missing column 'bmi'"));
        assert!(text.starts_with(FAILURE_HEADLINE));
        assert!(text.ends_with("missing column 'bmi'"));
    }
}
