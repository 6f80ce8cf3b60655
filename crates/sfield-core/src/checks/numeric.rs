//! Precision and scale checks for Currency, Percent and Number.

use sfield_model::{MAX_PRECISION_PLUS_SCALE, NumericAttributes};

use super::undefined_number;

pub fn check(numeric: &NumericAttributes) -> Vec<String> {
    let mut issues = Vec::new();
    if undefined_number(numeric.precision) {
        issues.push("Bad number definition, precision not defined".to_string());
    }
    if undefined_number(numeric.scale) {
        issues.push("Bad number definition, scale not defined".to_string());
    }
    let precision = numeric.precision.and_then(|value| value.as_int());
    let scale = numeric.scale.and_then(|value| value.as_int());
    if let (Some(precision), Some(scale)) = (precision, scale)
        && precision.saturating_add(scale) > MAX_PRECISION_PLUS_SCALE
    {
        issues.push(format!(
            "Bad number definition, precision({precision})+scale({scale}) must be <= {MAX_PRECISION_PLUS_SCALE}"
        ));
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfield_model::IntValue;

    fn numeric(precision: Option<IntValue>, scale: Option<IntValue>) -> NumericAttributes {
        NumericAttributes { precision, scale }
    }

    #[test]
    fn sum_over_twenty_is_rejected() {
        let issues = check(&numeric(Some(IntValue::Int(15)), Some(IntValue::Int(10))));
        assert_eq!(
            issues,
            ["Bad number definition, precision(15)+scale(10) must be <= 20"]
        );
    }

    #[test]
    fn sum_within_limit_is_accepted() {
        assert!(check(&numeric(Some(IntValue::Int(10)), Some(IntValue::Int(5)))).is_empty());
        assert!(check(&numeric(Some(IntValue::Int(18)), Some(IntValue::Int(2)))).is_empty());
    }

    #[test]
    fn undefined_values_are_reported_independently() {
        let issues = check(&numeric(None, Some(IntValue::NotANumber)));
        assert_eq!(
            issues,
            [
                "Bad number definition, precision not defined",
                "Bad number definition, scale not defined",
            ]
        );
    }
}
