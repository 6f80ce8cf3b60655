//! Kind-specific cross-field checks.
//!
//! Each module inspects one shape and returns every violation it finds;
//! no check stops at the first problem. All findings are required-level.

mod encrypted;
mod extended_text;
mod location;
mod lookup;
mod numeric;
mod summary;

use sfield_model::FieldShape;

/// Run the checks declared for `shape`. Shapes without rules return nothing.
pub fn run_all(shape: &FieldShape) -> Vec<String> {
    match shape {
        FieldShape::Lookup(lookup) => lookup::check(lookup),
        FieldShape::Numeric(numeric) => numeric::check(numeric),
        FieldShape::Number(number) => numeric::check(&number.numeric),
        FieldShape::Location(location) => location::check(location),
        FieldShape::ExtendedText(text) => extended_text::check(text),
        FieldShape::EncryptedText(encrypted) => encrypted::check(encrypted),
        FieldShape::Summary(summary) => summary::check(summary),
        FieldShape::Plain
        | FieldShape::AutoNumber(_)
        | FieldShape::Text(_)
        | FieldShape::Email(_)
        | FieldShape::Picklist(_)
        | FieldShape::MultiselectPicklist(_) => Vec::new(),
    }
}

/// True when a number column is absent or did not parse.
fn undefined_number(value: Option<sfield_model::IntValue>) -> bool {
    value.and_then(|value| value.as_int()).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfield_model::{AutoNumberAttributes, IntValue, NumberAttributes, NumericAttributes};

    #[test]
    fn shapes_without_rules_are_clean() {
        assert!(run_all(&FieldShape::Plain).is_empty());
        assert!(run_all(&FieldShape::AutoNumber(AutoNumberAttributes::default())).is_empty());
    }

    #[test]
    fn number_uses_numeric_rules() {
        let shape = FieldShape::Number(NumberAttributes {
            numeric: NumericAttributes {
                precision: Some(IntValue::Int(18)),
                scale: Some(IntValue::Int(5)),
            },
            is_ai_prediction_field: false,
        });
        assert_eq!(
            run_all(&shape),
            ["Bad number definition, precision(18)+scale(5) must be <= 20"]
        );
    }
}
