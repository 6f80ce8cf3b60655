//! Html and LongTextArea checks.

use sfield_model::{ExtendedTextAttributes, MAX_EXTENDED_TEXT_LENGTH};

use super::undefined_number;

pub fn check(text: &ExtendedTextAttributes) -> Vec<String> {
    let mut issues = Vec::new();
    if undefined_number(text.length) {
        issues.push("Bad text definition, length not defined as a number".to_string());
    }
    if undefined_number(text.visible_lines) {
        issues.push("Bad text definition, visibleLines not defined as a number".to_string());
    }
    if text
        .length
        .and_then(|value| value.as_int())
        .is_some_and(|length| length > MAX_EXTENDED_TEXT_LENGTH)
    {
        issues.push("Bad text definition, length too long, maximum is 131,072".to_string());
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfield_model::IntValue;

    fn text(length: i64) -> ExtendedTextAttributes {
        ExtendedTextAttributes {
            length: Some(IntValue::Int(length)),
            visible_lines: Some(IntValue::Int(10)),
        }
    }

    #[test]
    fn length_ceiling_is_inclusive() {
        assert!(check(&text(131_072)).is_empty());
        assert_eq!(
            check(&text(131_073)),
            ["Bad text definition, length too long, maximum is 131,072"]
        );
    }

    #[test]
    fn both_numbers_are_required() {
        let issues = check(&ExtendedTextAttributes::default());
        assert_eq!(issues.len(), 2);
    }
}
