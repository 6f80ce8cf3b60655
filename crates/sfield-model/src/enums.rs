//! Fixed vocabularies accepted by kind-specific columns.
//!
//! Values are kept as raw strings on the record so that an invalid entry can
//! still be reported verbatim; these lists are what the checks compare
//! against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted `lookup-deleteConstraint` values.
pub const DELETE_CONSTRAINTS: [&str; 3] = ["Restrict", "Cascade", "SetNull"];

/// Accepted `encrypt-maskType` values.
pub const MASK_TYPES: [&str; 6] = ["all", "creditCard", "lastFour", "nino", "sin", "ssn"];

/// Accepted `encrypt-maskChar` values.
pub const MASK_CHARS: [&str; 2] = ["*", "X"];

/// Accepted `rollup-Operation` values.
pub const ROLLUP_OPERATIONS: [&str; 4] = ["Count", "Min", "Max", "Sum"];

/// Upper bound for `precision + scale` on numeric fields.
pub const MAX_PRECISION_PLUS_SCALE: i64 = 20;

/// Upper bound for the length of Html and LongTextArea fields.
pub const MAX_EXTENDED_TEXT_LENGTH: i64 = 131_072;

/// A number column after integer parsing.
///
/// Parsing keeps the leading integer of the cell and ignores anything after
/// it, so `"18 digits"` reads as 18. A cell with no leading digits is
/// [`IntValue::NotANumber`]; the value is still considered present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntValue {
    Int(i64),
    NotANumber,
}

impl IntValue {
    /// Parses the leading base-10 integer of `raw`.
    pub fn parse_prefix(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return IntValue::NotANumber;
        }
        let magnitude = digits[..digit_count].bytes().fold(0i64, |acc, byte| {
            acc.saturating_mul(10).saturating_add(i64::from(byte - b'0'))
        });
        IntValue::Int(if negative { -magnitude } else { magnitude })
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            IntValue::Int(value) => Some(*value),
            IntValue::NotANumber => None,
        }
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntValue::Int(value) => write!(f, "{value}"),
            IntValue::NotANumber => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integer() {
        assert_eq!(IntValue::parse_prefix("18"), IntValue::Int(18));
        assert_eq!(IntValue::parse_prefix("  42"), IntValue::Int(42));
        assert_eq!(IntValue::parse_prefix("-3"), IntValue::Int(-3));
        assert_eq!(IntValue::parse_prefix("+7"), IntValue::Int(7));
        assert_eq!(IntValue::parse_prefix("3.7"), IntValue::Int(3));
        assert_eq!(IntValue::parse_prefix("12abc"), IntValue::Int(12));
    }

    #[test]
    fn text_without_digits_is_not_a_number() {
        assert_eq!(IntValue::parse_prefix("abc"), IntValue::NotANumber);
        assert_eq!(IntValue::parse_prefix("-"), IntValue::NotANumber);
        assert_eq!(IntValue::parse_prefix(""), IntValue::NotANumber);
        assert_eq!(IntValue::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(
            IntValue::parse_prefix("99999999999999999999999"),
            IntValue::Int(i64::MAX)
        );
    }
}
