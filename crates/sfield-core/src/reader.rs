//! Typed column accessors.
//!
//! [`RowReader`] is the only way a raw cell becomes a typed attribute, and
//! the only place presence issues are raised. Each accessor checks its column
//! exactly once.

use sfield_model::{Compliance, IntValue, Presence, Row};
use tracing::trace;

/// Reads typed values out of a [`Row`] while collecting presence issues.
#[derive(Debug)]
pub struct RowReader<'a> {
    row: &'a Row,
    compliance: Compliance,
}

impl<'a> RowReader<'a> {
    pub fn new(row: &'a Row) -> Self {
        Self {
            row,
            compliance: Compliance::new(),
        }
    }

    /// Raw string value; `None` when the column is absent.
    ///
    /// Absent and empty values are both reported as missing.
    pub fn string(&mut self, column: &str, presence: Presence) -> Option<String> {
        let value = self.row.get(column).map(str::to_string);
        let missing = value.as_deref().is_none_or(str::is_empty);
        self.check(column, missing, presence);
        value
    }

    /// Integer value; `None` only when the column is absent.
    ///
    /// An empty cell or text without leading digits yields
    /// [`IntValue::NotANumber`], which is present as far as this check is
    /// concerned.
    pub fn number(&mut self, column: &str, presence: Presence) -> Option<IntValue> {
        let value = self.row.get(column).map(IntValue::parse_prefix);
        self.check(column, value.is_none(), presence);
        value
    }

    /// `true` only for a case-insensitive `"true"`.
    ///
    /// Any other text is `false` without an issue; an absent or empty column
    /// is `false` and checked for presence.
    pub fn boolean(&mut self, column: &str, presence: Presence) -> bool {
        match self.row.get(column) {
            Some(raw) if !raw.is_empty() => raw.eq_ignore_ascii_case("true"),
            _ => {
                self.check(column, true, presence);
                false
            }
        }
    }

    /// Adds a kind-level issue to the same log as the presence checks.
    pub fn report(&mut self, message: impl Into<String>, presence: Presence) {
        self.compliance.record(message, presence);
    }

    pub fn compliance(&self) -> &Compliance {
        &self.compliance
    }

    pub fn finish(self) -> Compliance {
        self.compliance
    }

    fn check(&mut self, column: &str, missing: bool, presence: Presence) {
        if missing {
            trace!(
                line = self.row.line_number,
                column,
                presence = %presence,
                "column missing"
            );
        }
        self.compliance.check_presence(column, missing, presence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row::from_pairs(1, pairs.iter().copied())
    }

    #[test]
    fn string_keeps_raw_value() {
        let row = row(&[("label", "Amount")]);
        let mut reader = RowReader::new(&row);
        assert_eq!(
            reader.string("label", Presence::Required).as_deref(),
            Some("Amount")
        );
        assert!(!reader.compliance().has_error());
    }

    #[test]
    fn empty_string_is_missing_but_kept() {
        let row = row(&[("description", "")]);
        let mut reader = RowReader::new(&row);
        assert_eq!(
            reader.string("description", Presence::Recommended).as_deref(),
            Some("")
        );
        assert_eq!(reader.compliance().warnings(), ["description is missing"]);
    }

    #[test]
    fn absent_optional_string_is_silent() {
        let row = row(&[]);
        let mut reader = RowReader::new(&row);
        assert_eq!(reader.string("defaultValue", Presence::Optional), None);
        let compliance = reader.finish();
        assert!(!compliance.has_error());
        assert!(!compliance.has_warning());
    }

    #[test]
    fn number_parses_and_flags_only_missing() {
        let row = row(&[("text-length", "80"), ("text-visibleLines", "many")]);
        let mut reader = RowReader::new(&row);
        assert_eq!(
            reader.number("text-length", Presence::Required),
            Some(IntValue::Int(80))
        );
        assert_eq!(
            reader.number("text-visibleLines", Presence::Required),
            Some(IntValue::NotANumber)
        );
        assert_eq!(reader.number("numeric-scale", Presence::Required), None);
        assert_eq!(reader.compliance().errors(), ["numeric-scale is missing"]);
    }

    #[test]
    fn empty_number_cell_is_not_a_number_without_issue() {
        let row = row(&[("text-length", "")]);
        let mut reader = RowReader::new(&row);
        assert_eq!(
            reader.number("text-length", Presence::Required),
            Some(IntValue::NotANumber)
        );
        assert!(!reader.compliance().has_error());
    }

    #[test]
    fn boolean_reads_true_case_insensitively() {
        let row = row(&[("unique", "TRUE"), ("required", "yes"), ("externalId", "false")]);
        let mut reader = RowReader::new(&row);
        assert!(reader.boolean("unique", Presence::Required));
        assert!(!reader.boolean("required", Presence::Required));
        assert!(!reader.boolean("externalId", Presence::Required));
        assert!(!reader.compliance().has_error());
    }

    #[test]
    fn boolean_missing_is_checked() {
        let row = row(&[("text-caseSensitive", "")]);
        let mut reader = RowReader::new(&row);
        assert!(!reader.boolean("text-caseSensitive", Presence::Required));
        assert!(!reader.boolean("picklist-isGlobal", Presence::Required));
        assert_eq!(
            reader.compliance().errors(),
            ["text-caseSensitive is missing", "picklist-isGlobal is missing"]
        );
    }
}
