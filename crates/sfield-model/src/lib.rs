pub mod compliance;
pub mod enums;
pub mod error;
pub mod kind;
pub mod record;
pub mod row;
pub mod value_set;

pub use compliance::{Compliance, Presence};
pub use enums::{
    DELETE_CONSTRAINTS, IntValue, MASK_CHARS, MASK_TYPES, MAX_EXTENDED_TEXT_LENGTH,
    MAX_PRECISION_PLUS_SCALE, ROLLUP_OPERATIONS,
};
pub use error::ConstructionError;
pub use kind::FieldKind;
pub use record::{
    AutoNumberAttributes, CommonAttributes, EXCLUDED_ATTRIBUTES, EmailAttributes,
    EncryptedAttributes, ExtendedTextAttributes, FieldRecord, FieldShape, LocationAttributes,
    LookupAttributes, MultiselectPicklistAttributes, NumberAttributes, NumericAttributes,
    PicklistAttributes, SummaryAttributes, TextAttributes,
};
pub use row::{OBJECT_NAME_COLUMN, Row, TYPE_COLUMN};
pub use value_set::{PicklistValue, ValueSet, ValueSetDefinition, sample_picklist_values};

/// Namespace declared on every generated `CustomField` document.
pub const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_flags_follow_compliance() {
        let mut compliance = Compliance::new();
        compliance.record("label is missing", Presence::Required);
        compliance.record("description is missing", Presence::Recommended);
        let record = FieldRecord::new(
            FieldKind::Checkbox,
            CommonAttributes::default(),
            FieldShape::Plain,
            compliance,
            Row::new(1),
        );
        assert!(record.has_error());
        assert!(record.has_warning());
        assert_eq!(record.errors().len(), 1);
        assert_eq!(record.warnings().len(), 1);
        assert_eq!(record.line_number(), 1);
    }

    #[test]
    fn construction_error_names_kind_and_choices() {
        let error = ConstructionError::unsupported_kind("Formula");
        let message = error.to_string();
        assert!(message.starts_with(
            "Invalid field definition with Formula object: Type of field not supported 'Formula'"
        ));
        assert!(message.ends_with(&FieldKind::supported_list()));
        assert_eq!(error.declared_kind(), "Formula");
    }

    #[test]
    fn row_serializes() {
        let row = Row::from_pairs(2, [("type", "Text")]);
        let json = serde_json::to_string(&row).expect("serialize row");
        let round: Row = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(round, row);
    }
}
