//! Dispatch from the declared `type` column to a record constructor.

use sfield_model::{ConstructionError, FieldRecord, Row};

use crate::construct::{construct, construct_base};
use crate::shapes::Blueprint;

/// Type names the factory dispatches on, with the kind and blueprint each
/// one builds.
///
/// `Autonumber` is spelled with a lowercase `n` here while the supported
/// kind is `AutoNumber`; a row declaring `AutoNumber` goes through the
/// fallback and gets a plain record.
pub const DISPATCH: [(&str, &str, Blueprint); 21] = [
    ("Autonumber", "AutoNumber", Blueprint::AutoNumber),
    ("Checkbox", "Checkbox", Blueprint::Plain),
    ("Currency", "Currency", Blueprint::Numeric),
    ("Date", "Date", Blueprint::Plain),
    ("DateTime", "DateTime", Blueprint::Plain),
    ("Email", "Email", Blueprint::Email),
    ("EncryptedText", "EncryptedText", Blueprint::EncryptedText),
    ("Lookup", "Lookup", Blueprint::Lookup),
    ("Html", "Html", Blueprint::ExtendedText),
    ("Location", "Location", Blueprint::Location),
    ("LongTextArea", "LongTextArea", Blueprint::ExtendedText),
    ("Number", "Number", Blueprint::Number),
    ("MultiselectPicklist", "MultiselectPicklist", Blueprint::MultiselectPicklist),
    ("Percent", "Percent", Blueprint::Numeric),
    ("Phone", "Phone", Blueprint::Plain),
    ("Picklist", "Picklist", Blueprint::Picklist),
    ("Summary", "Summary", Blueprint::Summary),
    ("Text", "Text", Blueprint::Text),
    ("TextArea", "TextArea", Blueprint::Plain),
    ("Time", "Time", Blueprint::Plain),
    ("Url", "Url", Blueprint::Plain),
];

/// Build the record for `row` according to its `type` column.
///
/// Names outside [`DISPATCH`] are handed to the base constructor unchanged,
/// so an unsupported type ends in a [`ConstructionError`]. A missing `type`
/// column is treated as an empty type name.
pub fn build_record(row: &Row) -> Result<FieldRecord, ConstructionError> {
    let declared = row.declared_type().unwrap_or_default();
    match blueprint_for(declared) {
        Some((kind, blueprint)) => construct(row, kind, blueprint),
        None => construct_base(row, declared),
    }
}

/// Kind name and blueprint for a dispatch name, `None` for the fallback.
pub fn blueprint_for(declared: &str) -> Option<(&'static str, Blueprint)> {
    DISPATCH
        .iter()
        .find(|(name, _, _)| *name == declared)
        .map(|(_, kind, blueprint)| (*kind, *blueprint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfield_model::{FieldKind, FieldShape};

    #[test]
    fn lowercase_autonumber_builds_display_format() {
        let row = Row::from_pairs(1, [("type", "Autonumber")]);
        let record = build_record(&row).expect("dispatched");
        assert_eq!(record.kind(), FieldKind::AutoNumber);
        assert!(matches!(record.shape(), FieldShape::AutoNumber(_)));
        assert!(
            record
                .errors()
                .contains(&"autonumber-displayFormat is missing".to_string())
        );
    }

    #[test]
    fn supported_spelling_falls_back_to_plain_record() {
        let row = Row::from_pairs(1, [("type", "AutoNumber")]);
        let record = build_record(&row).expect("fallback accepts supported kind");
        assert_eq!(record.kind(), FieldKind::AutoNumber);
        assert_eq!(record.shape(), &FieldShape::Plain);
    }

    #[test]
    fn unknown_and_missing_types_fail() {
        let row = Row::from_pairs(1, [("type", "Formula")]);
        assert!(build_record(&row).is_err());
        let error = build_record(&Row::new(2)).expect_err("no type column");
        assert_eq!(error.declared_kind(), "");
    }

    #[test]
    fn every_dispatch_name_resolves() {
        for (name, kind, blueprint) in DISPATCH {
            assert_eq!(blueprint_for(name), Some((kind, blueprint)));
            assert!(kind.parse::<FieldKind>().is_ok());
        }
        assert_eq!(blueprint_for("AutoNumber"), None);
    }
}
