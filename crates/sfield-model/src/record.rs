//! Typed field records built from definition rows.
//!
//! A record is a [`FieldKind`], the attributes every field shares, a
//! kind-specific [`FieldShape`] and the [`Compliance`] log produced while
//! reading the row.

use crate::compliance::Compliance;
use crate::enums::IntValue;
use crate::kind::FieldKind;
use crate::row::Row;
use crate::value_set::ValueSet;

/// Attribute names that never reach the generated document.
pub const EXCLUDED_ATTRIBUTES: [&str; 7] = [
    "objectName",
    "isGlobal",
    "rawRow",
    "hasError",
    "hasWarning",
    "errors",
    "warnings",
];

/// Attributes shared by every field kind.
///
/// Strings are `None` when the column was absent; an empty cell is kept as
/// `Some("")` and treated as missing by the presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonAttributes {
    pub object_name: Option<String>,
    pub label: Option<String>,
    pub fullname: Option<String>,
    pub description: Option<String>,
    pub inline_help_text: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub track_history: bool,
    pub external_id: bool,
    pub unique: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupAttributes {
    pub reference_to: Option<String>,
    pub relationship_label: Option<String>,
    pub relationship_name: Option<String>,
    pub delete_constraint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoNumberAttributes {
    pub display_format: Option<String>,
}

/// Precision and scale shared by Currency, Percent and Number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericAttributes {
    pub precision: Option<IntValue>,
    pub scale: Option<IntValue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberAttributes {
    pub numeric: NumericAttributes,
    pub is_ai_prediction_field: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationAttributes {
    pub display_location_in_decimal: bool,
    pub scale: Option<IntValue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextAttributes {
    pub length: Option<IntValue>,
    pub case_sensitive: bool,
}

/// Length and visible lines shared by Html and LongTextArea.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendedTextAttributes {
    pub length: Option<IntValue>,
    pub visible_lines: Option<IntValue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailAttributes {
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicklistAttributes {
    pub restricted: bool,
    pub is_global: bool,
    pub value_set: ValueSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiselectPicklistAttributes {
    pub picklist: PicklistAttributes,
    pub visible_lines: Option<IntValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptedAttributes {
    pub mask_type: Option<String>,
    pub mask_char: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryAttributes {
    pub summarized_field: Option<String>,
    pub summary_foreign_key: Option<String>,
    pub summary_operation: Option<String>,
}

/// Kind-specific part of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Checkbox, Date, DateTime, Phone, TextArea, Time, Url, and kinds
    /// reached through the fallback constructor.
    Plain,
    Lookup(LookupAttributes),
    AutoNumber(AutoNumberAttributes),
    /// Currency and Percent.
    Numeric(NumericAttributes),
    Number(NumberAttributes),
    Location(LocationAttributes),
    Text(TextAttributes),
    /// Html and LongTextArea.
    ExtendedText(ExtendedTextAttributes),
    Email(EmailAttributes),
    Picklist(PicklistAttributes),
    MultiselectPicklist(MultiselectPicklistAttributes),
    EncryptedText(EncryptedAttributes),
    Summary(SummaryAttributes),
}

impl FieldShape {
    /// Value set of either picklist flavour.
    pub fn value_set(&self) -> Option<&ValueSet> {
        match self {
            FieldShape::Picklist(picklist) => Some(&picklist.value_set),
            FieldShape::MultiselectPicklist(multi) => Some(&multi.picklist.value_set),
            _ => None,
        }
    }
}

/// A fully read definition row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    kind: FieldKind,
    common: CommonAttributes,
    shape: FieldShape,
    compliance: Compliance,
    raw_row: Row,
}

impl FieldRecord {
    pub fn new(
        kind: FieldKind,
        common: CommonAttributes,
        shape: FieldShape,
        compliance: Compliance,
        raw_row: Row,
    ) -> Self {
        Self {
            kind,
            common,
            shape,
            compliance,
            raw_row,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn common(&self) -> &CommonAttributes {
        &self.common
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    pub fn compliance(&self) -> &Compliance {
        &self.compliance
    }

    /// The row this record was read from.
    pub fn raw_row(&self) -> &Row {
        &self.raw_row
    }

    pub fn line_number(&self) -> usize {
        self.raw_row.line_number
    }

    pub fn object_name(&self) -> Option<&str> {
        self.common.object_name.as_deref()
    }

    pub fn fullname(&self) -> Option<&str> {
        self.common.fullname.as_deref()
    }

    pub fn errors(&self) -> &[String] {
        self.compliance.errors()
    }

    pub fn warnings(&self) -> &[String] {
        self.compliance.warnings()
    }

    pub fn has_error(&self) -> bool {
        self.compliance.has_error()
    }

    pub fn has_warning(&self) -> bool {
        self.compliance.has_warning()
    }
}
