//! Supported custom field kinds.
//!
//! The set is closed: a definition row naming anything else cannot be turned
//! into a record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field type as declared in the `type` column of a definition row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKind {
    AutoNumber,
    Checkbox,
    Currency,
    Date,
    DateTime,
    Email,
    EncryptedText,
    Html,
    Location,
    LongTextArea,
    Lookup,
    MultiselectPicklist,
    Number,
    Percent,
    Phone,
    Picklist,
    Summary,
    Text,
    TextArea,
    Time,
    Url,
}

impl FieldKind {
    /// Every supported kind, in the order they are listed to users.
    pub const ALL: [FieldKind; 21] = [
        FieldKind::AutoNumber,
        FieldKind::Checkbox,
        FieldKind::Currency,
        FieldKind::Date,
        FieldKind::DateTime,
        FieldKind::Email,
        FieldKind::EncryptedText,
        FieldKind::Html,
        FieldKind::Location,
        FieldKind::LongTextArea,
        FieldKind::Lookup,
        FieldKind::MultiselectPicklist,
        FieldKind::Number,
        FieldKind::Percent,
        FieldKind::Phone,
        FieldKind::Picklist,
        FieldKind::Summary,
        FieldKind::Text,
        FieldKind::TextArea,
        FieldKind::Time,
        FieldKind::Url,
    ];

    /// Returns the metadata name, which is also the value written to `<type>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::AutoNumber => "AutoNumber",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Currency => "Currency",
            FieldKind::Date => "Date",
            FieldKind::DateTime => "DateTime",
            FieldKind::Email => "Email",
            FieldKind::EncryptedText => "EncryptedText",
            FieldKind::Html => "Html",
            FieldKind::Location => "Location",
            FieldKind::LongTextArea => "LongTextArea",
            FieldKind::Lookup => "Lookup",
            FieldKind::MultiselectPicklist => "MultiselectPicklist",
            FieldKind::Number => "Number",
            FieldKind::Percent => "Percent",
            FieldKind::Phone => "Phone",
            FieldKind::Picklist => "Picklist",
            FieldKind::Summary => "Summary",
            FieldKind::Text => "Text",
            FieldKind::TextArea => "TextArea",
            FieldKind::Time => "Time",
            FieldKind::Url => "Url",
        }
    }

    /// Comma-joined list of supported names, as shown in error messages.
    pub fn supported_list() -> String {
        FieldKind::ALL
            .iter()
            .map(FieldKind::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    /// Exact, case-sensitive match against the supported names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown field kind: {s}"))
    }
}
