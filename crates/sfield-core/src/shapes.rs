//! Column contracts for each record shape.
//!
//! Every function reads its columns in declaration order; the order is the
//! order in which presence issues are reported.

use sfield_model::{
    AutoNumberAttributes, CommonAttributes, EmailAttributes, EncryptedAttributes,
    ExtendedTextAttributes, FieldShape, LocationAttributes, LookupAttributes,
    MultiselectPicklistAttributes, NumberAttributes, NumericAttributes, PicklistAttributes,
    Presence, SummaryAttributes, TextAttributes, ValueSet, ValueSetDefinition,
};

use crate::reader::RowReader;

/// Column contract a record is built with, chosen by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blueprint {
    Plain,
    Lookup,
    AutoNumber,
    Numeric,
    Number,
    Location,
    Text,
    ExtendedText,
    Email,
    Picklist,
    MultiselectPicklist,
    EncryptedText,
    Summary,
}

impl Blueprint {
    /// Read the kind-specific columns for this blueprint.
    pub fn read(self, reader: &mut RowReader<'_>) -> FieldShape {
        match self {
            Blueprint::Plain => FieldShape::Plain,
            Blueprint::Lookup => FieldShape::Lookup(read_lookup(reader)),
            Blueprint::AutoNumber => FieldShape::AutoNumber(read_auto_number(reader)),
            Blueprint::Numeric => FieldShape::Numeric(read_numeric(reader)),
            Blueprint::Number => FieldShape::Number(read_number(reader)),
            Blueprint::Location => FieldShape::Location(read_location(reader)),
            Blueprint::Text => FieldShape::Text(read_text(reader)),
            Blueprint::ExtendedText => FieldShape::ExtendedText(read_extended_text(reader)),
            Blueprint::Email => FieldShape::Email(read_email(reader)),
            Blueprint::Picklist => FieldShape::Picklist(read_picklist(reader)),
            Blueprint::MultiselectPicklist => {
                FieldShape::MultiselectPicklist(read_multiselect_picklist(reader))
            }
            Blueprint::EncryptedText => FieldShape::EncryptedText(read_encrypted(reader)),
            Blueprint::Summary => FieldShape::Summary(read_summary(reader)),
        }
    }
}

pub fn read_common(reader: &mut RowReader<'_>) -> CommonAttributes {
    CommonAttributes {
        object_name: reader.string("objectName", Presence::Required),
        label: reader.string("label", Presence::Required),
        fullname: reader.string("fullname", Presence::Required),
        description: reader.string("description", Presence::Recommended),
        inline_help_text: reader.string("inlineHelpText", Presence::Recommended),
        default_value: reader.string("defaultValue", Presence::Optional),
        required: reader.boolean("required", Presence::Optional),
        track_history: reader.boolean("trackHistory", Presence::Optional),
        external_id: reader.boolean("externalId", Presence::Optional),
        unique: reader.boolean("unique", Presence::Optional),
    }
}

fn read_lookup(reader: &mut RowReader<'_>) -> LookupAttributes {
    LookupAttributes {
        reference_to: reader.string("lookup-referenceTo", Presence::Required),
        relationship_label: reader.string("lookup-relationshipLabel", Presence::Required),
        relationship_name: reader.string("lookup-relationshipName", Presence::Required),
        delete_constraint: reader.string("lookup-deleteConstraint", Presence::Required),
    }
}

fn read_auto_number(reader: &mut RowReader<'_>) -> AutoNumberAttributes {
    AutoNumberAttributes {
        display_format: reader.string("autonumber-displayFormat", Presence::Required),
    }
}

fn read_numeric(reader: &mut RowReader<'_>) -> NumericAttributes {
    NumericAttributes {
        precision: reader.number("numeric-precision", Presence::Required),
        scale: reader.number("numeric-scale", Presence::Required),
    }
}

fn read_number(reader: &mut RowReader<'_>) -> NumberAttributes {
    NumberAttributes {
        numeric: read_numeric(reader),
        is_ai_prediction_field: reader.boolean("number-isAIPredictionField", Presence::Optional),
    }
}

fn read_location(reader: &mut RowReader<'_>) -> LocationAttributes {
    LocationAttributes {
        display_location_in_decimal: reader
            .boolean("geo-displayLocationInDecimal", Presence::Required),
        scale: reader.number("numeric-scale", Presence::Required),
    }
}

fn read_text(reader: &mut RowReader<'_>) -> TextAttributes {
    TextAttributes {
        length: reader.number("text-length", Presence::Required),
        case_sensitive: reader.boolean("text-caseSensitive", Presence::Required),
    }
}

fn read_extended_text(reader: &mut RowReader<'_>) -> ExtendedTextAttributes {
    ExtendedTextAttributes {
        length: reader.number("text-length", Presence::Required),
        visible_lines: reader.number("text-visibleLines", Presence::Required),
    }
}

fn read_email(reader: &mut RowReader<'_>) -> EmailAttributes {
    EmailAttributes {
        case_sensitive: reader.boolean("text-caseSensitive", Presence::Required),
    }
}

fn read_picklist(reader: &mut RowReader<'_>) -> PicklistAttributes {
    let restricted = reader.boolean("picklist-restricted", Presence::Required);
    let is_global = reader.boolean("picklist-isGlobal", Presence::Required);
    // The value set repeats the restricted flag already read above.
    let value_set = if is_global {
        ValueSet::Global {
            restricted,
            value_set_name: reader.string("picklist-valueSetName", Presence::Required),
        }
    } else {
        ValueSet::Local {
            restricted,
            definition: ValueSetDefinition::with_sample_values(
                reader.boolean("picklist-isSorted", Presence::Required),
            ),
        }
    };
    PicklistAttributes {
        restricted,
        is_global,
        value_set,
    }
}

fn read_multiselect_picklist(reader: &mut RowReader<'_>) -> MultiselectPicklistAttributes {
    MultiselectPicklistAttributes {
        picklist: read_picklist(reader),
        visible_lines: reader.number("text-visibleLines", Presence::Required),
    }
}

fn read_encrypted(reader: &mut RowReader<'_>) -> EncryptedAttributes {
    EncryptedAttributes {
        mask_type: reader.string("encrypt-maskType", Presence::Required),
        mask_char: reader.string("encrypt-maskChar", Presence::Required),
    }
}

fn read_summary(reader: &mut RowReader<'_>) -> SummaryAttributes {
    SummaryAttributes {
        summarized_field: reader.string("rollup-field", Presence::Required),
        summary_foreign_key: reader.string("rollup-foreignkey", Presence::Required),
        summary_operation: reader.string("rollup-Operation", Presence::Required),
    }
}

/// Columns read by a blueprint beyond the common ones, in reading order.
///
/// Picklists list both value-set branches.
pub fn columns(blueprint: Blueprint) -> &'static [&'static str] {
    match blueprint {
        Blueprint::Plain => &[],
        Blueprint::Lookup => &[
            "lookup-referenceTo",
            "lookup-relationshipLabel",
            "lookup-relationshipName",
            "lookup-deleteConstraint",
        ],
        Blueprint::AutoNumber => &["autonumber-displayFormat"],
        Blueprint::Numeric => &["numeric-precision", "numeric-scale"],
        Blueprint::Number => &[
            "numeric-precision",
            "numeric-scale",
            "number-isAIPredictionField",
        ],
        Blueprint::Location => &["geo-displayLocationInDecimal", "numeric-scale"],
        Blueprint::Text => &["text-length", "text-caseSensitive"],
        Blueprint::ExtendedText => &["text-length", "text-visibleLines"],
        Blueprint::Email => &["text-caseSensitive"],
        Blueprint::Picklist => &[
            "picklist-restricted",
            "picklist-isGlobal",
            "picklist-valueSetName",
            "picklist-isSorted",
        ],
        Blueprint::MultiselectPicklist => &[
            "picklist-restricted",
            "picklist-isGlobal",
            "picklist-valueSetName",
            "picklist-isSorted",
            "text-visibleLines",
        ],
        Blueprint::EncryptedText => &["encrypt-maskType", "encrypt-maskChar"],
        Blueprint::Summary => &["rollup-field", "rollup-foreignkey", "rollup-Operation"],
    }
}
