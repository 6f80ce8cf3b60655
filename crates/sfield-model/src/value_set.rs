//! Picklist value sets.

/// One selectable picklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicklistValue {
    pub full_name: String,
    pub default: bool,
    pub label: String,
}

impl PicklistValue {
    pub fn new(full_name: impl Into<String>, default: bool, label: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            default,
            label: label.into(),
        }
    }
}

/// Placeholder entries written into every locally defined picklist so the
/// generated file deploys; users replace them afterwards.
pub fn sample_picklist_values() -> Vec<PicklistValue> {
    vec![
        PicklistValue::new("Choice1", true, "Label Choice1"),
        PicklistValue::new("Choice2", false, "Label Choice2"),
    ]
}

/// Inline definition of a local value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSetDefinition {
    pub sorted: bool,
    pub values: Vec<PicklistValue>,
}

impl ValueSetDefinition {
    pub fn with_sample_values(sorted: bool) -> Self {
        Self {
            sorted,
            values: sample_picklist_values(),
        }
    }
}

/// Values offered by a picklist, either declared on the org (global) or
/// inline on the field (local).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSet {
    Global {
        restricted: bool,
        value_set_name: Option<String>,
    },
    Local {
        restricted: bool,
        definition: ValueSetDefinition,
    },
}
