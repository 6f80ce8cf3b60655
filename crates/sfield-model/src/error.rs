use thiserror::Error;

use crate::kind::FieldKind;

/// A definition row that cannot become a record at all.
///
/// Raised only for a field type outside the supported set; missing or bad
/// column values are compliance issues instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error(
        "Invalid field definition with {declared} object: Type of field not supported '{declared}', please use one of them: {supported}",
        supported = FieldKind::supported_list()
    )]
    UnsupportedKind { declared: String },
}

impl ConstructionError {
    pub fn unsupported_kind(declared: impl Into<String>) -> Self {
        ConstructionError::UnsupportedKind {
            declared: declared.into(),
        }
    }

    /// The type string that was rejected.
    pub fn declared_kind(&self) -> &str {
        match self {
            ConstructionError::UnsupportedKind { declared } => declared,
        }
    }
}
