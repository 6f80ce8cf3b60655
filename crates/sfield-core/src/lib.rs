//! Turning definition rows into validated custom field records.
//!
//! [`build_record`] is the entry point: it picks a column contract from the
//! row's `type`, reads every column through [`RowReader`], runs the
//! kind-specific checks and returns the finished [`FieldRecord`].
//!
//! [`FieldRecord`]: sfield_model::FieldRecord

pub mod checks;
pub mod construct;
pub mod factory;
pub mod reader;
pub mod shapes;

pub use construct::{construct, construct_base};
pub use factory::{DISPATCH, blueprint_for, build_record};
pub use reader::RowReader;
pub use shapes::{Blueprint, columns};

/// Columns read for every field kind, in reading order.
pub const COMMON_COLUMNS: [&str; 10] = [
    "objectName",
    "label",
    "fullname",
    "description",
    "inlineHelpText",
    "defaultValue",
    "required",
    "trackHistory",
    "externalId",
    "unique",
];
