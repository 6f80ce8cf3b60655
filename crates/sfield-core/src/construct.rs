//! Record construction.

use sfield_model::{ConstructionError, FieldKind, FieldRecord, Presence, Row};
use tracing::debug;

use crate::checks;
use crate::reader::RowReader;
use crate::shapes::{Blueprint, read_common};

/// Build a record of `kind` from `row` using `blueprint` for the
/// kind-specific columns.
///
/// Fails only when `kind` is not one of the supported names. Every other
/// problem ends up in the record's compliance log: common columns are read
/// first, then the blueprint's columns, then the kind checks.
pub fn construct(
    row: &Row,
    kind: &str,
    blueprint: Blueprint,
) -> Result<FieldRecord, ConstructionError> {
    let kind: FieldKind = kind
        .parse()
        .map_err(|_| ConstructionError::unsupported_kind(kind))?;

    let mut reader = RowReader::new(row);
    let common = read_common(&mut reader);
    let shape = blueprint.read(&mut reader);
    for issue in checks::run_all(&shape) {
        reader.report(issue, Presence::Required);
    }
    let compliance = reader.finish();

    debug!(
        line = row.line_number,
        kind = %kind,
        errors = compliance.error_count(),
        warnings = compliance.warning_count(),
        "field record built"
    );
    Ok(FieldRecord::new(kind, common, shape, compliance, row.clone()))
}

/// Build a record with only the common columns.
pub fn construct_base(row: &Row, kind: &str) -> Result<FieldRecord, ConstructionError> {
    construct(row, kind, Blueprint::Plain)
}
