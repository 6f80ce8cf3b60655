//! Field generation pipeline.
//!
//! 1. **Evaluate**: read the definition file and build one record per row,
//!    tallying errors and warnings and queueing the clean records
//! 2. **Write**: write every queued record under the output directory

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace, warn};

use sfield_core::build_record;
use sfield_ingest::{DefinitionReader, IngestOptions};
use sfield_model::{FieldRecord, Row};
use sfield_output::write_field_file;

use crate::logging::redact_value;
use crate::types::GenerateResult;

// ============================================================================
// Stage 1: Evaluate
// ============================================================================

/// Records ready to be written plus the issue counts of the whole file.
#[derive(Debug, Default)]
pub struct Evaluation {
    pub queued: Vec<FieldRecord>,
    pub field_errors: usize,
    pub field_warnings: usize,
}

impl Evaluation {
    /// Build the record for `row`, log its issues and queue it when clean.
    pub fn push_row(&mut self, row: &Row) {
        let line = row.line_number;
        for column in row.columns() {
            trace!(line, column, value = redact_value(row.get(column).unwrap_or_default()));
        }
        let record = match build_record(row) {
            Ok(record) => record,
            Err(error) => {
                warn!("#{line} Field skipped due to a fatal error");
                warn!("   >{error}");
                self.field_errors += 1;
                return;
            }
        };
        let label = format!(
            "{}.{}",
            record.object_name().unwrap_or_default(),
            record.fullname().unwrap_or_default()
        );
        let errors = record.errors().len();
        let warnings = record.warnings().len();
        self.field_warnings += warnings;
        if record.has_error() {
            warn!("#{line} Field {label} skipped due to {errors} errors (and {warnings} warnings)");
            self.field_errors += errors;
            for error in record.errors() {
                warn!("   REQUIRED>#{line} {error}");
            }
            log_warnings(line, &record);
        } else {
            debug!("#{line} Field {label} in progress with {warnings} warnings");
            log_warnings(line, &record);
            self.queued.push(record);
        }
    }
}

fn log_warnings(line: usize, record: &FieldRecord) {
    for warning in record.warnings() {
        debug!("   RECOMMENDED>#{line} {warning}");
    }
}

/// Read `definition_file` and evaluate every row.
pub fn evaluate(definition_file: &Path, options: IngestOptions) -> Result<Evaluation> {
    let span = info_span!("evaluate", file = %definition_file.display());
    let _guard = span.enter();
    let reader = DefinitionReader::from_path(definition_file, options)?;
    let mut evaluation = Evaluation::default();
    let mut rows = 0usize;
    for row in reader {
        let row = row.with_context(|| format!("read {}", definition_file.display()))?;
        evaluation.push_row(&row);
        rows += 1;
    }
    debug!(
        rows,
        queued = evaluation.queued.len(),
        errors = evaluation.field_errors,
        warnings = evaluation.field_warnings,
        "definition file evaluated"
    );
    Ok(evaluation)
}

// ============================================================================
// Stage 2: Write
// ============================================================================

/// Files written and failed while writing the queue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteCounts {
    pub created: usize,
    pub failed: usize,
}

/// Write every record of `queued` under `output_dir`, in order.
///
/// A failing file is logged and counted; the remaining ones are still written.
pub fn write_queued(output_dir: &Path, queued: &[FieldRecord]) -> WriteCounts {
    let span = info_span!("write", output_dir = %output_dir.display());
    let _guard = span.enter();
    let mut counts = WriteCounts::default();
    for record in queued {
        let fullname = record.fullname().unwrap_or_default();
        match write_field_file(output_dir, record) {
            Ok(_) => {
                debug!("File {fullname} saved");
                counts.created += 1;
            }
            Err(error) => {
                warn!("An error happens while creating the file {fullname}: {error:#}");
                counts.failed += 1;
            }
        }
    }
    counts
}

/// Evaluate `definition_file` and write the clean fields under `output_dir`.
pub fn generate(
    definition_file: &Path,
    output_dir: PathBuf,
    options: IngestOptions,
) -> Result<GenerateResult> {
    let start = Instant::now();
    let evaluation = evaluate(definition_file, options)?;
    let counts = write_queued(&output_dir, &evaluation.queued);
    info!("Job done, files generated on: {}", output_dir.display());
    info!(
        created = counts.created,
        failed = counts.failed,
        duration_ms = start.elapsed().as_millis(),
        "generation complete"
    );
    Ok(GenerateResult {
        path: output_dir,
        file_created: counts.created,
        file_error: counts.failed,
        field_errors: evaluation.field_errors,
        field_warnings: evaluation.field_warnings,
    })
}
