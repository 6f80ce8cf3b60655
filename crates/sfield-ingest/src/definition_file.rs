use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use sfield_model::Row;

use crate::error::{IngestError, Result};

/// Options for reading a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter. Defaults to `,`.
    pub delimiter: u8,
    /// Trim surrounding whitespace from data cells. Defaults to true.
    pub trim_cells: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim_cells: true,
        }
    }
}

impl IngestOptions {
    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable trimming of data cells.
    #[must_use]
    pub fn with_trim_cells(mut self, trim: bool) -> Self {
        self.trim_cells = trim;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str, trim: bool) -> String {
    if trim {
        raw.trim().to_string()
    } else {
        raw.to_string()
    }
}

/// Streams [`Row`]s out of a definition CSV.
///
/// The header is read lazily on the first call to `next`. Blank lines are
/// skipped; cells missing from a short line leave their column absent.
pub struct DefinitionReader<R: Read> {
    reader: csv::Reader<R>,
    options: IngestOptions,
    headers: Option<Vec<String>>,
    record: StringRecord,
    line_number: usize,
    done: bool,
}

impl<R: Read> DefinitionReader<R> {
    pub fn new(input: R, options: IngestOptions) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(options.delimiter)
            .from_reader(input);
        Self {
            reader,
            options,
            headers: None,
            record: StringRecord::new(),
            line_number: 0,
            done: false,
        }
    }

    /// Column names, once the header line has been read.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    fn read_headers(&mut self) -> Result<bool> {
        let mut header = StringRecord::new();
        if !self
            .reader
            .read_record(&mut header)
            .map_err(IngestError::Header)?
        {
            return Ok(false);
        }
        let headers: Vec<String> = header.iter().map(normalize_header).collect();
        debug!(columns = headers.len(), "definition header read");
        self.headers = Some(headers);
        Ok(true)
    }

    fn next_row(&mut self) -> Result<Option<Row>> {
        if self.headers.is_none() && !self.read_headers()? {
            return Ok(None);
        }
        let line = self.line_number + 1;
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|source| IngestError::Record { line, source })?;
        if !more {
            return Ok(None);
        }
        self.line_number = line;
        let mut row = Row::new(line);
        if let Some(headers) = &self.headers {
            for (column, value) in headers.iter().zip(self.record.iter()) {
                row.insert(column.as_str(), normalize_cell(value, self.options.trim_cells));
            }
        }
        trace!(line, columns = row.len(), "definition row read");
        Ok(Some(row))
    }
}

impl<R: Read> Iterator for DefinitionReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl DefinitionReader<File> {
    /// Open a definition file from disk.
    pub fn from_path(path: &Path, options: IngestOptions) -> Result<Self> {
        let file = File::open(path).map_err(|error| IngestError::Open {
            path: path.to_path_buf(),
            source: error.into(),
        })?;
        Ok(Self::new(file, options))
    }
}

/// Read every row of a definition file.
pub fn read_definition_file(path: &Path, options: IngestOptions) -> Result<Vec<Row>> {
    let rows = DefinitionReader::from_path(path, options)?.collect::<Result<Vec<_>>>()?;
    debug!(path = %path.display(), rows = rows.len(), "definition file loaded");
    Ok(rows)
}
