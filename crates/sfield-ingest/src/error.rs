use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("open definition file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("read definition header: {0}")]
    Header(#[source] csv::Error),
    #[error("read definition row {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
