//! Loading field definition files.
//!
//! A definition file is a CSV whose first line names the columns; every
//! following line becomes one [`Row`](sfield_model::Row).

pub mod definition_file;
pub mod error;

pub use definition_file::{DefinitionReader, IngestOptions, read_definition_file};
pub use error::{IngestError, Result};
