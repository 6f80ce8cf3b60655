//! CLI library components for the field generator.

pub mod logging;
pub mod pipeline;
pub mod project;
pub mod types;
