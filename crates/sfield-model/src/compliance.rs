use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly a definition column is expected to be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    /// Missing values block file generation.
    Required,
    /// Missing values are reported but the file is still generated.
    Recommended,
    /// Missing values are ignored.
    Optional,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Required => "Required",
            Presence::Recommended => "Recommended",
            Presence::Optional => "Optional",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors and warnings gathered while a record is built.
///
/// Each record owns its own log; nothing is shared between rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliance {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Compliance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `message` according to `presence`: required issues become
    /// errors, recommended ones warnings, optional ones are dropped.
    pub fn record(&mut self, message: impl Into<String>, presence: Presence) {
        match presence {
            Presence::Required => self.errors.push(message.into()),
            Presence::Recommended => self.warnings.push(message.into()),
            Presence::Optional => {}
        }
    }

    /// Records a presence issue for `column` if `missing` is true.
    pub fn check_presence(&mut self, column: &str, missing: bool, presence: Presence) {
        if missing {
            self.record(format!("{column} is missing"), presence);
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warning(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_presence() {
        let mut log = Compliance::new();
        log.check_presence("label", true, Presence::Required);
        log.check_presence("description", true, Presence::Recommended);
        log.check_presence("defaultValue", true, Presence::Optional);
        log.check_presence("fullname", false, Presence::Required);

        assert_eq!(log.errors(), ["label is missing"]);
        assert_eq!(log.warnings(), ["description is missing"]);
        assert!(log.has_error());
        assert!(log.has_warning());
    }

    #[test]
    fn empty_log_has_no_flags() {
        let log = Compliance::new();
        assert!(!log.has_error());
        assert!(!log.has_warning());
        assert_eq!(log.error_count(), 0);
        assert_eq!(log.warning_count(), 0);
    }
}
