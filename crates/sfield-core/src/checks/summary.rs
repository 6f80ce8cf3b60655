//! Rollup summary checks.

use sfield_model::{ROLLUP_OPERATIONS, SummaryAttributes};

pub fn check(summary: &SummaryAttributes) -> Vec<String> {
    let operation = summary.summary_operation.as_deref().unwrap_or_default();
    if ROLLUP_OPERATIONS.contains(&operation) {
        return Vec::new();
    }
    vec![format!(
        "Bad rollup summary definition, unknown operation. Please use: {}",
        ROLLUP_OPERATIONS.join(",")
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_must_be_known() {
        let mut summary = SummaryAttributes {
            summary_operation: Some("Avg".to_string()),
            ..SummaryAttributes::default()
        };
        assert_eq!(check(&summary).len(), 1);
        summary.summary_operation = Some("Sum".to_string());
        assert!(check(&summary).is_empty());
    }
}
