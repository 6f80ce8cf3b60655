//! Lookup relationship checks.

use sfield_model::{DELETE_CONSTRAINTS, LookupAttributes};

pub fn check(lookup: &LookupAttributes) -> Vec<String> {
    let constraint = lookup.delete_constraint.as_deref().unwrap_or_default();
    if DELETE_CONSTRAINTS.contains(&constraint) {
        return Vec::new();
    }
    vec![format!(
        "The constraint '{constraint}' is NOT a valid value: {}",
        DELETE_CONSTRAINTS.join(",")
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(constraint: Option<&str>) -> LookupAttributes {
        LookupAttributes {
            delete_constraint: constraint.map(str::to_string),
            ..LookupAttributes::default()
        }
    }

    #[test]
    fn accepts_known_constraints() {
        for constraint in DELETE_CONSTRAINTS {
            assert!(check(&lookup(Some(constraint))).is_empty());
        }
    }

    #[test]
    fn rejects_unknown_or_missing_constraint() {
        assert_eq!(
            check(&lookup(Some("restrict"))),
            ["The constraint 'restrict' is NOT a valid value: Restrict,Cascade,SetNull"]
        );
        assert_eq!(check(&lookup(None)).len(), 1);
    }
}
