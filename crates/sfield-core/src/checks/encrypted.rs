use sfield_model::{EncryptedAttributes, MASK_CHARS, MASK_TYPES};

pub fn check(encrypted: &EncryptedAttributes) -> Vec<String> {
    let mut issues = Vec::new();
    let mask_type = encrypted.mask_type.as_deref().unwrap_or_default();
    if !MASK_TYPES.contains(&mask_type) {
        issues.push(format!(
            "Bad encrypted text definition, unknown maskType. Please use: {}",
            MASK_TYPES.join(",")
        ));
    }
    let mask_char = encrypted.mask_char.as_deref().unwrap_or_default();
    if !MASK_CHARS.contains(&mask_char) {
        issues.push(format!(
            "Bad encrypted text definition, unknown maskChar. Please use: {}",
            MASK_CHARS.join(",")
        ));
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encrypted(mask_type: &str, mask_char: &str) -> EncryptedAttributes {
        EncryptedAttributes {
            mask_type: Some(mask_type.to_string()),
            mask_char: Some(mask_char.to_string()),
        }
    }

    #[test]
    fn accepts_known_masks() {
        assert!(check(&encrypted("lastFour", "X")).is_empty());
        assert!(check(&encrypted("all", "*")).is_empty());
    }

    #[test]
    fn reports_each_bad_mask() {
        let issues = check(&encrypted("middle", "#"));
        assert_eq!(
            issues,
            [
                "Bad encrypted text definition, unknown maskType. Please use: all,creditCard,lastFour,nino,sin,ssn",
                "Bad encrypted text definition, unknown maskChar. Please use: *,X",
            ]
        );
    }
}
