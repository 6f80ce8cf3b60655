use sfield_model::LocationAttributes;

use super::undefined_number;

pub fn check(location: &LocationAttributes) -> Vec<String> {
    if undefined_number(location.scale) {
        vec!["Bad location definition, scale not defined".to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfield_model::IntValue;

    #[test]
    fn scale_must_be_a_number() {
        let mut location = LocationAttributes {
            display_location_in_decimal: true,
            scale: Some(IntValue::NotANumber),
        };
        assert_eq!(check(&location).len(), 1);
        location.scale = Some(IntValue::Int(4));
        assert!(check(&location).is_empty());
    }
}
