use validator::{Validate, ValidationError};

use crate::models::tag::TagForm;

/// A single rejected field: which field, and the message key describing
/// why. Keys double as localization lookup keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
}

// Declaration order of the name rules. The derive does not guarantee
// emission order, so collected violations are reordered against this.
const NAME_RULES: [&str; 2] = ["tag_name_empty", "tag_name_length"];

/// Collect every rule violation for a submitted tag, in the order the
/// rules are declared. Empty result means the payload is valid.
pub fn field_errors(form: &TagForm) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .field_errors()
            .iter()
            .flat_map(|(field, violations)| {
                violations.iter().map(|violation| FieldError {
                    field: field.to_string(),
                    code: violation.code.to_string(),
                })
            })
            .collect(),
    };

    errors.sort_by_key(|error| {
        NAME_RULES
            .iter()
            .position(|code| *code == error.code.as_str())
            .unwrap_or(NAME_RULES.len())
    });

    errors
}

pub fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("tag_name_empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> TagForm {
        TagForm { name: name.to_string() }
    }

    #[test]
    fn valid_name_produces_no_errors() {
        assert!(field_errors(&form("sale")).is_empty());
        assert!(field_errors(&form(&"a".repeat(45))).is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = field_errors(&form("   "));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].code, "tag_name_empty");
    }

    #[test]
    fn empty_name_collects_both_errors_in_declaration_order() {
        let errors = field_errors(&form(""));
        let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["tag_name_empty", "tag_name_length"]);
    }

    #[test]
    fn overlong_name_is_rejected() {
        let errors = field_errors(&form(&"a".repeat(46)));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "tag_name_length");
    }
}
