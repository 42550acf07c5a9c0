//! Synchronous field validation.
//!
//! Every field is checked on its own; there are no cross-field rules and
//! one failing field never hides the result of another.
//!
//! # Rules
//!
//! | Field         | Required         | Max length |
//! |---------------|------------------|------------|
//! | `name`        | yes              | 200        |
//! | `description` | yes              | 200        |
//! | `url`         | yes              | 150        |
//! | `about`       | yes              | 500        |
//! | `picture`     | non-empty list   | -          |
//!
//! "Required" wins over "too long": the length is only checked when the
//! value is present. Lengths count UTF-16 code units, the way the browser
//! measures input values.
//!
//! # Example
//!
//! ```rust
//! use syncform::{validate, Field, FormValues};
//!
//! let errors = validate(&FormValues::default());
//! assert_eq!(errors.get(Field::Name), Some("Required"));
//! assert_eq!(errors.get(Field::Picture), Some("Required"));
//! ```

use crate::models::{Field, FieldErrors, FormValues};

/// Message for a missing value.
pub const REQUIRED: &str = "Required";

/// Length limit of a text field, `None` for `picture`.
pub fn max_length(field: Field) -> Option<usize> {
    match field {
        Field::Name | Field::Description => Some(200),
        Field::Url => Some(150),
        Field::About => Some(500),
        Field::Picture => None,
    }
}

/// Message for a text value over `max` characters.
pub fn too_long(max: usize) -> String {
    format!("Must be {} characters or less", max)
}

/// Check a single text value against its field's rule.
pub fn validate_text(field: Field, value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(REQUIRED.to_string());
    }
    let max = max_length(field)?;
    if value.encode_utf16().count() > max {
        return Some(too_long(max));
    }
    None
}

/// Map the submitted values to their validation messages.
///
/// Pure; safe to call on every keystroke.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        let message = match values.text(field) {
            Some(text) => validate_text(field, text),
            None if values.picture.is_empty() => Some(REQUIRED.to_string()),
            None => None,
        };
        if let Some(message) = message {
            errors.insert(field, message);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileHandle;

    fn valid_values() -> FormValues {
        FormValues {
            name: "Mass Load".into(),
            description: "Bulk registration of musical works".into(),
            url: "https://allfeat.org".into(),
            about: "Longer text about the project".into(),
            picture: vec![FileHandle::new("cover.png", "image/png", 1024)],
        }
    }

    #[test]
    fn test_valid_values_have_no_errors() {
        assert!(validate(&valid_values()).is_empty());
    }

    #[test]
    fn test_empty_form_requires_everything() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.len(), 5);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(REQUIRED), "{}", field);
        }
    }

    #[test]
    fn test_missing_name() {
        let values = FormValues {
            name: String::new(),
            ..valid_values()
        };
        let errors = validate(&values);
        assert_eq!(errors.get(Field::Name), Some("Required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_description_too_long_is_not_required() {
        let values = FormValues {
            description: "é".repeat(201),
            ..valid_values()
        };
        let errors = validate(&values);
        assert_eq!(errors.get(Field::Description), Some("Must be 200 characters or less"));
    }

    #[test]
    fn test_length_boundaries() {
        let cases = [
            (Field::Name, 200),
            (Field::Description, 200),
            (Field::Url, 150),
            (Field::About, 500),
        ];
        for (field, max) in cases {
            assert_eq!(validate_text(field, &"a".repeat(max)), None);
            assert_eq!(validate_text(field, &"a".repeat(max + 1)), Some(too_long(max)));
        }
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Each emoji is a surrogate pair: 100 of them measure 200.
        assert_eq!(validate_text(Field::Name, &"🦀".repeat(100)), None);
        assert!(validate_text(Field::Name, &format!("{}a", "🦀".repeat(100))).is_some());
    }

    #[test]
    fn test_whitespace_is_present() {
        assert_eq!(validate_text(Field::Url, "   "), None);
    }

    #[test]
    fn test_url_shape_not_checked() {
        let values = FormValues {
            url: "not a url".into(),
            ..valid_values()
        };
        assert!(!validate(&values).contains(Field::Url));
    }

    #[test]
    fn test_picture_list() {
        let mut values = valid_values();
        values.picture.clear();
        assert_eq!(validate(&values).get(Field::Picture), Some("Required"));

        values.picture.push(FileHandle::new("a.png", "image/png", 1));
        assert!(!validate(&values).contains(Field::Picture));
    }

    #[test]
    fn test_fields_fail_independently() {
        let values = FormValues {
            name: String::new(),
            about: "x".repeat(501),
            ..valid_values()
        };
        let errors = validate(&values);
        assert_eq!(errors.get(Field::Name), Some("Required"));
        assert_eq!(errors.get(Field::About), Some("Must be 500 characters or less"));
        assert_eq!(errors.len(), 2);
    }
}
