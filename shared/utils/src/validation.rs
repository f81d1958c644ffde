use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

/// One entry of a 422 response body: where the problem is, what it is, and
/// a machine-readable kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationDetail {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Flattens body validation errors into details, sorted by field name.
pub fn validation_details(errors: &ValidationErrors) -> Vec<ValidationDetail> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |error| {
                    ValidationDetail::new(
                        &["body", field],
                        message_for(field, error),
                        error.code.as_ref(),
                    )
                })
        })
        .collect()
}

/// Single-line rendering, for logs.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    validation_details(errors)
        .into_iter()
        .map(|detail| detail.msg)
        .collect::<Vec<_>>()
        .join(", ")
}

fn message_for(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "length" => format!("Length validation failed for field '{}'", field),
        "null" => format!("Field '{}' cannot be null", field),
        "required" => format!("Field '{}' is required", field),
        code => format!("Validation failed for field '{}': {}", field, code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn errors() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        let mut null = ValidationError::new("null");
        null.message = Some(Cow::from("Field cannot be null"));
        errors.add("email", null);
        errors
    }

    #[test]
    fn details_are_sorted_and_located_in_body() {
        let details = validation_details(&errors());

        assert_eq!(
            details,
            vec![
                ValidationDetail::new(&["body", "email"], "Field cannot be null", "null"),
                ValidationDetail::new(
                    &["body", "name"],
                    "Length validation failed for field 'name'",
                    "length"
                ),
            ]
        );
    }

    #[test]
    fn detail_serializes_kind_as_type() {
        let detail = ValidationDetail::new(&["path", "emp_id"], "bad id", "int_parsing");
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["type"], "int_parsing");
        assert_eq!(json["loc"][1], "emp_id");
    }

    #[test]
    fn one_line_format() {
        assert_eq!(
            format_validation_errors(&errors()),
            "Field cannot be null, Length validation failed for field 'name'"
        );
    }
}
