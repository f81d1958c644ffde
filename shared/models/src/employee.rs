//! Employee domain models.
//!
//! `Employee` is the persisted shape, `NewEmployee` the create payload and
//! `EmployeeUpdate` the merge-patch payload for updates.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::patch::Patch;

/// Column width shared by every text field of the `employees` table.
pub const MAX_TEXT_LEN: u64 = 255;

/// An employee as stored in and returned from the `employees` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Create payload. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct NewEmployee {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,
    #[validate(length(max = 255, message = "Department must be at most 255 characters"))]
    pub department: String,
}

/// Update payload. Only the fields present in the body are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    #[validate(custom = "validate_patch_text")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    #[validate(custom = "validate_patch_text")]
    pub email: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    #[validate(custom = "validate_patch_text")]
    pub department: Patch<String>,
}

impl Employee {
    pub fn new(id: i32, new: NewEmployee) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            department: new.department,
        }
    }

    /// Merges an update into this record. `id` is never touched.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        update.name.apply_to(&mut self.name);
        update.email.apply_to(&mut self.email);
        update.department.apply_to(&mut self.department);
    }
}

impl EmployeeUpdate {
    /// True when the payload carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_missing() && self.email.is_missing() && self.department.is_missing()
    }

    /// The email this update would write, if any.
    pub fn new_email(&self) -> Option<&str> {
        self.email.as_value().map(String::as_str)
    }
}

fn validate_patch_text(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Missing => Ok(()),
        Patch::Null => {
            let mut error = ValidationError::new("null");
            error.message = Some(Cow::from("Field cannot be null"));
            Err(error)
        }
        Patch::Value(text) => {
            if validator::validate_length(text, None, Some(MAX_TEXT_LEN), None) {
                Ok(())
            } else {
                let mut error = ValidationError::new("length");
                error.message = Some(Cow::from("Value must be at most 255 characters"));
                error.add_param(Cow::from("max"), &MAX_TEXT_LEN);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            department: "Eng".to_string(),
        }
    }

    #[test]
    fn create_payload_requires_every_field() {
        let missing = serde_json::from_str::<NewEmployee>(r#"{"name":"A","email":"a@x.com"}"#);
        assert!(missing.is_err());

        let mistyped =
            serde_json::from_str::<NewEmployee>(r#"{"name":"A","email":"a@x.com","department":3}"#);
        assert!(mistyped.is_err());
    }

    #[test]
    fn create_payload_rejects_overlong_text() {
        let payload = NewEmployee {
            name: "n".repeat(256),
            email: "a@x.com".to_string(),
            department: "Eng".to_string(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn department_only_update_leaves_other_fields() {
        let mut employee = sample();
        let update: EmployeeUpdate = serde_json::from_str(r#"{"department":"X"}"#).unwrap();

        employee.apply(update);

        assert_eq!(employee.department, "X");
        assert_eq!(employee.name, "A");
        assert_eq!(employee.email, "a@x.com");
        assert_eq!(employee.id, 1);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut employee = sample();
        let update: EmployeeUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());

        employee.apply(update);
        assert_eq!(employee, sample());
    }

    #[test]
    fn explicit_null_fails_validation() {
        let update: EmployeeUpdate = serde_json::from_str(r#"{"email":null}"#).unwrap();
        let errors = update.validate().unwrap_err();
        let email_errors = errors.field_errors()["email"];
        assert_eq!(email_errors[0].code, "null");
    }

    #[test]
    fn serialized_update_omits_missing_fields() {
        let update = EmployeeUpdate {
            name: Patch::Value("B".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"name":"B"}"#);
    }
}
