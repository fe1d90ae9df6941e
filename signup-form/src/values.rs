//! The data entity collected by the form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Raw text of all four inputs.
///
/// Serializes with the keys hosts expect (`confirmPassword`), so the object
/// handed to a submit handler can be forwarded as-is.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    /// Create values from all four fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Get the raw text of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the raw text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }
}

// Passwords never reach logs through `{:?}`.
impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut values = FormValues::default();
        values.set(Field::ConfirmPassword, "Secret123");
        assert_eq!(values.get(Field::ConfirmPassword), "Secret123");
        assert_eq!(values.get(Field::Password), "");
    }

    #[test]
    fn test_debug_masks_passwords() {
        let values = FormValues::new("alice", "alice@example.com", "Secret123", "Secret123");
        let debug = format!("{:?}", values);
        assert!(debug.contains("alice@example.com"));
        assert!(!debug.contains("Secret123"));
    }
}
