//! Form field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// One named input of the registration form.
///
/// Variants are declared in display order, so sorting by `Field` yields the
/// order in which inputs appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable name used by hosts to address the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Whether the value must be masked when displayed.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The field after this one, if any.
    pub fn next(self) -> Option<Field> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The field before this one, if any.
    pub fn prev(self) -> Option<Field> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().ok(), Some(field));
        }
        assert!(matches!(
            "confirm_password".parse::<Field>(),
            Err(FormError::UnknownField(name)) if name == "confirm_password"
        ));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(Field::Username.next(), Some(Field::Email));
        assert_eq!(Field::ConfirmPassword.next(), None);
        assert_eq!(Field::Username.prev(), None);
        assert_eq!(Field::ConfirmPassword.prev(), Some(Field::Password));
    }
}
