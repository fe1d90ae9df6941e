use std::collections::BTreeMap;

use crate::field::Field;

use super::FieldError;

/// Current error message per field.
///
/// At most one message per field; setting a message replaces the previous
/// one. Iteration follows field display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    messages: BTreeMap<Field, String>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the message for a field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Set the message for a field, replacing any previous one.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Remove the message for a field. Returns true if there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    /// Remove all messages.
    pub fn clear_all(&mut self) {
        self.messages.clear();
    }

    /// Apply the outcome of validating a single field.
    pub fn apply(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => self.set(field, error.message),
            None => {
                self.clear(field);
            }
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// First invalid field in display order.
    pub fn first(&self) -> Option<Field> {
        self.messages.keys().next().copied()
    }

    /// Iterate over `(field, message)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl FromIterator<FieldError> for ValidationErrorSet {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut set = Self::new();
        for error in iter {
            set.set(error.field, error.message);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces() {
        let mut set = ValidationErrorSet::new();
        set.set(Field::Password, "too short");
        set.set(Field::Password, "no uppercase");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Field::Password), Some("no uppercase"));
    }

    #[test]
    fn test_display_order() {
        let set: ValidationErrorSet = [
            FieldError::new(Field::ConfirmPassword, "c"),
            FieldError::new(Field::Email, "e"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.first(), Some(Field::Email));
        let fields: Vec<_> = set.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Email, Field::ConfirmPassword]);
    }

    #[test]
    fn test_apply_clears() {
        let mut set = ValidationErrorSet::new();
        set.apply(Field::Email, Some(FieldError::new(Field::Email, "bad")));
        assert!(set.contains(Field::Email));
        set.apply(Field::Email, None);
        assert!(set.is_empty());
    }
}
