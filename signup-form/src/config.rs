//! Form configuration: when validation runs and how the form is presented.

use serde::{Deserialize, Serialize};

use crate::messages::Locale;

/// When a field is validated before the first submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Only on submit.
    OnSubmit,
    /// Every time the field loses focus.
    OnBlur,
    /// Every time the value changes.
    OnChange,
    /// On the first blur, then on every change.
    #[default]
    OnTouched,
    /// On blur and on change.
    All,
}

/// When a field is re-validated after a submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevalidateMode {
    #[default]
    OnChange,
    OnBlur,
    OnSubmit,
}

/// The input event that may trigger validation of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Change,
    Blur,
}

/// Form configuration.
///
/// # Example
///
/// ```
/// use signup_form::{FormConfig, Locale, ValidationMode};
///
/// let config = FormConfig::new()
///     .mode(ValidationMode::OnBlur)
///     .locale(Locale::En);
/// assert_eq!(config.locale, Locale::En);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub mode: ValidationMode,
    pub revalidate_mode: RevalidateMode,
    pub locale: Locale,
    /// Character drawn in place of each password character.
    pub mask: char,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            revalidate_mode: RevalidateMode::default(),
            locale: Locale::default(),
            mask: '•',
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation mode used before the first submit.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the re-validation mode used after a submit attempt.
    pub fn revalidate_mode(mut self, mode: RevalidateMode) -> Self {
        self.revalidate_mode = mode;
        self
    }

    /// Set the message catalog language.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the password mask character.
    pub fn mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Decide whether `trigger` should validate a field.
    ///
    /// `touched` is the field's touched flag, `submitted` whether the form saw
    /// at least one submit attempt.
    pub fn should_validate(&self, trigger: Trigger, touched: bool, submitted: bool) -> bool {
        match (self.mode, trigger) {
            (ValidationMode::All, _) => return true,
            (ValidationMode::OnTouched, Trigger::Blur) => return true,
            _ => {}
        }

        if submitted {
            return match self.revalidate_mode {
                RevalidateMode::OnChange => trigger == Trigger::Change,
                RevalidateMode::OnBlur => trigger == Trigger::Blur,
                RevalidateMode::OnSubmit => false,
            };
        }

        match self.mode {
            ValidationMode::OnSubmit => false,
            ValidationMode::OnBlur => trigger == Trigger::Blur,
            ValidationMode::OnChange => trigger == Trigger::Change,
            ValidationMode::OnTouched => touched,
            ValidationMode::All => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_touched_before_submit() {
        let config = FormConfig::default();
        assert!(!config.should_validate(Trigger::Change, false, false));
        assert!(config.should_validate(Trigger::Blur, false, false));
        assert!(config.should_validate(Trigger::Change, true, false));
    }

    #[test]
    fn test_revalidate_after_submit() {
        let config = FormConfig::default();
        assert!(config.should_validate(Trigger::Change, false, true));

        let config = FormConfig::new()
            .mode(ValidationMode::OnSubmit)
            .revalidate_mode(RevalidateMode::OnBlur);
        assert!(!config.should_validate(Trigger::Blur, true, false));
        assert!(!config.should_validate(Trigger::Change, true, true));
        assert!(config.should_validate(Trigger::Blur, true, true));
    }

    #[test]
    fn test_mode_all() {
        let config = FormConfig::new()
            .mode(ValidationMode::All)
            .revalidate_mode(RevalidateMode::OnSubmit);
        assert!(config.should_validate(Trigger::Change, false, false));
        assert!(config.should_validate(Trigger::Blur, false, true));
    }
}
