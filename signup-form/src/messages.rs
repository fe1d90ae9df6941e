//! User-visible strings.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Language of the message catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// The catalog for this locale.
    pub fn messages(self) -> Messages {
        match self {
            Locale::Ru => Messages::russian(),
            Locale::En => Messages::english(),
        }
    }
}

/// Every string the form shows: rule messages, labels and button text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub username_too_short: String,
    pub username_too_long: String,
    pub email_invalid: String,
    pub password_too_short: String,
    pub password_missing_uppercase: String,
    pub passwords_mismatch: String,

    pub username_label: String,
    pub email_label: String,
    pub password_label: String,
    pub confirm_password_label: String,

    pub submit: String,
    pub submitting: String,
    pub submitted: String,
    pub submit_failed: String,
}

impl Messages {
    pub fn russian() -> Self {
        Self {
            username_too_short: "Имя должно быть не менее 3 символов".into(),
            username_too_long: "Имя слишком длинное".into(),
            email_invalid: "Введите корректный email".into(),
            password_too_short: "Пароль должен быть не менее 8 символов".into(),
            password_missing_uppercase: "Пароль должен содержать хотя бы одну заглавную букву"
                .into(),
            passwords_mismatch: "Пароли не совпадают".into(),

            username_label: "Имя пользователя:".into(),
            email_label: "Email:".into(),
            password_label: "Пароль:".into(),
            confirm_password_label: "Подтвердите пароль:".into(),

            submit: "Зарегистрироваться".into(),
            submitting: "Отправка...".into(),
            submitted: "Данные формы валидны".into(),
            submit_failed: "Не удалось отправить форму".into(),
        }
    }

    pub fn english() -> Self {
        Self {
            username_too_short: "Username must be at least 3 characters".into(),
            username_too_long: "Username is too long".into(),
            email_invalid: "Enter a valid email".into(),
            password_too_short: "Password must be at least 8 characters".into(),
            password_missing_uppercase: "Password must contain at least one uppercase letter"
                .into(),
            passwords_mismatch: "Passwords do not match".into(),

            username_label: "Username:".into(),
            email_label: "Email:".into(),
            password_label: "Password:".into(),
            confirm_password_label: "Confirm password:".into(),

            submit: "Register".into(),
            submitting: "Submitting...".into(),
            submitted: "Form data is valid".into(),
            submit_failed: "Submission failed".into(),
        }
    }

    /// Label shown next to a field's input.
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username_label,
            Field::Email => &self.email_label,
            Field::Password => &self.password_label,
            Field::ConfirmPassword => &self.confirm_password_label,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Locale::default().messages()
    }
}
