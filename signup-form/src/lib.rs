//! Registration form engine.
//!
//! A [`RegistrationForm`] holds username, email, password and password
//! confirmation, validates them against a [`Schema`] and hands the validated
//! [`FormValues`] to a [`SubmitHandler`]. Rendering is left to the host, which
//! draws a [`FormView`] after each input event.

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod messages;
pub mod state;
pub mod submit;
pub mod validation;
pub mod values;
pub mod view;

pub use config::{FormConfig, RevalidateMode, Trigger, ValidationMode};
pub use error::{FormError, SubmitError};
pub use field::Field;
pub use form::RegistrationForm;
pub use messages::{Locale, Messages};
pub use state::FormState;
pub use submit::{FnSubmitHandler, LoggingSubmitHandler, SubmitHandler, SubmitOutcome};
pub use validation::{FieldError, Schema, ValidationErrorSet, ValidationResult};
pub use values::FormValues;
pub use view::{ButtonView, FieldView, Focus, FormView, StatusView};

pub mod prelude {
    pub use crate::config::{FormConfig, RevalidateMode, ValidationMode};
    pub use crate::error::{FormError, SubmitError};
    pub use crate::field::Field;
    pub use crate::form::RegistrationForm;
    pub use crate::messages::Locale;
    pub use crate::submit::{LoggingSubmitHandler, SubmitHandler, SubmitOutcome};
    pub use crate::values::FormValues;
    pub use crate::view::{Focus, FormView};
}
