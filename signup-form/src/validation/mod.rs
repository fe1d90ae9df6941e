//! Schema validation for the registration form.
//!
//! Rules are pure predicates over [`FormValues`](crate::FormValues). A
//! [`Schema`] groups them per field, plus cross-field refinements whose error
//! is attached to a chosen field.
//!
//! # Example
//!
//! ```
//! use signup_form::{Field, FormValues, Messages, Schema};
//!
//! let schema = Schema::registration(&Messages::russian());
//! let values = FormValues::new("alice", "alice@example.com", "Abcdefgh", "Abcdefgx");
//!
//! let errors = schema.validate(&values).to_error_set();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.get(Field::ConfirmPassword), Some("Пароли не совпадают"));
//! ```

mod error_set;
mod result;
pub mod rules;
mod schema;

pub use error_set::ValidationErrorSet;
pub use result::{FieldError, ValidationResult};
pub use schema::{FieldBuilder, Schema, SchemaBuilder};
