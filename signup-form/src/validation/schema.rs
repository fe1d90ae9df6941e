//! Declarative validation schema with a fluent builder.

use log::debug;
use regex::Regex;

use crate::field::Field;
use crate::messages::Messages;
use crate::values::FormValues;

use super::result::{FieldError, ValidationResult};
use super::rules;

/// Type alias for single-value rule closures.
type ValueCheck = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Type alias for cross-field rule closures.
type ValuesCheck = Box<dyn Fn(&FormValues) -> bool + Send + Sync>;

struct Rule {
    check: ValueCheck,
    message: String,
}

struct FieldRules {
    field: Field,
    rules: Vec<Rule>,
}

/// A rule reading several fields whose error is attached to `target`.
struct Refinement {
    target: Field,
    check: ValuesCheck,
    message: String,
}

/// The complete set of per-field and cross-field rules.
///
/// Each field reports at most one error: its own rules run in the order they
/// were added, then the refinements targeting it, and the first failure wins.
/// Every field is checked, so a full validation reports all invalid fields.
///
/// # Example
///
/// ```
/// use signup_form::{Field, FormValues, Schema};
///
/// let schema = Schema::builder()
///     .field(Field::Username)
///         .min_length(3, "too short")
///     .refine(
///         Field::ConfirmPassword,
///         |v| v.password == v.confirm_password,
///         "mismatch",
///     )
///     .build();
///
/// let values = FormValues::new("al", "", "a", "b");
/// let result = schema.validate(&values);
/// assert_eq!(result.errors().len(), 2);
/// ```
pub struct Schema {
    fields: Vec<FieldRules>,
    refinements: Vec<Refinement>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder {
            schema: Schema {
                fields: Vec::new(),
                refinements: Vec::new(),
            },
        }
    }

    /// The registration schema, with messages taken from `messages`.
    pub fn registration(messages: &Messages) -> Self {
        Self::builder()
            .field(Field::Username)
            .min_length(3, &messages.username_too_short)
            .max_length(20, &messages.username_too_long)
            .field(Field::Email)
            .email(&messages.email_invalid)
            .field(Field::Password)
            .min_length(8, &messages.password_too_short)
            .uppercase(&messages.password_missing_uppercase)
            .refine(
                Field::ConfirmPassword,
                |v| v.password == v.confirm_password,
                &messages.passwords_mismatch,
            )
            .build()
    }

    /// Validate every field.
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        let errors: Vec<FieldError> = Field::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, values))
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Validate one field against the current values of all fields.
    pub fn validate_field(&self, field: Field, values: &FormValues) -> Option<FieldError> {
        let value = values.get(field);

        let own = self
            .fields
            .iter()
            .filter(|entry| entry.field == field)
            .flat_map(|entry| entry.rules.iter())
            .find(|rule| !(rule.check)(value))
            .map(|rule| rule.message.as_str());

        let message = own.or_else(|| {
            self.refinements
                .iter()
                .filter(|r| r.target == field)
                .find(|r| !(r.check)(values))
                .map(|r| r.message.as_str())
        });

        debug!("validate {}: {:?}", field, message);
        message.map(|m| FieldError::new(field, m))
    }
}

/// Builder for a [`Schema`].
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Start adding rules for a field.
    pub fn field(self, field: Field) -> FieldBuilder {
        FieldBuilder {
            builder: self,
            field,
            rules: Vec::new(),
        }
    }

    /// Add a cross-field rule whose error is attached to `target`.
    pub fn refine<F>(mut self, target: Field, check: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        self.schema.refinements.push(Refinement {
            target,
            check: Box::new(check),
            message: msg.into(),
        });
        self
    }

    pub fn build(self) -> Schema {
        self.schema
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    builder: SchemaBuilder,
    field: Field,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom rule. The value passes when `f` returns true.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            check: Box::new(f),
            message: msg.into(),
        });
        self
    }

    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(rules::is_present, msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| rules::min_length(v, min), msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| rules::max_length(v, max), msg)
    }

    /// Require the value to match a regex somewhere.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require at least one ASCII uppercase letter.
    pub fn uppercase(self, msg: impl Into<String>) -> Self {
        self.rule(rules::has_uppercase, msg)
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(rules::is_email, msg)
    }

    /// Continue to the next field.
    pub fn field(self, field: Field) -> FieldBuilder {
        self.finalize().field(field)
    }

    /// Add a cross-field rule whose error is attached to `target`.
    pub fn refine<F>(self, target: Field, check: F, msg: impl Into<String>) -> SchemaBuilder
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        self.finalize().refine(target, check, msg)
    }

    /// Finalize and build the schema.
    pub fn build(self) -> Schema {
        self.finalize().build()
    }

    fn finalize(self) -> SchemaBuilder {
        let mut builder = self.builder;
        builder.schema.fields.push(FieldRules {
            field: self.field,
            rules: self.rules,
        });
        builder
    }
}
