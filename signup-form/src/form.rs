//! The registration form component.

use log::{debug, info, warn};

use crate::config::{FormConfig, Trigger};
use crate::error::{FormError, SubmitError};
use crate::field::Field;
use crate::messages::Messages;
use crate::state::FormState;
use crate::submit::{SubmitHandler, SubmitOutcome};
use crate::validation::{Schema, ValidationErrorSet};
use crate::values::FormValues;
use crate::view::{Focus, FormView};

/// Type alias for state observer callbacks.
type Observer = Box<dyn Fn(&FormState) + Send + Sync>;

/// A registration form: four fields, a schema and a submit control.
///
/// Hosts forward input events to [`update_field`](Self::update_field),
/// [`touch_field`](Self::touch_field) and [`submit`](Self::submit), and
/// redraw from [`view`](Self::view) or from an observer registered with
/// [`subscribe`](Self::subscribe).
///
/// # Example
///
/// ```
/// use signup_form::{Field, LoggingSubmitHandler, RegistrationForm};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let mut form = RegistrationForm::new();
/// form.update_field(Field::Username, "alice");
/// form.update_field(Field::Email, "alice@example.com");
/// form.update_field(Field::Password, "Secret123");
/// form.update_field(Field::ConfirmPassword, "Secret123");
///
/// form.submit(&LoggingSubmitHandler::new()).await.unwrap();
/// assert!(form.errors().is_empty());
/// # });
/// ```
pub struct RegistrationForm {
    schema: Schema,
    config: FormConfig,
    messages: Messages,
    state: FormState,
    observers: Vec<Observer>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    /// Create a form with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a form using the registration schema in the configured locale.
    pub fn with_config(config: FormConfig) -> Self {
        let messages = config.locale.messages();
        let schema = Schema::registration(&messages);
        Self::with_schema(config, schema)
    }

    /// Create a form with a custom schema.
    pub fn with_schema(config: FormConfig, schema: Schema) -> Self {
        let messages = config.locale.messages();
        Self {
            schema,
            config,
            messages,
            state: FormState::default(),
            observers: Vec::new(),
        }
    }

    /// Start from `defaults` instead of empty values. `reset` returns here.
    pub fn with_defaults(mut self, defaults: FormValues) -> Self {
        self.state = FormState::with_defaults(defaults);
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.value(field)
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        self.state.errors()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.state.error(field)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.state.is_touched(field)
    }

    pub fn is_dirty(&self, field: Field) -> bool {
        self.state.is_dirty(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn submit_count(&self) -> u32 {
        self.state.submit_count()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted()
    }

    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.state.last_outcome()
    }

    /// Run the full schema without touching any state.
    pub fn is_valid(&self) -> bool {
        self.schema.validate(&self.state.values).is_valid()
    }

    /// Register a callback run after every mutation.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&FormState) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Store new raw text for a field.
    ///
    /// Re-validates the field when the configured mode asks for it; in the
    /// default mode that means once it was touched or the form was submitted.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.values.set(field, value);

        let touched = self.state.is_touched(field);
        if self
            .config
            .should_validate(Trigger::Change, touched, self.state.is_submitted())
        {
            self.revalidate(field);
        }

        self.notify();
    }

    /// [`update_field`](Self::update_field) addressed by field name.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Mark a field as touched after it lost focus.
    pub fn touch_field(&mut self, field: Field) {
        let first_touch = self.state.touched.insert(field);
        if first_touch {
            debug!("Field touched: {}", field);
        }

        if self
            .config
            .should_validate(Trigger::Blur, true, self.state.is_submitted())
        {
            self.revalidate(field);
        }

        self.notify();
    }

    /// [`touch_field`](Self::touch_field) addressed by field name.
    pub fn touch_named(&mut self, name: &str) -> Result<(), FormError> {
        let field = name.parse()?;
        self.touch_field(field);
        Ok(())
    }

    /// Validate a single field now, whatever the mode. Returns true if valid.
    pub fn trigger(&mut self, field: Field) -> bool {
        let valid = self.revalidate(field);
        self.notify();
        valid
    }

    /// Validate everything and, if valid, enter the submitting state.
    ///
    /// Returns the validated values to hand to a submit handler; the caller
    /// must report back with [`finish_submit`](Self::finish_submit). Use this
    /// pair when the event loop has to keep running during the callback.
    pub fn begin_submit(&mut self) -> Result<FormValues, FormError> {
        if self.state.submitting {
            warn!("Submit requested while a submission is pending");
            return Err(FormError::AlreadySubmitting);
        }

        self.state.submit_count += 1;
        self.state.outcome = None;

        let result = self.schema.validate(&self.state.values);
        self.state.errors = result.to_error_set();

        if result.is_invalid() {
            debug!(
                "Submit #{} rejected: {} invalid field(s)",
                self.state.submit_count,
                self.state.errors.len()
            );
            self.notify();
            return Err(FormError::Invalid(self.state.errors.clone()));
        }

        debug!("Submit #{} validated, submitting", self.state.submit_count);
        self.state.submitting = true;
        self.notify();
        Ok(self.state.values.clone())
    }

    /// Leave the submitting state once the handler settled.
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) {
        if !self.state.submitting {
            warn!("finish_submit called with no submission pending");
            return;
        }

        let outcome = SubmitOutcome::from(result);
        match &outcome {
            SubmitOutcome::Succeeded => info!("Submission succeeded"),
            SubmitOutcome::Failed(reason) => warn!("Submission failed: {}", reason),
        }

        self.state.submitting = false;
        self.state.outcome = Some(outcome);
        self.notify();
    }

    /// Validate everything and hand the values to `handler`.
    ///
    /// On validation failure the handler is not called and the error set is
    /// returned inside [`FormError::Invalid`].
    pub async fn submit<H>(&mut self, handler: &H) -> Result<(), FormError>
    where
        H: SubmitHandler + ?Sized,
    {
        let values = self.begin_submit()?;
        let result = handler.submit(values).await;
        self.finish_submit(&result);
        result.map_err(FormError::from)
    }

    /// Return to default values and forget touched flags, errors and submit
    /// history.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.state.submitting {
            warn!("Reset requested while a submission is pending");
            return Err(FormError::AlreadySubmitting);
        }

        let defaults = self.state.defaults.clone();
        self.state = FormState::with_defaults(defaults);
        debug!("Form reset");
        self.notify();
        Ok(())
    }

    /// Build a renderable snapshot. `focus` is owned by the host.
    pub fn view(&self, focus: Option<Focus>) -> FormView {
        FormView::build(&self.state, &self.messages, &self.config, focus)
    }

    /// Validate one field and store the outcome. Returns true if valid.
    fn revalidate(&mut self, field: Field) -> bool {
        let error = self.schema.validate_field(field, &self.state.values);
        let valid = error.is_none();
        self.state.errors.apply(field, error);
        valid
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}
