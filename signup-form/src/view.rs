//! Renderable snapshot of the form.
//!
//! The form does not draw anything itself. [`FormView`] carries the text a
//! host needs for one frame: labels, display values with passwords masked,
//! error lines and the submit control.

use crate::config::FormConfig;
use crate::field::Field;
use crate::messages::Messages;
use crate::state::FormState;
use crate::submit::SubmitOutcome;

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    /// Focus ring order: the inputs, then the submit control.
    pub const ORDER: [Focus; 5] = [
        Focus::Field(Field::Username),
        Focus::Field(Field::Email),
        Focus::Field(Field::Password),
        Focus::Field(Field::ConfirmPassword),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::Submit => Self::ORDER.len() - 1,
        }
    }

    /// Next stop in the focus ring, wrapping around.
    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous stop in the focus ring, wrapping around.
    pub fn prev(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The focused field, if focus is on an input.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: String,
    /// Value as it should appear on screen.
    pub display: String,
    pub error: Option<String>,
    pub touched: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
    pub focused: bool,
}

/// Line shown under the submit control after a submission settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub button: ButtonView,
    pub status: Option<StatusView>,
}

impl FormView {
    pub(crate) fn build(
        state: &FormState,
        messages: &Messages,
        config: &FormConfig,
        focus: Option<Focus>,
    ) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                let value = state.value(field);
                let display = if field.is_secret() {
                    std::iter::repeat_n(config.mask, value.chars().count()).collect()
                } else {
                    value.to_string()
                };

                FieldView {
                    field,
                    label: messages.label(field).to_string(),
                    display,
                    error: state.error(field).map(str::to_string),
                    touched: state.is_touched(field),
                    focused: focus == Some(Focus::Field(field)),
                }
            })
            .collect();

        let submitting = state.is_submitting();
        let button = ButtonView {
            label: if submitting {
                messages.submitting.clone()
            } else {
                messages.submit.clone()
            },
            disabled: submitting,
            focused: focus == Some(Focus::Submit),
        };

        let status = match state.last_outcome() {
            None => None,
            Some(SubmitOutcome::Succeeded) => Some(StatusView::Success(messages.submitted.clone())),
            Some(SubmitOutcome::Failed(reason)) => Some(StatusView::Failure(format!(
                "{}: {}",
                messages.submit_failed, reason
            ))),
        };

        Self {
            fields,
            button,
            status,
        }
    }

    /// The view of one field.
    pub fn field(&self, field: Field) -> &FieldView {
        &self.fields[field.index()]
    }

    /// Plain-text rendering, one string per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for field in &self.fields {
            let marker = if field.focused { '>' } else { ' ' };
            lines.push(field.label.clone());
            lines.push(format!("{} [{}]", marker, field.display));
            if let Some(error) = &field.error {
                lines.push(format!("  ! {}", error));
            }
        }

        let marker = if self.button.focused { '>' } else { ' ' };
        let state = if self.button.disabled { " (disabled)" } else { "" };
        lines.push(format!("{} < {} >{}", marker, self.button.label, state));

        match &self.status {
            Some(StatusView::Success(msg)) | Some(StatusView::Failure(msg)) => {
                lines.push(msg.clone())
            }
            None => {}
        }

        lines
    }
}
