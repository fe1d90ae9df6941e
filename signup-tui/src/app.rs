//! Event handling: turns key presses into form operations.

use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::{debug, error, info};
use signup_form::prelude::*;
use tokio::sync::mpsc;

use crate::input::{EditResult, TextInput};
use crate::terminal::TerminalGuard;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Submit,
    Quit,
}

/// The running form: state, focus and the pending submission channel.
pub struct App {
    form: RegistrationForm,
    focus: Focus,
    inputs: [TextInput; 4],
    handler: Arc<dyn SubmitHandler>,
    results_tx: mpsc::UnboundedSender<Result<(), SubmitError>>,
    results_rx: mpsc::UnboundedReceiver<Result<(), SubmitError>>,
}

impl App {
    pub fn new(form: RegistrationForm, handler: Arc<dyn SubmitHandler>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            form,
            focus: Focus::Field(Field::Username),
            inputs: Default::default(),
            handler,
            results_tx,
            results_rx,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Run until the user quits.
    pub async fn run(mut self, terminal: &mut TerminalGuard) -> io::Result<()> {
        let mut events = EventStream::new();

        loop {
            terminal.draw(&self.form().view(Some(self.focus())), self.cursor())?;

            tokio::select! {
                Some(event) = events.next() => {
                    let event = event?;
                    if let Event::Key(key) = event {
                        match self.handle_key(key) {
                            Action::Quit => break,
                            Action::Submit => self.start_submit(),
                            Action::None => {}
                        }
                    }
                }

                Some(result) = self.results_rx.recv() => {
                    self.form.finish_submit(&result);
                }

                else => break,
            }
        }

        info!("Form closed after {} submit attempt(s)", self.form().submit_count());
        Ok(())
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('s') if ctrl => return Action::Submit,
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return Action::None;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(self.focus.next());
                return Action::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(self.focus.prev());
                return Action::None;
            }
            KeyCode::Enter => {
                return match self.focus {
                    Focus::Submit => Action::Submit,
                    Focus::Field(_) => {
                        self.move_focus(self.focus.next());
                        Action::None
                    }
                };
            }
            _ => {}
        }

        if let Some(field) = self.focus.field() {
            let input = &mut self.inputs[field.index()];
            if input.handle_key(key.code, key.modifiers) == EditResult::Changed {
                self.form.update_field(field, input.text());
            }
        }

        Action::None
    }

    /// Move focus, touching the field being left.
    fn move_focus(&mut self, next: Focus) {
        if let Some(field) = self.focus.field() {
            self.form.touch_field(field);
        }
        self.focus = next;
    }

    /// Validate and, if valid, hand the values to the handler on a task.
    fn start_submit(&mut self) {
        match self.form.begin_submit() {
            Ok(values) => {
                let handler = Arc::clone(&self.handler);
                let tx = self.results_tx.clone();
                tokio::spawn(async move {
                    let result = handler.submit(values).await;
                    if tx.send(result).is_err() {
                        error!("Submission settled after the form closed");
                    }
                });
            }
            Err(FormError::Invalid(errors)) => {
                if let Some(field) = errors.first() {
                    self.focus = Focus::Field(field);
                }
            }
            Err(e) => debug!("Submit ignored: {}", e),
        }
    }

    fn reset(&mut self) {
        if let Err(e) = self.form.reset() {
            debug!("Reset ignored: {}", e);
            return;
        }
        for (field, input) in Field::ALL.into_iter().zip(self.inputs.iter_mut()) {
            input.clear();
            let value = self.form.value(field);
            for c in value.chars() {
                input.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
            }
        }
        self.focus = Focus::Field(Field::Username);
    }

    /// Cursor position inside the focused input.
    fn cursor(&self) -> Option<(Field, u16)> {
        let field = self.focus.field()?;
        let mask = field.is_secret().then_some(self.form.config().mask);
        Some((field, self.inputs[field.index()].cursor_width(mask)))
    }
}
