//! Submission handlers: where validated data goes.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use log::info;

use crate::error::SubmitError;
use crate::values::FormValues;

/// Receives validated form data.
///
/// The form re-enables its submit control once `submit` settles, whatever
/// the result. Retry and timeout policy belong to the implementation.
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn submit(&self, values: FormValues) -> Result<(), SubmitError>;
}

/// How the last submission callback settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(String),
}

impl From<&Result<(), SubmitError>> for SubmitOutcome {
    fn from(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self::Succeeded,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Logs the validated data and reports success.
#[derive(Debug, Clone, Default)]
pub struct LoggingSubmitHandler {
    latency: Option<Duration>,
}

impl LoggingSubmitHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait this long before settling, to stand in for a network call.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl SubmitHandler for LoggingSubmitHandler {
    async fn submit(&self, values: FormValues) -> Result<(), SubmitError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        info!("Form data is valid: {:?}", values);
        Ok(())
    }
}

/// Adapts an async closure into a [`SubmitHandler`].
///
/// # Example
///
/// ```
/// use signup_form::{FnSubmitHandler, FormValues, SubmitError};
///
/// let handler = FnSubmitHandler::new(|values: FormValues| async move {
///     if values.username == "admin" {
///         Err(SubmitError::Rejected("name taken".into()))
///     } else {
///         Ok(())
///     }
/// });
/// # let _ = handler;
/// ```
pub struct FnSubmitHandler<F> {
    f: F,
}

impl<F> FnSubmitHandler<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> SubmitHandler for FnSubmitHandler<F>
where
    F: Fn(FormValues) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), SubmitError>> + Send,
{
    async fn submit(&self, values: FormValues) -> Result<(), SubmitError> {
        (self.f)(values).await
    }
}
