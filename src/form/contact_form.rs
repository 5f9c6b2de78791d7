//! The contact form: draft state, submission guard and user feedback.

use super::draft::{validate, ContactDraft};
use crate::domain::{ContactField, ValidationError};
use crate::error::{DispatchError, FormError};
use crate::services::{DispatchReceipt, NotificationDispatcher};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const SUCCESS_MESSAGE: &str = "Nachricht gesendet! Wir werden uns in Kürze bei dir melden.";
pub const FAILURE_MESSAGE: &str =
    "Beim Senden ist ein Fehler aufgetreten. Bitte versuche es später erneut.";
pub const BUSY_MESSAGE: &str = "Deine Nachricht wird bereits gesendet.";

/// Lifecycle of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of [`ContactForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered; the draft has been cleared.
    Sent(DispatchReceipt),

    /// The draft did not validate; nothing was sent.
    Invalid(ValidationError),

    /// Dispatch failed; the draft is kept for another attempt.
    Failed(DispatchError),

    /// Another submission of this form is still in flight.
    AlreadySubmitting,
}

impl SubmitOutcome {
    /// The message shown to the person filling in the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Sent(_) => SUCCESS_MESSAGE,
            Self::Invalid(error) => error.user_message(),
            Self::Failed(_) => FAILURE_MESSAGE,
            Self::AlreadySubmitting => BUSY_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

#[derive(Debug)]
struct Inner {
    draft: ContactDraft,
    state: FormState,
}

/// One contact form instance.
///
/// At most one submission is in flight at a time: `submit` moves the form
/// from `Idle` to `Submitting` under the lock, and every other `submit` or
/// `update_field` seen in that state is turned away.
pub struct ContactForm {
    dispatcher: Arc<dyn NotificationDispatcher>,
    inner: Mutex<Inner>,
}

impl ContactForm {
    pub fn new(dispatcher: Arc<dyn NotificationDispatcher>) -> Self {
        Self {
            dispatcher,
            inner: Mutex::new(Inner {
                draft: ContactDraft::default(),
                state: FormState::Idle,
            }),
        }
    }

    // The lock is never held across an await, and every write leaves Inner
    // consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> FormState {
        self.lock().state
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> ContactDraft {
        self.lock().draft.clone()
    }

    /// Write one field into the draft.
    ///
    /// Editing after a finished submission acknowledges its result.
    pub fn update_field(&self, field: ContactField, value: &str) -> Result<(), FormError> {
        let mut inner = self.lock();
        if inner.state == FormState::Submitting {
            return Err(FormError::Busy);
        }
        inner.draft.set(field, value)?;
        inner.state = FormState::Idle;
        Ok(())
    }

    /// Return to `Idle` after a result has been shown.
    pub fn acknowledge(&self) -> FormState {
        let mut inner = self.lock();
        if matches!(inner.state, FormState::Succeeded | FormState::Failed) {
            inner.state = FormState::Idle;
        }
        inner.state
    }

    /// Validate the draft and, if it is complete, dispatch it.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = {
            let mut inner = self.lock();
            if inner.state == FormState::Submitting {
                tracing::debug!("Submit ignored: submission already in flight");
                return SubmitOutcome::AlreadySubmitting;
            }
            inner.state = FormState::Idle;

            match validate(&inner.draft) {
                Ok(submission) => {
                    inner.state = FormState::Submitting;
                    submission
                }
                Err(e) => {
                    tracing::info!(error = %e, "Contact form rejected locally");
                    return SubmitOutcome::Invalid(e);
                }
            }
        };

        let guard = InFlight { form: self };
        let result = self.dispatcher.dispatch(&submission).await;
        guard.finish();

        let mut inner = self.lock();
        match result {
            Ok(receipt) => {
                inner.draft = ContactDraft::default();
                inner.state = FormState::Succeeded;
                SubmitOutcome::Sent(receipt)
            }
            Err(e) => {
                inner.state = FormState::Failed;
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Puts the form back to `Idle` if a pending `submit` future is dropped.
struct InFlight<'a> {
    form: &'a ContactForm,
}

impl InFlight<'_> {
    fn finish(self) {
        std::mem::forget(self);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut inner = self.form.lock();
        if inner.state == FormState::Submitting {
            inner.state = FormState::Idle;
        }
    }
}
