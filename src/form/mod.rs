//! Form intake: the draft a visitor edits and the guarded submit flow.

mod contact_form;
mod draft;

pub use contact_form::{
    ContactForm, FormState, SubmitOutcome, BUSY_MESSAGE, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use draft::{validate, ContactDraft};
