//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact form: the
//! validated email address, the field names a form can edit, and the
//! immutable submission handed to the dispatcher. Values are validated at
//! construction time so an invalid submission cannot be represented.

pub mod email;
pub mod errors;
pub mod submission;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use submission::{ContactField, ContactSubmission};
