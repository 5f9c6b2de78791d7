//! Application service layer.
//!
//! Services contain the business logic between the contact form and the
//! email provider client.

mod dispatch_service;

pub use dispatch_service::{DispatchReceipt, NotificationDispatcher, NotificationDispatcherImpl};
