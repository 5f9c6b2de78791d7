pub mod mock_email_client;

#[allow(unused_imports)]
pub use mock_email_client::{MockEmailClient, Scripted};
