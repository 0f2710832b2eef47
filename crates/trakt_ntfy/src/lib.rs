pub mod config;
pub mod relay;

pub use config::Settings;
pub use relay::{notification_message, notify, Relay, RunOutcome};
