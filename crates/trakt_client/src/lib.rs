pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod masking;
pub mod utils;

pub use api::calendar::CalendarClient;
pub use api::models::CalendarEntry;
pub use auth::{AuthFailure, AuthStatus, DeviceAuthHandler, DeviceCodeGrant, TokenStore};
pub use config::TraktConfig;
pub use error::{Result, TraktError};
pub use masking::mask_token;
