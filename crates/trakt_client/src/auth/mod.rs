//! Trakt Authentication Module
//!
//! Device Code Flow:
//! 1. Reuse the cached token if the token file exists
//! 2. Request a device code from /oauth/device/code
//! 3. User enters the code at the verification URL
//! 4. Poll /oauth/device/token until approved, rejected or expired
//! 5. Cache the access token

pub mod device_code;
pub mod handler;
pub mod token_store;

pub use device_code::{present_device_code, DeviceCodeGrant};
pub use handler::{AuthFailure, AuthStatus, DeviceAuthHandler};
pub use token_store::TokenStore;
