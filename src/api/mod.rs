//! # API Module
//!
//! HTTP endpoints served by the temporary local server during the OAuth
//! flow: the `/callback` handler that completes the PKCE code-for-token
//! exchange, and a `/health` probe.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
