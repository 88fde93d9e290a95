//! API middleware.

mod auth;

pub use auth::{actor, authorization_gate, CurrentUser};
