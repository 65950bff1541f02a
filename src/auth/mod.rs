//! Authentication module
//!
//! Supports: API key (query parameter) and OAuth access token (bearer header).
//!
//! Obtaining an OAuth token is left to the caller; this module only attaches
//! an already-issued credential to outgoing requests.

mod credential;

pub use credential::{Credential, API_KEY_PARAM};

#[cfg(test)]
mod tests;
