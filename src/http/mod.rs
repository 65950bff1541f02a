//! HTTP request execution
//!
//! Issues one GET per call against the Data API and classifies the response.
//!
//! # Features
//!
//! - **Executor trait**: the seam pagination and resources depend on
//! - **Credential handling**: API key or bearer token attached per request
//! - **Error classification**: status codes and error payloads mapped to
//!   [`ApiErrorKind`](crate::error::ApiErrorKind)
//!
//! There are deliberately no retries here; a failed call is reported once.

mod classify;
mod client;
mod executor;

pub use classify::{classify_response, first_reason};
pub use client::HttpClient;
pub use executor::{Executor, SharedExecutor};

#[cfg(test)]
mod tests;
