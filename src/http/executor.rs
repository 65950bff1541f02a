//! The request executor abstraction

use crate::error::Result;
use crate::types::{Endpoint, Page, QueryParams};
use async_trait::async_trait;
use std::sync::Arc;

/// Executes a single request against a list endpoint
#[async_trait]
pub trait Executor: Send + Sync {
    /// Fetch one page, failing with a classified error on any API failure
    async fn execute(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Page>;
}

/// Executor shared between resource services and in-flight streams
pub type SharedExecutor = Arc<dyn Executor>;
