//! Contracts consumed by the users table controller.
//!
//! The page provider and the bulk update service are independent; the
//! controller re-fetches the current page after every successful update.

use async_trait::async_trait;
use roster_model::{BulkUpdateRequest, Page, PageQuery};

use crate::error::{FetchError, UpdateError};

/// Result of a successful bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkUpdateOutcome {
    /// Rows the server reports as updated, when it reports anything.
    pub updated_count: Option<u64>,
}

impl BulkUpdateOutcome {
    pub fn reported(updated_count: u64) -> Self {
        Self {
            updated_count: Some(updated_count),
        }
    }
}

/// Source of paged user records.
#[async_trait]
pub trait PageDataProvider: Send + Sync {
    async fn fetch_page(&self, query: PageQuery) -> Result<Page, FetchError>;
}

/// Applies one field change to many users server-side.
///
/// Not guaranteed idempotent; callers never retry on their own.
#[async_trait]
pub trait BulkUpdateService: Send + Sync {
    async fn apply(
        &self,
        request: &BulkUpdateRequest,
    ) -> Result<BulkUpdateOutcome, UpdateError>;
}
