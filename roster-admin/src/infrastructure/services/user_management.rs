use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use roster_core::{
    BulkUpdateOutcome, BulkUpdateService, FetchError, PageDataProvider,
    UpdateError,
};
use roster_model::{BulkUpdateRequest, BulkUpdateResponse, Page, PageQuery};

use crate::infrastructure::api_client::{ApiClient, ApiError};
use crate::infrastructure::constants::routes;

/// Everything the users table needs from the server.
pub trait UserAdminService: PageDataProvider + BulkUpdateService {}

impl<T> UserAdminService for T where T: PageDataProvider + BulkUpdateService {}

#[derive(Clone, Debug)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageDataProvider for UserAdminApiAdapter {
    async fn fetch_page(&self, query: PageQuery) -> Result<Page, FetchError> {
        self.client
            .get(routes::users::LIST, &query)
            .await
            .map_err(fetch_error)
    }
}

#[async_trait]
impl BulkUpdateService for UserAdminApiAdapter {
    async fn apply(
        &self,
        request: &BulkUpdateRequest,
    ) -> Result<BulkUpdateOutcome, UpdateError> {
        debug!(
            "[UserAdmin] Sending {} bulk update (active={})",
            request.mode(),
            request.set_active()
        );
        let body = self
            .client
            .put(routes::users::BULK_UPDATE, request)
            .await
            .map_err(update_error)?;

        Ok(BulkUpdateOutcome {
            updated_count: reported_count(&body),
        })
    }
}

/// Count from a success body, if it carries one.
///
/// The update has already been applied by the time this runs, so a body
/// that does not parse is an acknowledgement, never an error.
fn reported_count(body: &str) -> Option<u64> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<BulkUpdateResponse>(body) {
        Ok(response) => response.updated_count,
        Err(err) => {
            debug!("[UserAdmin] Bulk update acknowledged without a count: {}", err);
            None
        }
    }
}

fn fetch_error(err: ApiError) -> FetchError {
    warn!("[UserAdmin] Page fetch failed: {}", err);
    match err {
        ApiError::Status { status, body } => FetchError::Status {
            status: status.as_u16(),
            body,
        },
        ApiError::Decode(err) => FetchError::Decode(err.to_string()),
        other => FetchError::Transport(other.to_string()),
    }
}

fn update_error(err: ApiError) -> UpdateError {
    warn!("[UserAdmin] Bulk update failed: {}", err);
    match err {
        ApiError::Status { status, body } if status.is_client_error() => {
            UpdateError::Rejected(rejection_message(&body))
        }
        ApiError::Status { status, body } => UpdateError::Status {
            status: status.as_u16(),
            body,
        },
        ApiError::Decode(err) => UpdateError::Decode(err.to_string()),
        other => UpdateError::Transport(other.to_string()),
    }
}

/// Pulls `message`/`error` out of a JSON error body, falling back to the raw
/// text.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].iter().find_map(|key| {
                value.get(*key).and_then(|v| v.as_str()).map(str::to_owned)
            })
        })
        .unwrap_or_else(|| body.to_string())
}
