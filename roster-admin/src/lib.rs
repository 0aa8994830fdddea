//! Roster admin library
//!
//! Controller for the admin users table: paged loading with
//! last-request-wins sequencing, cross-page selection, bulk activate and
//! deactivate, and the per-row status toggle. Rendering is left to the
//! embedding UI, which consumes [`view_model::UsersTableView`].
//!
//! Notes
//! - Public items are subject to change while the admin surface stabilizes.
//! - In-memory service stubs live behind the `testing` feature.

pub mod config;
pub mod domains;
pub mod infrastructure;
pub mod view_model;

pub use config::Config;
pub use domains::user_management::{
    UserManagementDomain, UserManagementState, effects::Effect,
    messages::Message,
};
pub use infrastructure::{ApiClient, UserAdminApiAdapter, UserAdminService};

use std::sync::Arc;

/// Wire a users table controller to the HTTP API described by `config`.
pub fn connect(config: &Config) -> Result<UserManagementDomain, infrastructure::ApiError> {
    let client = Arc::new(ApiClient::from_config(config)?);
    let service: Arc<dyn UserAdminService> =
        Arc::new(UserAdminApiAdapter::new(client));
    Ok(UserManagementDomain::new(service, config.page_size))
}
