//! Infrastructure module containing core utilities and shared components
//!
//! This module provides the HTTP client and service adapters used by the
//! user management domain

pub mod api_client;
pub mod constants;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used items
pub use api_client::{ApiClient, ApiError};
pub use services::{UserAdminApiAdapter, UserAdminService};
