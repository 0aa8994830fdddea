//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod bulk;
pub mod error;
pub mod ids;
pub mod page;
pub mod prelude;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use bulk::{BulkAction, BulkUpdateRequest, BulkUpdateResponse, UserPatch};
pub use error::{ModelError, Result as ModelResult};
pub use ids::UserId;
pub use page::{Page, PageQuery};
pub use user::UserRecord;
